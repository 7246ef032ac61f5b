//! docink — DOCX document-body reader.
//!
//! Walks the parsed XML tree of a Word document body and produces a
//! language-neutral document model (paragraphs, runs, tables, images,
//! hyperlinks, notes, comments) plus a stream of warnings. The pipeline
//! around it — zip container, raw XML parsing, style-map compilation,
//! HTML serialization — is the caller's business; this crate consumes
//! those stages through the lookup tables and access traits in
//! [`styles`], [`numbering`], [`relationships`], [`content_types`], and
//! [`files`].
//!
//! ```
//! use docink::body::BodyReader;
//! use docink::xml;
//!
//! let styles = docink::styles::Styles::default();
//! let numbering = docink::numbering::Numbering::default();
//! let relationships = docink::relationships::Relationships::default();
//! let content_types = docink::content_types::ContentTypes::default();
//!
//! let paragraph = xml::element(
//!     "w:p",
//!     &[],
//!     vec![xml::element("w:r", &[], vec![
//!         xml::element("w:t", &[], vec![xml::text("Hello")]).into(),
//!     ]).into()],
//! );
//!
//! let mut reader = BodyReader::new(&styles, &numbering, &relationships, &content_types);
//! let result = reader.read_all(&[paragraph.into()]);
//! assert_eq!(result.messages, vec![]);
//! ```

pub mod body;
pub mod content_types;
mod dingbats;
pub mod document;
pub mod documents;
pub mod files;
pub mod numbering;
pub mod relationships;
pub mod results;
pub mod styles;
pub mod uris;
pub mod xml;

pub use body::BodyReader;
pub use document::read_document;
pub use documents::{Document, Node};
pub use results::{Message, ReadOutcome, ReadResult};
