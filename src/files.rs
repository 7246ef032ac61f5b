//! Package and external-file access.
//!
//! Opening the docx zip container and resolving filesystem paths are the
//! caller's business; the reader only needs these two capabilities to
//! build deferred image handles. Both return plain `io::Read` streams —
//! the stream is released by drop on every exit path, including panics
//! in the consumer.

use std::collections::HashMap;
use std::io::{self, Cursor, Read};

use thiserror::Error;

/// Failure to open a deferred byte source.
///
/// Raised when the serializer finally invokes an image handle, not
/// during reading — the reader itself reports problems as warnings.
#[derive(Debug, Error)]
pub enum OpenError {
    /// The package or file store has no entry under this name.
    #[error("could not open {name}: not found")]
    NotFound { name: String },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Access to parts inside the opened docx package.
///
/// Entry names are zip entry names (`"word/media/image1.png"`), already
/// normalised by [`crate::uris::uri_to_zip_entry_name`].
pub trait Package {
    fn open_entry(&self, name: &str) -> Result<Box<dyn Read + '_>, OpenError>;
}

/// Access to files outside the package, for linked (rather than
/// embedded) images. The uri is the relationship target verbatim.
pub trait FileAccess {
    fn open(&self, uri: &str) -> Result<Box<dyn Read + '_>, OpenError>;
}

/// An in-memory package backed by a name → bytes map.
///
/// The crate's own tests use this; callers without a real zip container
/// (or with one they have already decompressed) can too.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPackage {
    entries: HashMap<String, Vec<u8>>,
}

impl InMemoryPackage {
    pub fn new(entries: impl IntoIterator<Item = (String, Vec<u8>)>) -> Self {
        InMemoryPackage {
            entries: entries.into_iter().collect(),
        }
    }
}

impl Package for InMemoryPackage {
    fn open_entry(&self, name: &str) -> Result<Box<dyn Read + '_>, OpenError> {
        match self.entries.get(name) {
            Some(bytes) => Ok(Box::new(Cursor::new(bytes.as_slice()))),
            None => Err(OpenError::NotFound {
                name: name.to_string(),
            }),
        }
    }
}

impl FileAccess for InMemoryPackage {
    fn open(&self, uri: &str) -> Result<Box<dyn Read + '_>, OpenError> {
        self.open_entry(uri)
    }
}
