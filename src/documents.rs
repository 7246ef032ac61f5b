//! The document model: what the reader produces.
//!
//! These types are the language-neutral output of the body reader —
//! paragraphs, runs, tables, images, hyperlinks, notes, comments — with
//! none of the OOXML tag vocabulary left in them. The HTML and Markdown
//! stages downstream consume this model and nothing else.

use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::sync::Arc;

use crate::files::{FileAccess, OpenError, Package};
use crate::numbering::NumberingLevel;

/// A node in the document tree.
///
/// Block-level children of a [`Document`] are `Paragraph` and `Table`;
/// `Bookmark`, `NoteReference`, `CommentReference`, `Image`, and `Text`
/// also appear at block level when they are promoted out of inline
/// containers via the extras channel.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Paragraph(Paragraph),
    Run(Run),
    Text(Text),
    Tab,
    Break(Break),
    Bookmark(Bookmark),
    Hyperlink(Hyperlink),
    NoteReference(NoteReference),
    CommentReference(CommentReference),
    Image(Image),
    Table(Table),
    TableRow(TableRow),
    TableCell(TableCell),
}

/// A complete document: body children plus the notes and comments the
/// body's references point into.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub children: Vec<Node>,
    pub notes: Notes,
    pub comments: Vec<Comment>,
}

/// A paragraph with its resolved properties.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    pub children: Vec<Node>,
    pub style_id: Option<String>,
    pub style_name: Option<String>,
    pub numbering: Option<NumberingLevel>,
    /// The raw `w:numId` value, kept verbatim so the HTML stage can group
    /// consecutive items of the same list.
    pub list_id: Option<String>,
    pub alignment: Option<String>,
    pub indent: ParagraphIndent,
}

/// A contiguous span of text with uniform character formatting.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Run {
    pub children: Vec<Node>,
    pub style_id: Option<String>,
    pub style_name: Option<String>,
    pub is_bold: bool,
    pub is_italic: bool,
    pub is_underline: bool,
    pub is_strikethrough: bool,
    pub is_all_caps: bool,
    pub is_small_caps: bool,
    pub vertical_alignment: Option<String>,
    pub font: Option<String>,
    /// Point size. `w:sz` is given in half-points; the reader halves it.
    pub font_size: Option<f64>,
    pub highlight_color: Option<String>,
    pub font_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text {
    pub value: String,
}

/// A break within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Break {
    Line,
    Page,
    Column,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub name: String,
}

/// A link: external (`href`) or internal (`anchor`), never both.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Hyperlink {
    pub children: Vec<Node>,
    pub href: Option<String>,
    pub anchor: Option<String>,
    pub target_frame: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteType {
    Footnote,
    Endnote,
}

/// A reference from the body into the notes table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteReference {
    pub note_type: NoteType,
    pub note_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentReference {
    pub comment_id: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub children: Vec<Node>,
    pub style_id: Option<String>,
    pub style_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableRow {
    pub children: Vec<Node>,
    pub is_header: bool,
}

/// A table cell after merge resolution: spans are always ≥ 1.
#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    pub children: Vec<Node>,
    pub colspan: usize,
    pub rowspan: usize,
    /// Vertical-merge continuation marker, meaningful only between cell
    /// reading and row-span resolution. Resolution erases it: merged-in
    /// cells are dropped, every surviving cell reads `false`.
    pub(crate) vmerge: bool,
}

impl Default for TableCell {
    fn default() -> Self {
        TableCell {
            children: Vec::new(),
            colspan: 1,
            rowspan: 1,
            vmerge: false,
        }
    }
}

/// Paragraph indentation, all values verbatim from the source attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParagraphIndent {
    pub start: Option<String>,
    pub end: Option<String>,
    pub first_line: Option<String>,
    pub hanging: Option<String>,
}

/// Display size in pixels, stringly typed because VML shape sizes arrive
/// as CSS lengths (`"100pt"`) while drawing sizes are converted numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Size {
    pub width: String,
    pub height: String,
}

// ── Images ───────────────────────────────────────────────────────────────────

/// An image with a deferred byte source.
///
/// `open` is not called during reading: the handle stays valid for as
/// long as the package is open, and the serializer invokes it when (and
/// if) it actually embeds the bytes.
#[derive(Clone)]
pub struct Image {
    pub alt_text: Option<String>,
    pub content_type: String,
    pub size: Option<Size>,
    /// Extra HTML attributes decided at read time (`class="fr-bordered"`
    /// for bordered drawings, the raw VML attributes for `v:imagedata`).
    pub attributes: HashMap<String, String>,
    pub(crate) source: ImageSource,
}

impl Image {
    /// Opens the underlying image bytes. The returned stream is released
    /// by drop on all exit paths.
    pub fn open(&self) -> Result<Box<dyn Read + '_>, OpenError> {
        match &self.source {
            ImageSource::Embedded {
                package,
                entry_name,
            } => package.open_entry(entry_name),
            ImageSource::Linked { files, uri } => files.open(uri),
        }
    }

    /// The package entry name or external uri this image resolves to.
    pub fn path(&self) -> &str {
        match &self.source {
            ImageSource::Embedded { entry_name, .. } => entry_name,
            ImageSource::Linked { uri, .. } => uri,
        }
    }
}

/// Where an image's bytes live: a part inside the package, or a file the
/// relationship points at externally.
#[derive(Clone)]
pub(crate) enum ImageSource {
    Embedded {
        package: Arc<dyn Package>,
        entry_name: String,
    },
    Linked {
        files: Arc<dyn FileAccess>,
        uri: String,
    },
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("alt_text", &self.alt_text)
            .field("content_type", &self.content_type)
            .field("size", &self.size)
            .field("attributes", &self.attributes)
            .field("path", &self.path())
            .finish()
    }
}

// Source accessors are compared by the path they resolve, not by the
// backing trait object, so structurally identical reads compare equal.
impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.alt_text == other.alt_text
            && self.content_type == other.content_type
            && self.size == other.size
            && self.attributes == other.attributes
            && self.path() == other.path()
    }
}

// ── Notes and comments ───────────────────────────────────────────────────────

/// A footnote or endnote body, produced by the notes part reader.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub note_type: NoteType,
    pub note_id: String,
    pub body: Vec<Node>,
}

/// The document's notes, keyed by kind and id for reference resolution.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Notes {
    notes: HashMap<(NoteType, String), Note>,
}

impl Notes {
    pub fn new(notes: impl IntoIterator<Item = Note>) -> Self {
        Notes {
            notes: notes
                .into_iter()
                .map(|note| ((note.note_type, note.note_id.clone()), note))
                .collect(),
        }
    }

    pub fn find_note(&self, note_type: NoteType, note_id: &str) -> Option<&Note> {
        self.notes.get(&(note_type, note_id.to_string()))
    }

    /// Resolves a body reference to its note.
    pub fn resolve(&self, reference: &NoteReference) -> Option<&Note> {
        self.find_note(reference.note_type, &reference.note_id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub comment_id: String,
    pub body: Vec<Node>,
    pub author_name: Option<String>,
    pub author_initials: Option<String>,
}
