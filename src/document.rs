//! Document-part reader: wires the body reader into a [`Document`].
//!
//! The `w:document` root is thin — find the `w:body`, feed its children
//! through the body reader, and attach the notes and comments the
//! dedicated part readers produced.

use crate::body::BodyReader;
use crate::documents::{Comment, Document, Notes};
use crate::results::ReadOutcome;
use crate::xml::XmlElement;

/// Reads a `w:document` root element into a [`Document`].
///
/// A missing `w:body` yields an empty document rather than an error.
/// Extras still floating at body level (images promoted out of blocks
/// that never reattached them) are appended after the body children, so
/// nothing the reader produced is dropped.
pub fn read_document(
    element: &XmlElement,
    body_reader: &mut BodyReader<'_>,
    notes: Notes,
    comments: Vec<Comment>,
) -> ReadOutcome<Document> {
    let children: &[_] = match element.find_child("w:body") {
        Some(body) => &body.children,
        None => &[],
    };
    let result = body_reader.read_all(children).append_extra();
    ReadOutcome {
        value: Document {
            children: result.elements,
            notes,
            comments,
        },
        messages: result.messages,
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
