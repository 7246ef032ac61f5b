//! Content-types part: part path → MIME type.
//!
//! `[Content_Types].xml` declares per-extension defaults plus per-part
//! overrides. A handful of image extensions get built-in fallbacks so a
//! sparse part still yields usable types for the common formats.

use std::collections::HashMap;

use crate::xml::XmlElement;

/// Extension fallbacks applied when neither an override nor a declared
/// default matches.
const FALLBACK_CONTENT_TYPES: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("jpeg", "image/jpeg"),
    ("jpg", "image/jpeg"),
    ("bmp", "image/bmp"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
];

/// Lookup table over the content-types part.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentTypes {
    extension_defaults: HashMap<String, String>,
    overrides: HashMap<String, String>,
}

impl ContentTypes {
    /// Resolves the MIME type for a part path.
    ///
    /// Overrides are keyed by absolute part name (`/word/media/x.png`),
    /// so the leading slash is added before the probe. Extensions match
    /// case-insensitively.
    pub fn find_content_type(&self, path: &str) -> Option<String> {
        if let Some(content_type) = self.overrides.get(&format!("/{path}")) {
            return Some(content_type.clone());
        }
        let extension = path.rsplit('.').next().unwrap_or_default().to_lowercase();
        if let Some(content_type) = self.extension_defaults.get(&extension) {
            return Some(content_type.clone());
        }
        FALLBACK_CONTENT_TYPES
            .iter()
            .find(|(fallback_extension, _)| *fallback_extension == extension)
            .map(|(_, content_type)| content_type.to_string())
    }

    /// Reads a `content-types:Types` root element.
    pub fn read(root: &XmlElement) -> ContentTypes {
        let mut content_types = ContentTypes::default();
        for child in root.find_children("content-types:Default") {
            if let (Some(extension), Some(content_type)) =
                (child.attribute("Extension"), child.attribute("ContentType"))
            {
                content_types
                    .extension_defaults
                    .insert(extension.to_lowercase(), content_type.to_string());
            }
        }
        for child in root.find_children("content-types:Override") {
            if let (Some(part_name), Some(content_type)) =
                (child.attribute("PartName"), child.attribute("ContentType"))
            {
                content_types
                    .overrides
                    .insert(part_name.to_string(), content_type.to_string());
            }
        }
        content_types
    }
}

#[cfg(test)]
#[path = "content_types_tests.rs"]
mod tests;
