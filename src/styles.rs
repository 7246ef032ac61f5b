//! Styles part: style id → style, per style family.
//!
//! Paragraph, character, and table styles live in separate tables because
//! OOXML allows the same id in different families. Numbering styles are
//! kept too — they only matter as the indirection target of a
//! `w:numStyleLink` in the numbering part.

use std::collections::HashMap;

use crate::xml::XmlElement;

/// A style definition. `name` is the human-readable style name; it is
/// optional because a malformed part can omit `w:name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub style_id: String,
    pub name: Option<String>,
}

/// A numbering style: a style whose only payload is the `w:numId` its
/// paragraph properties point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberingStyle {
    pub num_id: Option<String>,
}

/// Lookup tables over the styles part.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Styles {
    paragraph_styles: HashMap<String, Style>,
    character_styles: HashMap<String, Style>,
    table_styles: HashMap<String, Style>,
    numbering_styles: HashMap<String, NumberingStyle>,
}

impl Styles {
    pub fn new(
        paragraph_styles: impl IntoIterator<Item = Style>,
        character_styles: impl IntoIterator<Item = Style>,
        table_styles: impl IntoIterator<Item = Style>,
    ) -> Self {
        Styles {
            paragraph_styles: index_by_id(paragraph_styles),
            character_styles: index_by_id(character_styles),
            table_styles: index_by_id(table_styles),
            numbering_styles: HashMap::new(),
        }
    }

    pub fn find_paragraph_style_by_id(&self, style_id: &str) -> Option<&Style> {
        self.paragraph_styles.get(style_id)
    }

    pub fn find_character_style_by_id(&self, style_id: &str) -> Option<&Style> {
        self.character_styles.get(style_id)
    }

    pub fn find_table_style_by_id(&self, style_id: &str) -> Option<&Style> {
        self.table_styles.get(style_id)
    }

    pub fn find_numbering_style_by_id(&self, style_id: &str) -> Option<&NumberingStyle> {
        self.numbering_styles.get(style_id)
    }

    /// Iterates all numbering styles (id, style). The numbering part
    /// reader uses this to resolve `w:numStyleLink` indirections.
    pub fn numbering_styles(&self) -> impl Iterator<Item = (&str, &NumberingStyle)> {
        self.numbering_styles
            .iter()
            .map(|(style_id, style)| (style_id.as_str(), style))
    }

    /// Reads a `w:styles` root element.
    ///
    /// Each `w:style` child is filed by its `w:type`; unknown types are
    /// skipped. Numbering styles store the `w:numId` found under their
    /// paragraph properties instead of a display name.
    pub fn read(root: &XmlElement) -> Styles {
        let mut styles = Styles::default();
        for element in root.find_children("w:style") {
            let Some(style_id) = element.attribute("w:styleId") else {
                continue;
            };
            match element.attribute("w:type") {
                Some("numbering") => {
                    let num_id = element
                        .find_child_or_null("w:pPr")
                        .find_child_or_null("w:numPr")
                        .find_child_or_null("w:numId")
                        .attribute("w:val")
                        .map(str::to_string);
                    styles
                        .numbering_styles
                        .insert(style_id.to_string(), NumberingStyle { num_id });
                }
                Some(type_) => {
                    let table = match type_ {
                        "paragraph" => &mut styles.paragraph_styles,
                        "character" => &mut styles.character_styles,
                        "table" => &mut styles.table_styles,
                        _ => continue,
                    };
                    let name = element
                        .find_child_or_null("w:name")
                        .attribute("w:val")
                        .map(str::to_string);
                    table.insert(
                        style_id.to_string(),
                        Style {
                            style_id: style_id.to_string(),
                            name,
                        },
                    );
                }
                None => {}
            }
        }
        styles
    }
}

fn index_by_id(styles: impl IntoIterator<Item = Style>) -> HashMap<String, Style> {
    styles
        .into_iter()
        .map(|style| (style.style_id.clone(), style))
        .collect()
}

#[cfg(test)]
#[path = "styles_tests.rs"]
mod tests;
