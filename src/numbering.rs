//! Numbering part: (numId, ilvl) → list level.
//!
//! The part is an indirection maze: `w:num` entries point at
//! `w:abstractNum` definitions, which either carry the levels directly or
//! defer through a `w:numStyleLink` to a numbering style, which points at
//! yet another `w:num`. The lookup flattens all of that to a
//! [`NumberingLevel`].

use std::collections::{HashMap, HashSet};

use crate::styles::Styles;
use crate::xml::XmlElement;

/// A resolved list level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberingLevel {
    /// The `w:ilvl` value, kept as a string: it is an identity for the
    /// downstream list builder, not a number to do arithmetic on.
    pub level_index: String,
    /// `false` for bullet lists, `true` for every numbered format.
    pub is_ordered: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
struct AbstractNum {
    levels: HashMap<String, NumberingLevel>,
    num_style_link: Option<String>,
}

/// Lookup table over the numbering part.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Numbering {
    abstract_nums: HashMap<String, AbstractNum>,
    /// numId → abstractNumId.
    nums: HashMap<String, String>,
    levels_by_paragraph_style_id: HashMap<String, NumberingLevel>,
    /// Numbering-style id → numId, copied from the styles part at read
    /// time so lookups need no styles reference.
    num_ids_by_style_id: HashMap<String, String>,
}

impl Numbering {
    /// Resolves a (numId, level) pair to its list level.
    pub fn find_level(&self, num_id: &str, level: &str) -> Option<NumberingLevel> {
        // numStyleLink chains are followed with a visited set: the part is
        // untrusted input and a cyclic chain must not hang the reader.
        let mut visited: HashSet<&str> = HashSet::new();
        let mut current = num_id;
        loop {
            if !visited.insert(current) {
                return None;
            }
            let abstract_num = self.abstract_nums.get(self.nums.get(current)?)?;
            match &abstract_num.num_style_link {
                None => return abstract_num.levels.get(level).cloned(),
                Some(style_id) => current = self.num_ids_by_style_id.get(style_id)?.as_str(),
            }
        }
    }

    /// Resolves the level associated with a paragraph style, if the
    /// numbering part declared one via `w:pStyle`.
    pub fn find_level_by_paragraph_style_id(&self, style_id: &str) -> Option<NumberingLevel> {
        self.levels_by_paragraph_style_id.get(style_id).cloned()
    }

    /// Reads a `w:numbering` root element. `styles` supplies the
    /// numbering styles that `w:numStyleLink` entries indirect through.
    pub fn read(root: &XmlElement, styles: &Styles) -> Numbering {
        let mut numbering = Numbering::default();

        for element in root.find_children("w:abstractNum") {
            let Some(abstract_num_id) = element.attribute("w:abstractNumId") else {
                continue;
            };
            let mut abstract_num = AbstractNum {
                num_style_link: element
                    .find_child_or_null("w:numStyleLink")
                    .attribute("w:val")
                    .map(str::to_string),
                ..AbstractNum::default()
            };
            for level_element in element.find_children("w:lvl") {
                let Some(level_index) = level_element.attribute("w:ilvl") else {
                    continue;
                };
                let num_format = level_element
                    .find_child_or_null("w:numFmt")
                    .attribute("w:val");
                let level = NumberingLevel {
                    level_index: level_index.to_string(),
                    is_ordered: num_format != Some("bullet"),
                };
                if let Some(paragraph_style_id) =
                    level_element.find_child_or_null("w:pStyle").attribute("w:val")
                {
                    numbering
                        .levels_by_paragraph_style_id
                        .insert(paragraph_style_id.to_string(), level.clone());
                }
                abstract_num.levels.insert(level_index.to_string(), level);
            }
            numbering
                .abstract_nums
                .insert(abstract_num_id.to_string(), abstract_num);
        }

        for element in root.find_children("w:num") {
            let num_id = element.attribute("w:numId");
            let abstract_num_id = element
                .find_child_or_null("w:abstractNumId")
                .attribute("w:val");
            if let (Some(num_id), Some(abstract_num_id)) = (num_id, abstract_num_id) {
                numbering
                    .nums
                    .insert(num_id.to_string(), abstract_num_id.to_string());
            }
        }

        // Copy the styles part's numbering styles so numStyleLink chains
        // resolve without holding a styles reference past read time.
        numbering.num_ids_by_style_id = styles
            .numbering_styles()
            .filter_map(|(style_id, style)| Some((style_id.to_string(), style.num_id.clone()?)))
            .collect();

        numbering
    }
}

#[cfg(test)]
#[path = "numbering_tests.rs"]
mod tests;
