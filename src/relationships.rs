//! Relationships part: relationship id → target uri.
//!
//! Each package part has its own relationships part; the body reader is
//! handed the one belonging to `word/document.xml`.

use std::collections::HashMap;

use crate::xml::XmlElement;

/// One relationship entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub relationship_id: String,
    pub target: String,
    pub type_: String,
}

/// Lookup table over a part's relationships.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Relationships {
    targets: HashMap<String, String>,
}

impl Relationships {
    pub fn new(relationships: impl IntoIterator<Item = Relationship>) -> Self {
        Relationships {
            targets: relationships
                .into_iter()
                .map(|relationship| (relationship.relationship_id, relationship.target))
                .collect(),
        }
    }

    /// Resolves a relationship id to its target uri. A dangling id is the
    /// caller's problem to report — the body reader turns it into a
    /// warning at each use site.
    pub fn find_target_by_relationship_id(&self, relationship_id: &str) -> Option<&str> {
        self.targets.get(relationship_id).map(String::as_str)
    }

    /// Reads a `Relationships` root element from a `.rels` part.
    pub fn read(root: &XmlElement) -> Relationships {
        let relationships = root
            .find_children("relationships:Relationship")
            .into_iter()
            .filter_map(|element| {
                Some(Relationship {
                    relationship_id: element.attribute("Id")?.to_string(),
                    target: element.attribute("Target")?.to_string(),
                    type_: element.attribute("Type").unwrap_or_default().to_string(),
                })
            })
            .collect::<Vec<_>>();
        Relationships::new(relationships)
    }
}

#[cfg(test)]
#[path = "relationships_tests.rs"]
mod tests;
