//! Declarative section entries and their conversion to navigation nodes.

use serde::Deserialize;

use patina_site::NavNode;

use crate::ManifestError;

/// A section entry as declared in the manifest.
///
/// An entry is either a page link (`link`) or a titled group of nested
/// entries (`items`), never both. `collapsed` is a display hint for groups
/// and is ignored on links.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SectionEntry {
    pub label: String,
    pub link: Option<String>,

    /// Render the group collapsed initially.
    pub collapsed: Option<bool>,

    pub items: Vec<SectionEntry>,
}

impl SectionEntry {
    /// Validate this entry and its nested items.
    pub(crate) fn validate(&self) -> Result<(), ManifestError> {
        if self.label.trim().is_empty() {
            return Err(ManifestError::Validation(
                "section entries require a non-empty label".to_string(),
            ));
        }

        match (&self.link, self.items.is_empty()) {
            (Some(_), false) => Err(ManifestError::Validation(format!(
                "section '{}' declares both link and items",
                self.label
            ))),
            (None, true) => Err(ManifestError::Validation(format!(
                "section '{}' declares neither link nor items",
                self.label
            ))),
            _ => self.items.iter().try_for_each(Self::validate),
        }
    }

    /// Convert to a core navigation node.
    pub fn to_node(&self) -> NavNode {
        match &self.link {
            Some(link) => NavNode::Link {
                label: self.label.clone(),
                link: link.clone(),
            },
            None => NavNode::Group {
                label: self.label.clone(),
                collapsed: self.collapsed.unwrap_or(false),
                children: self.items.iter().map(Self::to_node).collect(),
            },
        }
    }
}
