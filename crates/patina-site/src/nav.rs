//! Navigation and sidebar tree assembly.

use serde::{Deserialize, Serialize};

use crate::head::{version_scripts, HeadTag};

/// Component reference the renderer resolves to the version-picker UI.
pub const VERSION_PICKER: &str = "VersionPicker";

/// A node in the navigation or sidebar tree.
///
/// Trees may nest to arbitrary depth. `Dynamic` nodes are opaque to this
/// crate: the renderer resolves the component reference to host-supplied UI,
/// assembly only inserts and orders the marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavNode {
    /// Leaf entry pointing at a page.
    Link { label: String, link: String },

    /// Titled group of nested entries.
    Group {
        label: String,
        /// Render the group collapsed initially.
        #[serde(default)]
        collapsed: bool,
        children: Vec<NavNode>,
    },

    /// Host-resolved dynamic component, not a link.
    Dynamic { component: String },
}

impl NavNode {
    /// A leaf link entry.
    pub fn link(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            link: link.into(),
        }
    }

    /// An expanded group of nested entries.
    pub fn group(label: impl Into<String>, children: Vec<NavNode>) -> Self {
        Self::Group {
            label: label.into(),
            collapsed: false,
            children,
        }
    }

    /// The version-picker marker entry.
    pub fn version_picker() -> Self {
        Self::Dynamic {
            component: VERSION_PICKER.to_string(),
        }
    }
}

/// Navigation structures and head scripts assembled for one deployment.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembled {
    /// Navigation bar entries, version picker last.
    pub nav: Vec<NavNode>,
    /// Sidebar entries, the section tree exactly as declared.
    pub sidebar: Vec<NavNode>,
    /// Version-metadata script tags, in document order.
    pub scripts: Vec<HeadTag>,
}

/// Derive the navigation bar entries from the canonical section tree.
///
/// The static entries keep their declared order; the version-picker entry is
/// appended after all of them, never interleaved.
pub fn to_nav(sections: &[NavNode]) -> Vec<NavNode> {
    let mut nav = sections.to_vec();
    nav.push(NavNode::version_picker());
    nav
}

/// Derive the sidebar entries from the canonical section tree.
pub fn to_sidebar(sections: &[NavNode]) -> Vec<NavNode> {
    sections.to_vec()
}

/// Assemble the navigation, sidebar, and version script tags for a deployment.
///
/// Nav and sidebar derive from the same canonical section tree, so the two
/// cannot drift; only the nav carries the version-picker entry. An empty
/// section list is a valid degenerate configuration: the nav holds only the
/// version picker and the sidebar is empty.
pub fn assemble(sections: &[NavNode], mount_path: &str) -> Assembled {
    Assembled {
        nav: to_nav(sections),
        sidebar: to_sidebar(sections),
        scripts: version_scripts(mount_path),
    }
}
