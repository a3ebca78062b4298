//! Head-injection tag descriptors.

use serde::{Deserialize, Serialize};

use crate::basepath::resolve_root;

/// A tag injected into the document head.
///
/// Attributes keep their declaration order through serialization so the
/// renderer emits them deterministically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadTag {
    /// Tag name (e.g. "script").
    pub tag: String,

    /// Ordered (name, value) attribute pairs.
    pub attrs: Vec<(String, String)>,
}

impl HeadTag {
    /// A `<script src="...">` tag.
    pub fn script(src: impl Into<String>) -> Self {
        Self {
            tag: "script".to_string(),
            attrs: vec![("src".to_string(), src.into())],
        }
    }

    /// Look up an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Build the version-metadata script tags for a deployment.
///
/// Two scripts, in document order: `versions.js` at the project root, listing
/// every published version regardless of the one currently viewed, and
/// `siteinfo.js` under the mount path itself, describing the version being
/// built. The renderer executes them in sequence, so the version list is
/// loaded before the per-version metadata runs.
pub fn version_scripts(mount_path: &str) -> Vec<HeadTag> {
    vec![
        HeadTag::script(format!("{}versions.js", resolve_root(mount_path))),
        HeadTag::script(format!("{}siteinfo.js", mount_path)),
    ]
}
