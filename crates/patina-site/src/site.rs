//! Immutable site-configuration artifact.

use serde::{Deserialize, Serialize};

use crate::head::HeadTag;
use crate::nav::{assemble, NavNode};
use crate::theme::ThemeConfig;

/// Literal site metadata for one deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteMeta {
    /// Site title.
    pub title: String,

    /// Site description.
    pub description: String,

    /// URL path prefix this deployment is served under.
    pub mount_path: String,

    /// Output directory for the generated artifact.
    pub out_dir: String,
}

/// The generated site configuration consumed by the rendering engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,

    /// Base mount path of this deployment.
    pub base: String,

    pub out_dir: String,

    /// Head-injection tags, in document order.
    pub head: Vec<HeadTag>,

    pub nav: Vec<NavNode>,
    pub sidebar: Vec<NavNode>,
    pub theme: ThemeConfig,
}

impl SiteConfig {
    /// Assemble a site configuration from explicit inputs.
    ///
    /// Pure factory: identical inputs produce structurally equal values, and
    /// the result holds no reference to shared state. The navigation,
    /// sidebar, and head scripts all derive from `sections` and
    /// `meta.mount_path` in one assembly pass.
    pub fn assemble(meta: SiteMeta, sections: &[NavNode], theme: ThemeConfig) -> Self {
        let assembled = assemble(sections, &meta.mount_path);

        Self {
            title: meta.title,
            description: meta.description,
            base: meta.mount_path,
            out_dir: meta.out_dir,
            head: assembled.scripts,
            nav: assembled.nav,
            sidebar: assembled.sidebar,
            theme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> SiteMeta {
        SiteMeta {
            title: "My Docs".to_string(),
            description: "Project documentation".to_string(),
            mount_path: "/proj/dev/".to_string(),
            out_dir: "dist".to_string(),
        }
    }

    fn sections() -> Vec<NavNode> {
        vec![
            NavNode::link("Home", "/"),
            NavNode::group("Guide", vec![NavNode::link("Install", "/guide/install/")]),
        ]
    }

    #[test]
    fn factory_assembles_all_fields() {
        let site = SiteConfig::assemble(meta(), &sections(), ThemeConfig::default());

        assert_eq!(site.title, "My Docs");
        assert_eq!(site.base, "/proj/dev/");
        assert_eq!(site.out_dir, "dist");
        assert_eq!(site.head[0].attr("src"), Some("/proj/versions.js"));
        assert_eq!(site.head[1].attr("src"), Some("/proj/dev/siteinfo.js"));
        assert_eq!(site.sidebar, sections());
        assert_eq!(site.nav.len(), sections().len() + 1);
    }

    #[test]
    fn factory_is_idempotent() {
        let a = SiteConfig::assemble(meta(), &sections(), ThemeConfig::default());
        let b = SiteConfig::assemble(meta(), &sections(), ThemeConfig::default());

        assert_eq!(a, b);
    }

    #[test]
    fn artifact_round_trips_through_json() {
        let site = SiteConfig::assemble(meta(), &sections(), ThemeConfig::default());

        let json = serde_json::to_string(&site).unwrap();
        let back: SiteConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(site, back);
    }
}
