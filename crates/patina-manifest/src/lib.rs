//! Declarative site manifest for patina.
//!
//! Parses `patina.toml` manifests with serde and converts the declared
//! section tree into core navigation nodes.

pub mod sections;

pub use sections::SectionEntry;

use std::path::Path;

use serde::Deserialize;

use patina_site::{NavNode, SiteMeta, ThemeConfig};

/// Manifest filename looked up in the working directory by default.
pub const MANIFEST_FILENAME: &str = "patina.toml";

/// Errors that can occur when loading a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to read manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse manifest: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid manifest: {0}")]
    Validation(String),
}

/// Parsed `patina.toml` manifest.
///
/// All tables are optional; missing values fall back to the defaults a fresh
/// `patina init` scaffold would declare.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Manifest {
    pub site: SiteTable,
    pub sections: Vec<SectionEntry>,
    pub theme: ThemeConfig,
}

/// `[site]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteTable {
    pub title: String,
    pub description: String,

    /// Default mount path; the build tool usually overrides it per deployment.
    pub mount_path: String,

    pub out_dir: String,
}

impl Default for SiteTable {
    fn default() -> Self {
        Self {
            title: "Documentation".to_string(),
            description: String::new(),
            mount_path: "/".to_string(),
            out_dir: "dist".to_string(),
        }
    }
}

impl Manifest {
    /// Load and validate a manifest from a file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse and validate manifest TOML.
    pub fn parse(content: &str) -> Result<Self, ManifestError> {
        let manifest: Self = toml::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Validate the declared section tree.
    fn validate(&self) -> Result<(), ManifestError> {
        self.sections.iter().try_for_each(SectionEntry::validate)
    }

    /// Convert the declared sections into core navigation nodes.
    pub fn section_nodes(&self) -> Vec<NavNode> {
        self.sections.iter().map(SectionEntry::to_node).collect()
    }

    /// Site metadata, with the mount path optionally overridden per
    /// deployment.
    pub fn site_meta(&self, mount_path: Option<&str>) -> SiteMeta {
        SiteMeta {
            title: self.site.title.clone(),
            description: self.site.description.clone(),
            mount_path: mount_path.unwrap_or(&self.site.mount_path).to_string(),
            out_dir: self.site.out_dir.clone(),
        }
    }
}
