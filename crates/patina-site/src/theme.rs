//! Theme-level settings passed through to the renderer.

use serde::{Deserialize, Serialize};

/// Search backend the rendered site offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// Client-side index built at render time.
    #[default]
    Local,
    /// No search UI.
    None,
}

/// Search configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub provider: SearchProvider,

    /// Show full result excerpts instead of title-only matches.
    pub detailed_view: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            provider: SearchProvider::Local,
            detailed_view: true,
        }
    }
}

/// A social link shown in the site header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon identifier (e.g. "github").
    pub icon: String,
    pub link: String,
}

/// Theme settings the renderer consumes unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub search: SearchConfig,

    pub social: Vec<SocialLink>,

    /// Footer markup; may contain HTML.
    pub footer: Option<String>,

    /// Logo path, relative to the mount path.
    pub logo: Option<String>,

    /// Edit-link URL pattern; `:path` stands for the page source path.
    pub edit_link: Option<String>,
}
