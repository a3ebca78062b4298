//! Core site-configuration assembly for patina documentation.
//!
//! Derives the deployment root path from a mount path and assembles the
//! navigation tree, sidebar tree, and version-aware head scripts consumed by
//! the external rendering engine.

pub mod basepath;
pub mod head;
pub mod nav;
pub mod site;
pub mod theme;

pub use basepath::resolve_root;
pub use head::{version_scripts, HeadTag};
pub use nav::{assemble, Assembled, NavNode, VERSION_PICKER};
pub use site::{SiteConfig, SiteMeta};
pub use theme::{SearchConfig, SearchProvider, SocialLink, ThemeConfig};
