//! Manifest validation command.

use std::path::Path;

use anyhow::{Context, Result};

use patina_manifest::Manifest;
use patina_site::{resolve_root, NavNode};

/// Run the check command.
pub fn run(config: &Path) -> Result<()> {
    let manifest =
        Manifest::load(config).with_context(|| format!("Failed to load {}", config.display()))?;

    let sections = manifest.section_nodes();
    let root = resolve_root(&manifest.site.mount_path);

    tracing::info!(
        "Manifest OK: {} top-level sections, {} entries",
        sections.len(),
        count_entries(&sections)
    );
    tracing::info!(
        "Mount path {} (project root {})",
        manifest.site.mount_path,
        root
    );

    Ok(())
}

/// Count entries across the whole section tree.
fn count_entries(nodes: &[NavNode]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            NavNode::Group { children, .. } => 1 + count_entries(children),
            _ => 1,
        })
        .sum()
}
