//! Scaffold a starter manifest.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config: &Path, yes: bool) -> Result<()> {
    if config.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config.display()
        );
        return Ok(());
    }

    fs::write(config, DEFAULT_MANIFEST)
        .with_context(|| format!("Failed to write {}", config.display()))?;

    tracing::info!("Created {}", config.display());
    tracing::info!("Run 'patina generate' to produce the site configuration.");

    Ok(())
}

const DEFAULT_MANIFEST: &str = r#"# Patina Configuration

[site]
# Site title
title = "My Documentation"

# Site description
description = ""

# URL path prefix this deployment is served under.
# The deployment tool usually overrides this with --mount-path.
mount_path = "/"

# Output directory for the generated artifact
out_dir = "dist"

[[sections]]
label = "Getting started"
link = "/getting-started/"

[[sections]]
label = "Reference"

  [[sections.items]]
  label = "API"
  link = "/reference/api/"

[theme]
# logo = "/assets/logo.png"
# footer = "Released under the MIT License."
# edit_link = "https://github.com/you/project/edit/main/docs/:path"

[theme.search]
provider = "local"
detailed_view = true
"#;
