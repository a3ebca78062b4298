//! Site configuration artifact generation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use patina_manifest::Manifest;
use patina_site::SiteConfig;

/// Artifact filename written into the output directory.
const ARTIFACT_FILENAME: &str = "site-config.json";

/// Run the generate command.
pub fn run(
    config: &Path,
    mount_path: Option<&str>,
    output: Option<PathBuf>,
    pretty: bool,
) -> Result<()> {
    let manifest =
        Manifest::load(config).with_context(|| format!("Failed to load {}", config.display()))?;

    let meta = manifest.site_meta(mount_path);
    let out_dir = output.unwrap_or_else(|| PathBuf::from(&meta.out_dir));
    let sections = manifest.section_nodes();

    tracing::info!("Assembling site configuration for {}", meta.mount_path);

    let site = SiteConfig::assemble(meta, &sections, manifest.theme.clone());

    let json = if pretty {
        serde_json::to_string_pretty(&site)?
    } else {
        serde_json::to_string(&site)?
    };

    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let artifact = out_dir.join(ARTIFACT_FILENAME);
    fs::write(&artifact, json)
        .with_context(|| format!("Failed to write {}", artifact.display()))?;

    tracing::info!(
        "Wrote {} ({} nav entries, {} head tags)",
        artifact.display(),
        site.nav.len(),
        site.head.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
[site]
title = "My Docs"
mount_path = "/proj/stable/"
out_dir = "dist"

[[sections]]
label = "Getting started"
link = "/getting-started/"
"#;

    fn write_manifest(dir: &Path) -> PathBuf {
        let config = dir.join("patina.toml");
        fs::write(&config, MANIFEST).unwrap();
        config
    }

    fn read_artifact(out_dir: &Path) -> serde_json::Value {
        let json = fs::read_to_string(out_dir.join(ARTIFACT_FILENAME)).unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn writes_artifact_into_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_manifest(dir.path());
        let out = dir.path().join("out");

        run(&config, None, Some(out.clone()), false).unwrap();

        let artifact = read_artifact(&out);
        assert_eq!(artifact["title"], "My Docs");
        assert_eq!(artifact["base"], "/proj/stable/");
        assert_eq!(artifact["head"][0]["attrs"][0][1], "/proj/versions.js");
        assert_eq!(
            artifact["head"][1]["attrs"][0][1],
            "/proj/stable/siteinfo.js"
        );
    }

    #[test]
    fn mount_path_flag_overrides_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_manifest(dir.path());
        let out = dir.path().join("out");

        run(&config, Some("/proj/dev/"), Some(out.clone()), true).unwrap();

        let artifact = read_artifact(&out);
        assert_eq!(artifact["base"], "/proj/dev/");
        assert_eq!(artifact["head"][0]["attrs"][0][1], "/proj/versions.js");
        assert_eq!(artifact["head"][1]["attrs"][0][1], "/proj/dev/siteinfo.js");
    }

    #[test]
    fn nav_carries_picker_and_sidebar_does_not() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_manifest(dir.path());
        let out = dir.path().join("out");

        run(&config, None, Some(out.clone()), false).unwrap();

        let artifact = read_artifact(&out);
        let nav = artifact["nav"].as_array().unwrap();
        let sidebar = artifact["sidebar"].as_array().unwrap();

        assert_eq!(nav.len(), sidebar.len() + 1);
        assert_eq!(nav.last().unwrap()["kind"], "dynamic");
        assert!(sidebar.iter().all(|node| node["kind"] != "dynamic"));
    }

    #[test]
    fn fails_on_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();

        let result = run(&dir.path().join("absent.toml"), None, None, false);

        assert!(result.is_err());
    }
}
