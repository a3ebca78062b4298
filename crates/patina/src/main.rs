//! Patina CLI - versioned documentation site configuration generator.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "patina")]
#[command(about = "Versioned documentation site configuration generator")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to patina.toml manifest
    #[arg(short, long, default_value = "patina.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a starter manifest
    Init {
        /// Overwrite an existing manifest
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate the site configuration artifact
    Generate {
        /// Mount path this deployment is served under (overrides manifest)
        #[arg(short, long)]
        mount_path: Option<String>,

        /// Output directory (overrides manifest)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the generated JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Validate the manifest without writing anything
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Generate {
            mount_path,
            output,
            pretty,
        } => {
            commands::generate::run(&cli.config, mount_path.as_deref(), output, pretty)?;
        }
        Commands::Check => {
            commands::check::run(&cli.config)?;
        }
    }

    Ok(())
}
