//! CLI for fetching installer packages from CI listing pages.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use instfetch_core::config;
use instfetch_core::fetch::{FetchRequest, FetchSettings};
use std::path::PathBuf;

use commands::run_fetch_installers;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "instfetch")]
#[command(about = "Fetch Nuxeo Drive installer packages from CI build pages", long_about = None)]
pub struct Cli {
    /// Read settings from this TOML file instead of ~/.config/instfetch/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch installer packages from CI listing pages into the drive template folder.
    FetchInstallers(FetchInstallersArgs),
}

#[derive(Debug, Clone, Args)]
pub struct FetchInstallersArgs {
    /// Listing page of the job producing the Windows installer (.msi).
    #[arg(long, value_name = "URL")]
    pub msi_url: Option<String>,

    /// Listing page of the job producing the macOS disk image (.dmg).
    #[arg(long, value_name = "URL")]
    pub dmg_url: Option<String>,

    /// Project root; packages land in target/marketplace/install/templates/drive/client.
    #[arg(long, value_name = "DIR")]
    pub base_folder: Option<PathBuf>,

    /// Treat the URLs as direct package links instead of listing pages.
    #[arg(long)]
    pub direct: bool,
}

impl From<FetchInstallersArgs> for FetchRequest {
    fn from(args: FetchInstallersArgs) -> Self {
        FetchRequest {
            base_folder: args.base_folder,
            msi_url: args.msi_url,
            dmg_url: args.dmg_url,
            direct: args.direct,
        }
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);
        let settings = FetchSettings::from_config(&cfg);

        match cli.command {
            CliCommand::FetchInstallers(args) => {
                run_fetch_installers(&FetchRequest::from(args), &settings)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
