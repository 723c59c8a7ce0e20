use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use profile_settings::store::SettingsStore;

use crate::Commands;

#[derive(Parser)]
#[command(name = "profile-settings")]
#[command(about = "Edit profile settings against the profile API", long_about = None)]
pub(crate) struct Cli {
    /// Settings directory (defaults to ./.profile-settings)
    #[arg(long, value_name = "PATH", global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    let dir = match cli.dir {
        Some(dir) => dir,
        None => SettingsStore::default_dir(&std::env::current_dir().context("get current dir")?),
    };
    crate::cli_exec::handle_command(&SettingsStore::at(dir), cli.command)
}
