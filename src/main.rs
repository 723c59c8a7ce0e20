use std::path::PathBuf;

use clap::{Args, Subcommand};

mod cli_exec;
mod cli_runtime;

#[derive(Subcommand)]
enum Commands {
    /// Store the API url and session used by the other commands
    Login(LoginArgs),

    /// Forget the stored session
    Logout,

    /// Show the current profile settings
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Update personal info (only the given fields change)
    Update(UpdateArgs),

    /// Update social links (only the given fields change)
    Links(LinksArgs),

    /// Upload or remove the profile photo
    Photo {
        #[command(subcommand)]
        command: PhotoCommands,
    },
}

#[derive(Args)]
struct LoginArgs {
    /// Base URL of the profile API
    #[arg(long)]
    url: String,
    #[arg(long = "user-id")]
    user_id: String,
    /// Bearer token
    #[arg(long)]
    token: String,
    #[arg(long = "account-type", default_value = profile_settings::model::DEFAULT_ACCOUNT_TYPE)]
    account_type: String,
}

#[derive(Args)]
struct UpdateArgs {
    #[arg(long = "full-name")]
    full_name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    address: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    description: Option<String>,
}

#[derive(Args)]
struct LinksArgs {
    #[arg(long)]
    linkedin: Option<String>,
    /// Public contact email
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    website: Option<String>,
}

#[derive(Subcommand)]
enum PhotoCommands {
    /// Upload an image (svg, png, jpg, gif or webp; at most 5MB)
    Upload { path: PathBuf },
    /// Remove the current photo
    Delete,
}

fn main() {
    profile_settings::logging::init_tracing();
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
