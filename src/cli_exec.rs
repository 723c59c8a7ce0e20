use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use profile_settings::cache::QueryCache;
use profile_settings::dispatch::Outcome;
use profile_settings::notify::{Notice, Severity};
use profile_settings::remote::RemoteClient;
use profile_settings::session::FileSessionProvider;
use profile_settings::store::SettingsStore;
use profile_settings::validate::FieldErrors;
use profile_settings::{PersonalInfoForm, ProfileError, SocialLinksForm};

use crate::{Commands, PhotoCommands};

mod photo_cmds;
mod profile_cmds;
mod session_cmds;

pub(crate) fn handle_command(store: &SettingsStore, command: Commands) -> Result<()> {
    match command {
        Commands::Login(args) => session_cmds::handle_login_command(store, args),
        Commands::Logout => session_cmds::handle_logout_command(store),
        Commands::Show { json } => profile_cmds::handle_show_command(store, json),
        Commands::Update(args) => profile_cmds::handle_update_command(store, args),
        Commands::Links(args) => profile_cmds::handle_links_command(store, args),
        Commands::Photo { command } => match command {
            PhotoCommands::Upload { path } => photo_cmds::handle_upload_command(store, &path),
            PhotoCommands::Delete => photo_cmds::handle_delete_command(store),
        },
    }
}

struct FormDeps {
    client: RemoteClient,
    session: FileSessionProvider,
    notice_duration: Duration,
}

fn open_context(store: &SettingsStore) -> Result<FormDeps> {
    let store = SettingsStore::open(store.root())?;
    let cfg = store.read_config()?;
    let notice_duration = cfg.notice_duration();
    let client = RemoteClient::new(cfg)?;
    Ok(FormDeps {
        client,
        session: FileSessionProvider::new(store.session_path()),
        notice_duration,
    })
}

fn personal_form(store: &SettingsStore) -> Result<PersonalInfoForm<RemoteClient>> {
    let ctx = open_context(store)?;
    let mut form = PersonalInfoForm::new(ctx.client, QueryCache::new(), ctx.notice_duration);
    activate(form.activate(&ctx.session, Instant::now()))
        .context("load profile settings")?;
    Ok(form)
}

fn links_form(store: &SettingsStore) -> Result<SocialLinksForm<RemoteClient>> {
    let ctx = open_context(store)?;
    let mut form = SocialLinksForm::new(ctx.client, QueryCache::new(), ctx.notice_duration);
    activate(form.activate(&ctx.session, Instant::now()))
        .context("load profile settings")?;
    Ok(form)
}

fn activate(outcome: Outcome) -> Result<()> {
    match outcome {
        Outcome::Done => Ok(()),
        Outcome::Skipped => Err(ProfileError::IdentityMissing)
            .context("not logged in (run `profile-settings login --url ... --user-id ... --token ...`)"),
        Outcome::Failed(msg) => anyhow::bail!(msg),
        Outcome::Blocked => anyhow::bail!("blocked"),
    }
}

fn print_notice(notice: Option<&Notice>) {
    let Some(notice) = notice else {
        return;
    };
    match notice.severity {
        Severity::Success | Severity::Info => println!("{}", notice.message),
        Severity::Warning | Severity::Error => {
            eprintln!("{}: {}", notice.severity.label(), notice.message)
        }
    }
}

fn print_field_errors(errors: &FieldErrors) {
    for (field, msg) in errors.iter() {
        eprintln!("  {}: {}", field, msg);
    }
}

/// Maps a finished mutation to the process result.
fn finish(outcome: Outcome, notice: Option<&Notice>, errors: &FieldErrors) -> Result<()> {
    print_notice(notice);
    match outcome {
        Outcome::Done => Ok(()),
        Outcome::Blocked => {
            print_field_errors(errors);
            anyhow::bail!("nothing was sent")
        }
        Outcome::Failed(_) => anyhow::bail!("request failed"),
        Outcome::Skipped => anyhow::bail!("not logged in"),
    }
}
