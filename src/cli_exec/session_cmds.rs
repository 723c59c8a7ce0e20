use profile_settings::model::{ClientConfig, SessionFile};

use crate::LoginArgs;

use super::*;

pub(super) fn handle_login_command(store: &SettingsStore, args: LoginArgs) -> Result<()> {
    let cfg = ClientConfig::new(args.url);
    store.write_config(&cfg)?;
    let session = SessionFile {
        version: 1,
        user_id: Some(args.user_id),
        token: args.token,
        account_type: args.account_type,
        saved_at: Some(now_ts()),
    };
    store
        .write_session(&session)
        .context("store session in session.json")?;
    println!("Logged in");
    Ok(())
}

pub(super) fn handle_logout_command(store: &SettingsStore) -> Result<()> {
    let store = SettingsStore::open(store.root())?;
    store.clear_session().context("clear session")?;
    println!("Logged out");
    Ok(())
}

fn now_ts() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "<time>".to_string())
}
