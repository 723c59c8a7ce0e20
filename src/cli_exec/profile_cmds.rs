use profile_settings::validate::Field;

use crate::{LinksArgs, UpdateArgs};

use super::*;

pub(super) fn handle_show_command(store: &SettingsStore, json: bool) -> Result<()> {
    let form = personal_form(store)?;
    let Some(snap) = form.snapshot() else {
        anyhow::bail!("no profile loaded");
    };
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(snap).context("serialize profile json")?
        );
        return Ok(());
    }

    let buf = form.buffer();
    println!("full_name: {}", buf.full_name);
    println!("email: {}", buf.email);
    println!("address: {}", buf.address);
    println!("phone: {}", buf.phone_number);
    println!("description: {}", buf.description);
    println!("photo: {}", form.photo().shown().unwrap_or("(none)"));
    let links = snap.social_links.clone().unwrap_or_default();
    println!("linkedin: {}", links.linkedin.unwrap_or_default());
    println!("contact_email: {}", links.email.unwrap_or_default());
    println!("website: {}", links.website.unwrap_or_default());
    Ok(())
}

pub(super) fn handle_update_command(store: &SettingsStore, args: UpdateArgs) -> Result<()> {
    let mut form = personal_form(store)?;
    let edits = [
        (Field::FullName, args.full_name),
        (Field::Email, args.email),
        (Field::Address, args.address),
        (Field::PhoneNumber, args.phone),
        (Field::Description, args.description),
    ];
    for (field, value) in edits {
        if let Some(value) = value {
            form.set_field(field, value);
        }
    }
    if !form.is_dirty() {
        anyhow::bail!("nothing to update (pass at least one field flag)");
    }

    let now = Instant::now();
    let outcome = form.save(now);
    let errors = form.errors().clone();
    finish(outcome, form.notice(now), &errors)
}

pub(super) fn handle_links_command(store: &SettingsStore, args: LinksArgs) -> Result<()> {
    let mut form = links_form(store)?;
    let edits = [
        (Field::Linkedin, args.linkedin),
        (Field::ContactEmail, args.email),
        (Field::Website, args.website),
    ];
    for (field, value) in edits {
        if let Some(value) = value {
            form.set_field(field, value);
        }
    }
    if !form.is_dirty() {
        anyhow::bail!("nothing to update (pass at least one link flag)");
    }

    let now = Instant::now();
    let outcome = form.save(now);
    let errors = form.errors().clone();
    finish(outcome, form.notice(now), &errors)
}
