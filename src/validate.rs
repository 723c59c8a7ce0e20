//! Field-level validation for both forms.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::edit_buffer::{LinksBuffer, PersonalBuffer};

pub const BLOCKED_SUBMISSION_MESSAGE: &str = "Please fix the errors in the form";

pub const LINKEDIN_DOMAIN: &str = "linkedin.com";

const MSG_BAD_SCHEME: &str = "URL must start with http:// or https://";
const MSG_BAD_EMAIL: &str = "Please enter a valid email address";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Email,
    Address,
    PhoneNumber,
    Description,
    Linkedin,
    ContactEmail,
    Website,
}

impl Field {
    /// Wire/form name of the field.
    pub fn name(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::Address => "address",
            Field::PhoneNumber => "phoneNumber",
            Field::Description => "description",
            Field::Linkedin => "linkedin",
            Field::ContactEmail => "email",
            Field::Website => "website",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Failing fields and their messages. Passing fields never have an entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn clear_field(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    fn insert(&mut self, field: Field, msg: &str) {
        self.errors.insert(field, msg.to_string());
    }

    fn check(&mut self, field: Field, result: Result<(), &str>) {
        if let Err(msg) = result {
            self.insert(field, msg);
        }
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_PATTERN.is_match(raw.trim())
}

fn has_http_scheme(raw: &str) -> bool {
    raw.starts_with("http://") || raw.starts_with("https://")
}

fn required_min(
    raw: &str,
    min: usize,
    missing: &'static str,
    short: &'static str,
) -> Result<(), &'static str> {
    let v = raw.trim();
    if v.is_empty() {
        return Err(missing);
    }
    if char_len(v) < min {
        return Err(short);
    }
    Ok(())
}

fn optional_min(raw: &str, min: usize, short: &'static str) -> Result<(), &'static str> {
    let v = raw.trim();
    if v.is_empty() || char_len(v) >= min {
        Ok(())
    } else {
        Err(short)
    }
}

fn required_email(raw: &str) -> Result<(), &'static str> {
    if raw.trim().is_empty() {
        return Err("Email is required");
    }
    optional_email(raw)
}

fn optional_email(raw: &str) -> Result<(), &'static str> {
    let v = raw.trim();
    if v.is_empty() || is_valid_email(v) {
        Ok(())
    } else {
        Err(MSG_BAD_EMAIL)
    }
}

/// Social network URL: scheme first, then the provider's domain substring.
pub fn check_social_url(raw: &str, domain: &str) -> Result<(), &'static str> {
    let v = raw.trim();
    if v.is_empty() {
        return Ok(());
    }
    if !has_http_scheme(v) {
        return Err(MSG_BAD_SCHEME);
    }
    if !v.contains(domain) {
        return Err("Please enter a valid LinkedIn URL");
    }
    Ok(())
}

pub fn check_website_url(raw: &str) -> Result<(), &'static str> {
    let v = raw.trim();
    if v.is_empty() {
        return Ok(());
    }
    if !has_http_scheme(v) {
        return Err(MSG_BAD_SCHEME);
    }
    match url::Url::parse(v) {
        Ok(u) if u.host_str().is_some_and(|h| !h.is_empty()) => Ok(()),
        _ => Err("Please enter a valid URL"),
    }
}

pub fn validate_personal(buf: &PersonalBuffer) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.check(
        Field::FullName,
        required_min(
            &buf.full_name,
            2,
            "Full name is required",
            "Full name must be at least 2 characters",
        ),
    );
    errors.check(Field::Email, required_email(&buf.email));
    errors.check(
        Field::Address,
        optional_min(&buf.address, 5, "Address must be at least 5 characters"),
    );
    errors.check(
        Field::PhoneNumber,
        optional_min(&buf.phone_number, 8, "Phone number must be at least 8 characters"),
    );
    errors.check(
        Field::Description,
        optional_min(&buf.description, 10, "Description must be at least 10 characters"),
    );
    errors
}

pub fn validate_links(buf: &LinksBuffer) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.check(Field::Linkedin, check_social_url(&buf.linkedin, LINKEDIN_DOMAIN));
    errors.check(Field::ContactEmail, optional_email(&buf.email));
    errors.check(Field::Website, check_website_url(&buf.website));
    errors
}

#[cfg(test)]
#[path = "tests/validate_tests.rs"]
mod tests;
