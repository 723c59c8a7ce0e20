//! String-only working copies of the editable snapshot fields.

use crate::model::{PersonalDetails, ProfileSnapshot, SocialLinks};
use crate::validate::Field;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PersonalBuffer {
    pub full_name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub description: String,
}

impl PersonalBuffer {
    /// Overwrites every field from the snapshot. Unsaved edits are lost.
    pub fn sync_from(&mut self, snap: &ProfileSnapshot) {
        *self = Self {
            full_name: snap.full_name.clone().unwrap_or_default(),
            email: snap.email.clone().unwrap_or_default(),
            address: snap.address.clone().unwrap_or_default(),
            phone_number: snap.phone_number.clone().unwrap_or_default(),
            description: snap.description.clone().unwrap_or_default(),
        };
    }

    pub fn field_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::FullName => Some(&mut self.full_name),
            Field::Email => Some(&mut self.email),
            Field::Address => Some(&mut self.address),
            Field::PhoneNumber => Some(&mut self.phone_number),
            Field::Description => Some(&mut self.description),
            Field::Linkedin | Field::ContactEmail | Field::Website => None,
        }
    }

    pub fn to_details(&self) -> PersonalDetails {
        PersonalDetails {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            phone_number: self.phone_number.clone(),
            description: self.description.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinksBuffer {
    pub linkedin: String,
    pub email: String,
    pub website: String,
}

impl LinksBuffer {
    /// Overwrites every field from the snapshot's social links.
    pub fn sync_from(&mut self, snap: &ProfileSnapshot) {
        let links = snap.social_links.clone().unwrap_or_default();
        *self = Self {
            linkedin: links.linkedin.unwrap_or_default(),
            email: links.email.unwrap_or_default(),
            website: links.website.unwrap_or_default(),
        };
    }

    pub fn field_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Linkedin => Some(&mut self.linkedin),
            Field::ContactEmail => Some(&mut self.email),
            Field::Website => Some(&mut self.website),
            _ => None,
        }
    }

    pub fn to_links(&self) -> SocialLinks {
        SocialLinks {
            linkedin: self.linkedin.clone(),
            email: self.email.clone(),
            website: self.website.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/edit_buffer_tests.rs"]
mod tests;
