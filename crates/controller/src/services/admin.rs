// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use super::{not_blank, ServiceError};
use crate::settings::SharedSettings;
use database::OptionalExt;
use db_storage::guests::{Guest, NewGuest};
use db_storage::invite_codes::InviteCode;
use db_storage::rsvps::{Rsvp, RsvpStats};
use db_storage::Db;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

/// Characters left unescaped by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes `value` for use as a single URI component
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// A guest to add to the guest list
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AddGuest {
    #[serde(default)]
    #[validate(required, custom = "not_blank")]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub family: Option<String>,
}

impl AddGuest {
    fn into_new_guest(self) -> NewGuest {
        NewGuest {
            name: self.name.unwrap_or_default(),
            phone: self.phone,
            family: self.family,
        }
    }
}

/// Personalized links of a single guest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestLink {
    pub name: String,
    pub family: String,
    pub phone: String,
    pub invite_code: InviteCode,
    pub rsvp_link: String,
    /// The percent-encoded share message
    pub whatsapp_message: String,
    pub whatsapp_link: String,
}

/// Guest list management and RSVP statistics
pub struct AdminService {
    db: Arc<Db>,
    settings: SharedSettings,
}

impl AdminService {
    pub fn new(db: Arc<Db>, settings: SharedSettings) -> Self {
        Self { db, settings }
    }

    pub fn stats(&self) -> RsvpStats {
        RsvpStats::from_rsvps(&Rsvp::get_all(&self.db))
    }

    /// Returns all RSVPs in submission order together with their statistics
    pub fn list_rsvps(&self) -> (RsvpStats, Vec<Rsvp>) {
        let rsvps = Rsvp::get_all(&self.db);

        (RsvpStats::from_rsvps(&rsvps), rsvps)
    }

    #[tracing::instrument(skip_all)]
    pub fn add_guest(&self, guest: AddGuest) -> Result<Guest, ServiceError> {
        guest.validate()?;

        let guest = guest.into_new_guest().insert(&self.db)?;

        log::info!("Added guest {} with invite code {}", guest.name, guest.invite_code);

        Ok(guest)
    }

    pub fn list_guests(&self) -> Vec<Guest> {
        Guest::get_all(&self.db)
    }

    /// Returns the guest owning `invite_code`, the match is exact and case sensitive
    pub fn find_guest_by_invite_code(&self, invite_code: &str) -> Result<Guest, ServiceError> {
        Guest::get_by_invite_code(&self.db, invite_code)
            .optional()?
            .ok_or(ServiceError::NotFound)
    }

    /// Adds all `guests` after the already stored ones
    ///
    /// Nothing is stored if any of the guests is invalid.
    #[tracing::instrument(skip_all, fields(len = guests.len()))]
    pub fn import_guests(&self, guests: Vec<AddGuest>) -> Result<Vec<Guest>, ServiceError> {
        for guest in &guests {
            guest.validate()?;
        }

        let new_guests = guests.into_iter().map(AddGuest::into_new_guest).collect();

        Ok(NewGuest::insert_all(&self.db, new_guests)?)
    }

    /// The configured public url without a trailing slash
    pub fn public_url(&self) -> Option<String> {
        self.settings
            .load()
            .invitation
            .public_url
            .as_ref()
            .map(|url| url.as_str().trim_end_matches('/').to_owned())
    }

    /// Builds the RSVP and share links of every stored guest
    ///
    /// `base_url` is expected without a trailing slash.
    pub fn generate_links(&self, base_url: &str) -> Vec<GuestLink> {
        let settings = self.settings.load();
        let invitation = &settings.invitation;

        self.list_guests()
            .into_iter()
            .map(|guest| {
                let rsvp_link = format!("{base_url}{}{}", invitation.rsvp_path, guest.invite_code);
                let message = encode_uri_component(&render_message(
                    &invitation.message_template,
                    &guest.name,
                    &rsvp_link,
                ));
                let whatsapp_link = format!(
                    "{}{}?text={}",
                    invitation.whatsapp_url,
                    guest.phone_digits(),
                    message
                );

                GuestLink {
                    name: guest.name,
                    family: guest.family,
                    phone: guest.phone,
                    invite_code: guest.invite_code,
                    rsvp_link,
                    whatsapp_message: message,
                    whatsapp_link,
                }
            })
            .collect()
    }
}

/// Replaces the `{name}` and `{link}` placeholders of `template` in a single pass
fn render_message(template: &str, name: &str, link: &str) -> String {
    let mut message = String::with_capacity(template.len() + name.len() + link.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        message.push_str(&rest[..start]);
        let tail = &rest[start..];

        if let Some(after) = tail.strip_prefix("{name}") {
            message.push_str(name);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{link}") {
            message.push_str(link);
            rest = after;
        } else {
            message.push('{');
            rest = &tail[1..];
        }
    }

    message.push_str(rest);
    message
}
