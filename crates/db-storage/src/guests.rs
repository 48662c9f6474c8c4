// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Contains the guest records and queries
use crate::invite_codes::{self, InviteCode};
use crate::utils::digits_only;
use crate::Db;
use chrono::{DateTime, Utc};
use database::Result;
use serde::{Deserialize, Serialize};

string_newtype! {
    GuestId
}

impl GuestId {
    /// Generates a new unique guest id
    pub fn generate() -> Self {
        Self::from(format!("guest_{}", uuid::Uuid::new_v4().simple()))
    }
}

/// A stored guest
///
/// The invite code is assigned once on creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: GuestId,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub family: String,
    pub invite_code: InviteCode,
    pub created_at: DateTime<Utc>,
}

impl Guest {
    /// Returns all stored guests in insertion order
    #[tracing::instrument(skip_all)]
    pub fn get_all(db: &Db) -> Vec<Guest> {
        db.guests.load()
    }

    /// Returns the guest with exactly the given invite code
    ///
    /// Returns [`DatabaseError::NotFound`](database::DatabaseError::NotFound) when no guest has this code.
    #[tracing::instrument(skip(db))]
    pub fn get_by_invite_code(db: &Db, invite_code: &str) -> Result<Guest> {
        db.guests.find(|guest| guest.invite_code == *invite_code)
    }

    /// The phone number with all non-digit characters stripped
    pub fn phone_digits(&self) -> String {
        digits_only(&self.phone)
    }
}

/// A guest which is about to be stored
#[derive(Debug, Clone, Default)]
pub struct NewGuest {
    pub name: String,
    pub phone: Option<String>,
    pub family: Option<String>,
}

impl NewGuest {
    /// Turns this into a [`Guest`] with an invite code that none of the `existing` guests has
    fn into_guest(self, existing: &[Guest]) -> Guest {
        let invite_code = invite_codes::generate_unique(&self.name, |code| {
            existing.iter().any(|guest| &guest.invite_code == code)
        });

        let family = self
            .family
            .filter(|family| !family.is_empty())
            .unwrap_or_else(|| self.name.clone());

        Guest {
            id: GuestId::generate(),
            name: self.name,
            phone: self.phone.unwrap_or_default(),
            family,
            invite_code,
            created_at: Utc::now(),
        }
    }

    #[tracing::instrument(err, skip_all)]
    pub fn insert(self, db: &Db) -> Result<Guest> {
        db.guests.modify(|guests| {
            let guest = self.into_guest(guests);
            guests.push(guest.clone());

            Ok(guest)
        })
    }

    /// Stores all `new_guests` after the existing ones in a single write
    #[tracing::instrument(err, skip_all, fields(len = new_guests.len()))]
    pub fn insert_all(db: &Db, new_guests: Vec<NewGuest>) -> Result<Vec<Guest>> {
        db.guests.modify(|guests| {
            let mut inserted = Vec::with_capacity(new_guests.len());

            for new_guest in new_guests {
                let guest = new_guest.into_guest(guests);
                guests.push(guest.clone());
                inserted.push(guest);
            }

            Ok(inserted)
        })
    }
}
