// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Contains the RSVP records, their status and the attendance statistics
use crate::invite_codes::InviteCode;
use crate::utils::{deserialize_count, parse_leading_int};
use crate::Db;
use chrono::{DateTime, Utc};
use database::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

string_newtype! {
    RsvpId
}

impl RsvpId {
    /// Generates a new unique RSVP id
    pub fn generate() -> Self {
        Self::from(uuid::Uuid::new_v4().to_string())
    }
}

/// The attendance response of a guest
///
/// Values other than `attending` and `not-attending` are kept as they were submitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RsvpStatus {
    Attending,
    NotAttending,
    Other(String),
}

impl RsvpStatus {
    pub fn as_str(&self) -> &str {
        match self {
            RsvpStatus::Attending => "attending",
            RsvpStatus::NotAttending => "not-attending",
            RsvpStatus::Other(other) => other,
        }
    }

    pub fn is_attending(&self) -> bool {
        matches!(self, RsvpStatus::Attending)
    }
}

impl From<String> for RsvpStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "attending" => RsvpStatus::Attending,
            "not-attending" => RsvpStatus::NotAttending,
            _ => RsvpStatus::Other(value),
        }
    }
}

impl From<&str> for RsvpStatus {
    fn from(value: &str) -> Self {
        Self::from(value.to_owned())
    }
}

impl From<RsvpStatus> for String {
    fn from(status: RsvpStatus) -> Self {
        match status {
            RsvpStatus::Other(other) => other,
            status => status.as_str().to_owned(),
        }
    }
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored RSVP submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    pub id: RsvpId,
    pub guest_name: String,
    pub rsvp: RsvpStatus,
    /// Party size, kept as submitted. See [`Rsvp::party_size`]
    #[serde(deserialize_with = "deserialize_count")]
    pub guest_count: String,
    pub dietary_restrictions: String,
    pub invite_code: InviteCode,
    pub submitted_at: DateTime<Utc>,
}

impl Rsvp {
    /// Returns all stored RSVPs in submission order
    #[tracing::instrument(skip_all)]
    pub fn get_all(db: &Db) -> Vec<Rsvp> {
        db.rsvps.load()
    }

    /// The party size as number, non-numeric counts are 0
    pub fn party_size(&self) -> i64 {
        parse_leading_int(&self.guest_count)
    }
}

/// An RSVP which is about to be stored
#[derive(Debug, Clone)]
pub struct NewRsvp {
    pub guest_name: String,
    pub rsvp: RsvpStatus,
    pub guest_count: String,
    pub dietary_restrictions: String,
    pub invite_code: InviteCode,
}

impl NewRsvp {
    #[tracing::instrument(err, skip_all)]
    pub fn insert(self, db: &Db) -> Result<Rsvp> {
        let rsvp = Rsvp {
            id: RsvpId::generate(),
            guest_name: self.guest_name,
            rsvp: self.rsvp,
            guest_count: self.guest_count,
            dietary_restrictions: self.dietary_restrictions,
            invite_code: self.invite_code,
            submitted_at: Utc::now(),
        };

        db.rsvps.append(rsvp.clone())?;

        Ok(rsvp)
    }
}

/// Summary over all RSVPs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpStats {
    pub total: usize,
    pub attending: usize,
    pub not_attending: usize,
    /// Sum of the party sizes of all attending RSVPs
    pub total_guests: i64,
}

impl RsvpStats {
    pub fn from_rsvps(rsvps: &[Rsvp]) -> Self {
        rsvps.iter().fold(
            RsvpStats {
                total: rsvps.len(),
                ..Default::default()
            },
            |mut stats, rsvp| {
                match rsvp.rsvp {
                    RsvpStatus::Attending => {
                        stats.attending += 1;
                        stats.total_guests = stats.total_guests.saturating_add(rsvp.party_size());
                    }
                    RsvpStatus::NotAttending => stats.not_attending += 1,
                    RsvpStatus::Other(_) => {}
                }

                stats
            },
        )
    }
}
