// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Services that expose clean APIs and hide the storage details from the endpoints and the CLI
//!
//! All service functions access the storage synchronously, endpoints call them through
//! [`crate::block`].
use database::DatabaseError;
use validator::{ValidationError, ValidationErrors};

mod admin;
mod rsvp;

pub use admin::{encode_uri_component, AddGuest, AdminService, GuestLink};
pub use rsvp::{RsvpService, SubmitRsvp};

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("The requested resource does not exist")]
    NotFound,
    #[error("Storage failure: {0}")]
    Persistence(#[from] DatabaseError),
}

/// Rejects values that are empty or only contain whitespace
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("empty"));
    }

    Ok(())
}
