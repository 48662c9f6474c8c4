// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use crate::guests::Guest;
use crate::rsvps::Rsvp;
use controller_shared::settings;
use database::{Collection, Result};
use std::path::Path;

/// Db container holding the guest and RSVP collections.
///
/// The two collections are independent of each other, there is no relation enforced between
/// an RSVP's invite code and the stored guests.
#[derive(Debug)]
pub struct Db {
    pub(crate) guests: Collection<Guest>,
    pub(crate) rsvps: Collection<Rsvp>,
}

impl Db {
    /// Opens the collections specified in the storage settings
    #[tracing::instrument(skip(storage_settings))]
    pub fn connect(storage_settings: &settings::Storage) -> Result<Self> {
        if storage_settings.in_memory {
            log::warn!("Using in-memory storage, records are lost on shutdown");
            return Ok(Self::in_memory());
        }

        Self::open(&storage_settings.guests_file, &storage_settings.rsvps_file)
    }

    /// Opens the collections stored at the given file paths, creating the files if necessary
    pub fn open(guests_file: &Path, rsvps_file: &Path) -> Result<Self> {
        Ok(Self {
            guests: Collection::open(guests_file)?,
            rsvps: Collection::open(rsvps_file)?,
        })
    }

    /// Creates a Db with empty in-memory collections
    pub fn in_memory() -> Self {
        Self {
            guests: Collection::in_memory("guests"),
            rsvps: Collection::in_memory("rsvps"),
        }
    }
}
