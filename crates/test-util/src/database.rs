// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use db_storage::Db;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Contains a [`Db`] backed by files inside of a temporary directory
///
/// The directory and all files in it are removed when the context is dropped.
pub struct StorageContext {
    pub dir: TempDir,
    pub guests_file: PathBuf,
    pub rsvps_file: PathBuf,
    pub db: Arc<Db>,
}

impl StorageContext {
    /// Create a new [`StorageContext`] with empty collections
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Unable to create temporary directory");
        let guests_file = dir.path().join("guests.json");
        let rsvps_file = dir.path().join("rsvps.json");

        let db = Arc::new(Db::open(&guests_file, &rsvps_file).expect("Unable to open storage"));

        Self {
            dir,
            guests_file,
            rsvps_file,
            db,
        }
    }

    /// Opens the same files again, as a restarted controller would
    pub fn reopen(&self) -> Db {
        Db::open(&self.guests_file, &self.rsvps_file).expect("Unable to reopen storage")
    }
}

impl Default for StorageContext {
    fn default() -> Self {
        Self::new()
    }
}
