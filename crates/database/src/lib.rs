// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! RSVP storage connector
//!
//! Records are kept as JSON arrays, one file per collection. Every mutation rewrites the whole
//! file. See [`Collection`] for the read and write semantics.

mod collection;

pub use collection::{Backing, Collection};

/// Result type using [`DatabaseError`] as a default Error
pub type Result<T, E = DatabaseError> = std::result::Result<T, E>;

/// Error types for the storage abstraction
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Database Error: `{0}`")]
    Custom(String),
    #[error("IO Error: `{0}`")]
    Io(#[from] std::io::Error),
    #[error("Serialization Error: `{0}`")]
    Serde(#[from] serde_json::Error),
    #[error("A requested resource could not be found")]
    NotFound,
}

pub trait OptionalExt<T, E> {
    fn optional(self) -> Result<Option<T>, E>;
}

impl<T> OptionalExt<T, DatabaseError> for Result<T, DatabaseError> {
    fn optional(self) -> Result<Option<T>, DatabaseError> {
        match self {
            Ok(t) => Ok(Some(t)),
            Err(DatabaseError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
