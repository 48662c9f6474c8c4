// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use crate::{DatabaseError, Result};
use parking_lot::{Mutex, RwLock};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

const EMPTY_COLLECTION: &[u8] = b"[]";

/// Where the serialized records of a [`Collection`] live
pub enum Backing {
    /// JSON file on disk, rewritten on every mutation
    File(PathBuf),
    /// Serialized JSON kept in memory, used in tests and demo setups
    Memory(RwLock<Vec<u8>>),
}

impl Backing {
    fn read(&self) -> Result<Vec<u8>> {
        match self {
            Backing::File(path) => Ok(std::fs::read(path)?),
            Backing::Memory(buf) => Ok(buf.read().clone()),
        }
    }

    fn write(&self, bytes: Vec<u8>) -> Result<()> {
        match self {
            Backing::File(path) => Ok(std::fs::write(path, bytes)?),
            Backing::Memory(buf) => {
                *buf.write() = bytes;
                Ok(())
            }
        }
    }
}

impl fmt::Debug for Backing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backing::File(path) => f.debug_tuple("File").field(path).finish(),
            Backing::Memory(_) => f.write_str("Memory"),
        }
    }
}

/// A typed collection of records, stored as a single JSON array.
///
/// Reads that fail (missing file, invalid JSON) are logged and yield an empty collection, see
/// [`Collection::load`]. Writes always replace the whole array.
///
/// All read-modify-write cycles through [`Collection::modify`] are serialized, concurrent appends
/// within the process cannot overwrite each other.
pub struct Collection<T> {
    name: String,
    backing: Backing,
    write_lock: Mutex<()>,
    _records: PhantomData<fn() -> T>,
}

impl<T> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("name", &self.name)
            .field("backing", &self.backing)
            .finish()
    }
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Opens the collection stored in the file at `path`.
    ///
    /// The file gets initialized with an empty array if it does not exist yet.
    #[tracing::instrument(err, skip_all, fields(path = %path.as_ref().display()))]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            log::info!("Initializing empty collection at {}", path.display());
            std::fs::write(&path, EMPTY_COLLECTION)?;
        }

        Ok(Self {
            name: path.display().to_string(),
            backing: Backing::File(path),
            write_lock: Mutex::new(()),
            _records: PhantomData,
        })
    }

    /// Creates an empty collection which only lives in memory
    pub fn in_memory(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            backing: Backing::Memory(RwLock::new(EMPTY_COLLECTION.to_vec())),
            write_lock: Mutex::new(()),
            _records: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reads all records, failing on IO or deserialization errors
    pub fn try_load(&self) -> Result<Vec<T>> {
        let bytes = self.backing.read()?;

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Reads all records.
    ///
    /// A collection that cannot be read or parsed is reported and treated as empty.
    pub fn load(&self) -> Vec<T> {
        match self.try_load() {
            Ok(records) => records,
            Err(e) => {
                log::error!("Failed to read collection {}, {}", self.name, e);
                Vec::new()
            }
        }
    }

    /// Replaces the stored records with `records`
    #[tracing::instrument(err, skip_all, fields(collection = %self.name, len = records.len()))]
    pub fn store(&self, records: &[T]) -> Result<()> {
        let _guard = self.write_lock.lock();

        self.write_records(records)
    }

    fn write_records(&self, records: &[T]) -> Result<()> {
        // serde_json pretty prints with two spaces of indentation
        let bytes = serde_json::to_vec_pretty(records)?;

        self.backing.write(bytes).map_err(|e| {
            log::error!("Failed to write collection {}, {}", self.name, e);
            e
        })
    }

    /// Runs a read-modify-write cycle on the collection.
    ///
    /// The records are only written back when `f` returns `Ok`.
    #[tracing::instrument(err, skip_all, fields(collection = %self.name))]
    pub fn modify<F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R>,
    {
        let _guard = self.write_lock.lock();

        let mut records = self.load();
        let result = f(&mut records)?;
        self.write_records(&records)?;

        Ok(result)
    }

    /// Appends a single record
    pub fn append(&self, record: T) -> Result<()> {
        self.modify(|records| {
            records.push(record);
            Ok(())
        })
    }

    /// Returns the first record matching `predicate`
    pub fn find<P>(&self, predicate: P) -> Result<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.load()
            .into_iter()
            .find(predicate)
            .ok_or(DatabaseError::NotFound)
    }
}
