//! Durable key-value storage for the task store.
//!
//! The store persists its state through the [`Storage`] trait: a flat,
//! string-keyed, string-valued store. [`FileStorage`] is the production
//! implementation, keeping one file per key under a data directory.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing the durable store.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to read key '{key}': {source}")]
    Read {
        key: String,
        source: std::io::Error,
    },
    #[error("failed to write key '{key}': {source}")]
    Write {
        key: String,
        source: std::io::Error,
    },
}

/// A string-keyed, string-valued durable store.
#[cfg_attr(test, mockall::automock)]
pub trait Storage {
    /// Returns the payload stored under `key`, or `None` if the key has
    /// never been written.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrites the payload stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Storage backed by one file per key under a data directory. The
/// directory is created on first write.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Read {
                key: key.to_string(),
                source: err,
            }),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).map_err(|err| StorageError::Write {
            key: key.to_string(),
            source: err,
        })?;
        fs::write(self.path_for(key), value).map_err(|err| StorageError::Write {
            key: key.to_string(),
            source: err,
        })
    }
}
