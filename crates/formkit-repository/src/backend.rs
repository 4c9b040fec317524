//! Key-value storage backends
//!
//! A backend stores whole values under string keys. Reads and writes are
//! whole-value; there is no partial update.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Storage failures
///
/// Always recoverable: the caller keeps its in-memory state.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Underlying I/O failed
    #[error("storage I/O error for '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },

    /// Key cannot be mapped onto the medium
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Backend refused the operation
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    fn io(key: &str, source: io::Error) -> Self {
        Self::Io {
            key: key.to_string(),
            source,
        }
    }
}

/// Durable slot store
pub trait StorageBackend: Send + Sync {
    /// Whole value stored under `key`; `None` if the slot was never written
    ///
    /// # Errors
    /// Returns [`StorageError`] if the medium cannot be read
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value under `key`
    ///
    /// Either the new value is stored completely or the old one is kept.
    ///
    /// # Errors
    /// Returns [`StorageError`] if the value could not be stored
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

impl<B: StorageBackend + ?Sized> StorageBackend for Box<B> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

/// In-process backend
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend with `key` already holding `value`
    #[must_use]
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let backend = Self::new();
        backend.slots.lock().insert(key.into(), value.into());
        backend
    }

    /// Raw stored value, for inspection
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.slots.lock().get(key).cloned()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per slot inside a directory
///
/// Writes go to a temporary file in the same directory which is then
/// renamed over the slot file, so a crash never leaves a half-written slot.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Backend rooted at `dir`; the directory is created on first write
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[inline]
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`
    ///
    /// # Errors
    /// Returns [`StorageError::InvalidKey`] for keys that are empty or not
    /// a plain file name
    pub fn slot_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key)?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(key, e)),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        std::fs::create_dir_all(&self.dir).map_err(|e| StorageError::io(key, e))?;

        let mut tmp =
            tempfile::NamedTempFile::new_in(&self.dir).map_err(|e| StorageError::io(key, e))?;
        tmp.write_all(value.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| StorageError::io(key, e))?;
        tmp.persist(&path)
            .map_err(|e| StorageError::io(key, e.error))?;

        tracing::trace!(path = %path.display(), bytes = value.len(), "slot written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_backend_round_trip() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.read("forms").unwrap(), None);
        backend.write("forms", "[]").unwrap();
        assert_eq!(backend.read("forms").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn file_backend_rejects_path_like_keys() {
        let backend = FileBackend::new("unused");
        for key in ["", "../escape", "a/b", ".hidden"] {
            assert!(matches!(
                backend.slot_path(key),
                Err(StorageError::InvalidKey(_))
            ));
        }
        assert!(backend.slot_path("savedForms").is_ok());
    }

    #[test]
    fn boxed_backend_delegates() {
        let backend: Box<dyn StorageBackend> = Box::new(MemoryBackend::new());
        backend.write("k", "v").unwrap();
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("v"));
    }
}
