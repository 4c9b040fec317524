//! Saved-form collection
//!
//! The whole collection lives in one backend slot as a JSON array. It is
//! read once on open (or on [`reload`](FormRepository::reload)) and written
//! back wholesale on every save.

use crate::backend::{StorageBackend, StorageError};
use crate::saved::{SavedForm, SavedFormId};
use formkit_model::FormDocument;

/// Slot name used when none is configured
pub const DEFAULT_COLLECTION_KEY: &str = "savedForms";

/// Repository failures
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Backend read or write failed
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Stored collection is not a valid saved-form array
    #[error("corrupt collection in '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Collection could not be encoded
    #[error("failed to serialize collection: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Saved forms, cached in memory and persisted through `B`
#[derive(Debug)]
pub struct FormRepository<B: StorageBackend> {
    backend: B,
    key: String,
    forms: Vec<SavedForm>,
    /// Whether `forms` mirrors the stored collection
    loaded: bool,
}

impl<B: StorageBackend> FormRepository<B> {
    /// Open the collection stored under `key`
    ///
    /// A slot that was never written is an empty collection.
    ///
    /// # Errors
    /// Returns [`RepositoryError`] if the slot cannot be read or parsed
    pub fn open(backend: B, key: impl Into<String>) -> Result<Self, RepositoryError> {
        let mut repo = Self::empty(backend, key);
        repo.reload()?;
        Ok(repo)
    }

    /// Repository with an empty cache; nothing is read
    #[must_use]
    pub fn empty(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            forms: Vec::new(),
            loaded: false,
        }
    }

    /// Re-read the collection from the backend
    ///
    /// On failure the cached collection is kept.
    ///
    /// # Errors
    /// Returns [`RepositoryError`] if the slot cannot be read or parsed
    pub fn reload(&mut self) -> Result<usize, RepositoryError> {
        let forms = match self.backend.read(&self.key)? {
            None => Vec::new(),
            Some(raw) => serde_json::from_str(&raw).map_err(|source| RepositoryError::Corrupt {
                key: self.key.clone(),
                source,
            })?,
        };
        self.forms = forms;
        self.loaded = true;
        tracing::debug!(key = %self.key, count = self.forms.len(), "saved forms loaded");
        Ok(self.forms.len())
    }

    /// Persist a snapshot of `document` under a newly minted id
    ///
    /// Every call creates a new entry, even for a document that was loaded
    /// from an earlier save. The cache only changes once the backend write
    /// has succeeded. A collection that was never read is read first, so
    /// earlier entries are never overwritten by an empty cache.
    ///
    /// # Errors
    /// Returns [`RepositoryError`] if the collection could not be read or
    /// written
    pub fn save(&mut self, document: &FormDocument) -> Result<SavedFormId, RepositoryError> {
        if !self.loaded {
            self.reload()?;
        }
        let id = SavedFormId::generate();
        let mut next = self.forms.clone();
        next.push(SavedForm::snapshot(id.clone(), document));

        let raw = serde_json::to_string(&next).map_err(RepositoryError::Serialize)?;
        self.backend.write(&self.key, &raw)?;
        self.forms = next;

        tracing::info!(%id, title = %document.title, fields = document.len(), "form saved");
        Ok(id)
    }

    /// All saved forms, oldest first
    #[inline]
    #[must_use]
    pub fn list(&self) -> &[SavedForm] {
        &self.forms
    }

    /// Saved record with `id`
    #[must_use]
    pub fn get(&self, id: &SavedFormId) -> Option<&SavedForm> {
        self.forms.iter().find(|f| &f.id == id)
    }

    /// Document saved under `id`, from the cache
    #[must_use]
    pub fn load(&self, id: &SavedFormId) -> Option<FormDocument> {
        self.get(id).map(SavedForm::to_document)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Slot name
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }
}
