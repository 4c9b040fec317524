//! formkit Repository
//!
//! Named snapshots of form documents, persisted through a key-value
//! [`StorageBackend`].
//!
//! # Overview
//!
//! - [`FormRepository`]: save / list / load over a cached collection
//! - [`SavedForm`], [`SavedFormId`]: persisted records
//! - [`MemoryBackend`], [`FileBackend`]: shipped backends
//!
//! # Example
//!
//! ```rust
//! use formkit_model::FormDocument;
//! use formkit_repository::{FormRepository, MemoryBackend, DEFAULT_COLLECTION_KEY};
//!
//! let mut repo = FormRepository::open(MemoryBackend::new(), DEFAULT_COLLECTION_KEY).unwrap();
//! let id = repo.save(&FormDocument::with_title("Signup")).unwrap();
//! assert_eq!(repo.load(&id).unwrap().title, "Signup");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod backend;
mod repository;
mod saved;

pub use backend::{FileBackend, MemoryBackend, StorageBackend, StorageError};
pub use repository::{FormRepository, RepositoryError, DEFAULT_COLLECTION_KEY};
pub use saved::{SavedForm, SavedFormId};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
