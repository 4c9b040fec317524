//! Saved form records

use chrono::{DateTime, Utc};
use formkit_model::{FieldSpec, FormDocument};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use ulid::Ulid;

/// Identifier of a saved form
///
/// Minted as a ULID so ids sort by save time. Stored as a plain string, so
/// collections written by other tools still load.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedFormId(String);

impl SavedFormId {
    /// Mint a fresh id
    #[must_use]
    pub fn generate() -> Self {
        Self(Ulid::new().to_string())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SavedFormId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SavedFormId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SavedFormId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A persisted snapshot of a form document
///
/// Never edited after it is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedForm {
    pub id: SavedFormId,
    pub title: String,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
    /// Save time; absent in collections written without it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl SavedForm {
    /// Snapshot `document` under `id`, stamped with the current time
    #[must_use]
    pub fn snapshot(id: SavedFormId, document: &FormDocument) -> Self {
        Self {
            id,
            title: document.title.clone(),
            fields: document.fields.clone(),
            saved_at: Some(Utc::now()),
        }
    }

    /// The document this record holds
    #[must_use]
    pub fn to_document(&self) -> FormDocument {
        FormDocument {
            title: self.title.clone(),
            fields: self.fields.clone(),
        }
    }
}
