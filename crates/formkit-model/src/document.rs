//! Form document: a title plus an ordered list of fields

use crate::field::{FieldError, FieldId, FieldSpec};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Title of a new, unnamed form
pub const DEFAULT_TITLE: &str = "Untitled Form";

/// Problems that make a document unusable as a whole
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    /// Two fields share an id
    #[error("duplicate field id: {0}")]
    DuplicateFieldId(FieldId),

    /// A field breaks its own invariants
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// The form being edited
///
/// # Invariants
/// - Field ids are unique
/// - `fields` order is render and tab order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDocument {
    /// Form title
    pub title: String,
    /// Fields in display order
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl Default for FormDocument {
    fn default() -> Self {
        Self::with_title(DEFAULT_TITLE)
    }
}

impl FormDocument {
    /// Empty document with the default title
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty document with `title`
    #[must_use]
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }

    /// Builder-style append, used by fixtures and loaders
    #[must_use]
    pub fn with_field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field with `id`
    #[must_use]
    pub fn field(&self, id: FieldId) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.id() == id)
    }

    /// Position of the field with `id`
    #[must_use]
    pub fn position(&self, id: FieldId) -> Option<usize> {
        self.fields.iter().position(|f| f.id() == id)
    }

    /// Field ids in order
    pub fn ids(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.fields.iter().map(FieldSpec::id)
    }

    /// Is `order` exactly a rearrangement of this document's field ids?
    #[must_use]
    pub fn is_permutation(&self, order: &[FieldId]) -> bool {
        if order.len() != self.fields.len() {
            return false;
        }
        let mut seen = HashSet::with_capacity(order.len());
        order
            .iter()
            .all(|id| seen.insert(*id) && self.position(*id).is_some())
    }

    /// Check every document and field invariant
    ///
    /// # Errors
    /// Returns the first [`DocumentError`] found
    pub fn validate(&self) -> Result<(), DocumentError> {
        let mut seen = HashSet::with_capacity(self.fields.len());
        for field in &self.fields {
            if !seen.insert(field.id()) {
                return Err(DocumentError::DuplicateFieldId(field.id()));
            }
            field.validate()?;
        }
        Ok(())
    }
}
