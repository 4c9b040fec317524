//! Actions accepted by the document store

use formkit_model::{FieldId, FieldKind, FieldPatch, FormDocument};
use serde::{Deserialize, Serialize};

/// A requested change to the form document
///
/// The JSON form is internally tagged by `action`, e.g.
/// `{"action": "set_title", "title": "Survey"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Append a new field
    ///
    /// The id is minted when the action is built, so replaying the same
    /// action is deterministic.
    AddField {
        #[serde(default)]
        id: FieldId,
        kind: FieldKind,
        #[serde(default)]
        defaults: FieldPatch,
    },

    /// Change some attributes of one field
    UpdateField { id: FieldId, patch: FieldPatch },

    /// Delete one field
    RemoveField { id: FieldId },

    /// Replace field order; must be a permutation of the current ids
    ReorderFields { order: Vec<FieldId> },

    /// Rename the form
    SetTitle { title: String },

    /// Replace the whole document
    LoadDocument { document: FormDocument },

    /// Back to an empty, untitled form
    ResetForm,
}

impl Action {
    /// Add a field of `kind` with default attributes
    #[must_use]
    pub fn add_field(kind: FieldKind) -> Self {
        Self::add_field_with(kind, FieldPatch::default())
    }

    /// Add a field of `kind`, then apply `defaults` on top
    #[must_use]
    pub fn add_field_with(kind: FieldKind, defaults: FieldPatch) -> Self {
        Self::AddField {
            id: FieldId::new(),
            kind,
            defaults,
        }
    }

    #[must_use]
    pub fn update_field(id: FieldId, patch: FieldPatch) -> Self {
        Self::UpdateField { id, patch }
    }

    #[must_use]
    pub fn remove_field(id: FieldId) -> Self {
        Self::RemoveField { id }
    }

    #[must_use]
    pub fn reorder_fields(order: Vec<FieldId>) -> Self {
        Self::ReorderFields { order }
    }

    #[must_use]
    pub fn set_title(title: impl Into<String>) -> Self {
        Self::SetTitle {
            title: title.into(),
        }
    }

    #[must_use]
    pub fn load_document(document: FormDocument) -> Self {
        Self::LoadDocument { document }
    }

    /// Id of the field this action creates, if it creates one
    #[must_use]
    pub fn created_field(&self) -> Option<FieldId> {
        match self {
            Self::AddField { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// Short name for logs
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddField { .. } => "add_field",
            Self::UpdateField { .. } => "update_field",
            Self::RemoveField { .. } => "remove_field",
            Self::ReorderFields { .. } => "reorder_fields",
            Self::SetTitle { .. } => "set_title",
            Self::LoadDocument { .. } => "load_document",
            Self::ResetForm => "reset_form",
        }
    }
}
