//! The reducer
//!
//! `(FormDocument, Action) -> FormDocument`. No I/O, no failure: an action
//! that cannot be applied cleanly leaves the document exactly as it was.

use crate::action::Action;
use formkit_model::{DocumentError, FieldError, FieldId, FieldSpec, FormDocument};

/// Why an action was ignored
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// No field with this id
    #[error("unknown field: {0}")]
    UnknownField(FieldId),

    /// AddField with an id that is already in use
    #[error("field id already in use: {0}")]
    DuplicateFieldId(FieldId),

    /// Patch would break a field invariant
    #[error("invalid patch: {0}")]
    InvalidPatch(#[from] FieldError),

    /// ReorderFields order is not a permutation of the current ids
    #[error("reorder is not a permutation of the current fields")]
    NotAPermutation,

    /// LoadDocument with a malformed document
    #[error("malformed document: {0}")]
    MalformedDocument(#[from] DocumentError),
}

/// Apply `action` to `state`
///
/// Malformed or unknown-id actions return `state` unchanged.
#[must_use]
pub fn apply(state: FormDocument, action: Action) -> FormDocument {
    let name = action.name();
    match try_apply(&state, action) {
        Ok(next) => next,
        Err(reason) => {
            tracing::debug!(action = name, %reason, "action ignored");
            state
        }
    }
}

/// Apply `action`, reporting why it was ignored instead of swallowing it
///
/// `state` is never modified; on success the new document is returned.
///
/// # Errors
/// Returns the [`Rejection`] that made the action a no-op
pub fn try_apply(state: &FormDocument, action: Action) -> Result<FormDocument, Rejection> {
    match action {
        Action::AddField { id, kind, defaults } => {
            if state.position(id).is_some() {
                return Err(Rejection::DuplicateFieldId(id));
            }
            let field = FieldSpec::with_id(id, kind).patched(&defaults)?;
            let mut next = state.clone();
            next.fields.push(field);
            Ok(next)
        }

        Action::UpdateField { id, patch } => {
            let index = state.position(id).ok_or(Rejection::UnknownField(id))?;
            let updated = state.fields[index].patched(&patch)?;
            let mut next = state.clone();
            next.fields[index] = updated;
            Ok(next)
        }

        Action::RemoveField { id } => {
            let index = state.position(id).ok_or(Rejection::UnknownField(id))?;
            let mut next = state.clone();
            next.fields.remove(index);
            Ok(next)
        }

        Action::ReorderFields { order } => {
            if !state.is_permutation(&order) {
                return Err(Rejection::NotAPermutation);
            }
            let fields = order
                .iter()
                .filter_map(|id| state.field(*id).cloned())
                .collect();
            Ok(FormDocument {
                title: state.title.clone(),
                fields,
            })
        }

        Action::SetTitle { title } => Ok(FormDocument {
            title,
            fields: state.fields.clone(),
        }),

        Action::LoadDocument { document } => {
            document.validate()?;
            Ok(document)
        }

        Action::ResetForm => Ok(FormDocument::default()),
    }
}
