//! Stateful wrapper around the reducer

use crate::action::Action;
use crate::movement::{move_action, Direction};
use crate::reducer::try_apply;
use formkit_model::FormDocument;

/// Owner of the current form document
///
/// All mutation goes through [`dispatch`](Self::dispatch). Readers get a
/// shared reference only.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    state: FormDocument,
    revision: u64,
}

impl DocumentStore {
    /// Store holding the default empty document
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current document
    #[inline]
    #[must_use]
    pub fn state(&self) -> &FormDocument {
        &self.state
    }

    /// Number of applied (non-ignored) actions
    ///
    /// Renderers can compare revisions to skip redundant redraws.
    #[inline]
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply `action`; returns whether the document changed
    pub fn dispatch(&mut self, action: Action) -> bool {
        let name = action.name();
        match try_apply(&self.state, action) {
            Ok(next) => {
                self.state = next;
                self.revision += 1;
                tracing::trace!(action = name, revision = self.revision, "action applied");
                true
            }
            Err(reason) => {
                tracing::debug!(action = name, %reason, "action ignored");
                false
            }
        }
    }

    /// Move the field at `index` one step; returns whether anything moved
    pub fn move_field(&mut self, index: usize, direction: Direction) -> bool {
        match move_action(&self.state, index, direction) {
            Some(action) => self.dispatch(action),
            None => false,
        }
    }
}
