//! Form controller
//!
//! The one object a renderer talks to. It owns:
//! - the document store (current form)
//! - the saved-form repository
//! - the validation engine
//!
//! Renderers read through `&self` accessors and change things only through
//! [`dispatch`](FormController::dispatch) and the helpers built on it.

use crate::config::FormkitConfig;
use crate::error::FormkitError;
use chrono::{DateTime, Utc};
use formkit_model::{AnswerSet, FieldId, FieldOption, FormDocument};
use formkit_repository::{FormRepository, SavedForm, SavedFormId, StorageBackend};
use formkit_store::{options, Action, Direction, DocumentStore};
use formkit_validation::{ValidationEngine, ValidationErrors};
use serde::Serialize;

/// Answers accepted by a successful submit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    /// Title of the form that was filled in
    pub title: String,
    pub answers: AnswerSet,
    pub submitted_at: DateTime<Utc>,
}

/// Owner of all form-building state
#[derive(Debug)]
pub struct FormController<B: StorageBackend> {
    config: FormkitConfig,
    store: DocumentStore,
    repository: FormRepository<B>,
    validator: ValidationEngine,
}

impl<B: StorageBackend> FormController<B> {
    /// Create controller and read saved forms from `backend`
    ///
    /// # Errors
    /// Returns [`FormkitError`] if the saved-form collection cannot be read
    pub fn open(config: FormkitConfig, backend: B) -> Result<Self, FormkitError> {
        let repository = FormRepository::open(backend, config.collection_key.clone())?;
        tracing::info!(
            key = %config.collection_key,
            saved = repository.len(),
            "form controller ready"
        );
        Ok(Self::assemble(config, repository))
    }

    /// Like [`open`](Self::open), but an unreadable collection only logs a
    /// warning and leaves the saved-form list empty
    #[must_use]
    pub fn open_or_empty(config: FormkitConfig, backend: B) -> Self {
        let mut repository = FormRepository::empty(backend, config.collection_key.clone());
        if let Err(e) = repository.reload() {
            tracing::warn!(error = %e, "saved forms unavailable, starting with none");
        }
        Self::assemble(config, repository)
    }

    fn assemble(config: FormkitConfig, repository: FormRepository<B>) -> Self {
        let validator = ValidationEngine::new().with_required_message(config.required_message.clone());
        Self {
            config,
            store: DocumentStore::new(),
            repository,
            validator,
        }
    }

    /// The form being edited
    #[inline]
    #[must_use]
    pub fn current_document(&self) -> &FormDocument {
        self.store.state()
    }

    /// Changes applied so far; bumps on every effective dispatch
    #[inline]
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    /// Apply `action` to the current form; returns whether it changed
    pub fn dispatch(&mut self, action: Action) -> bool {
        self.store.dispatch(action)
    }

    /// Move the field at `index` one slot up or down
    pub fn move_field(&mut self, index: usize, direction: Direction) -> bool {
        self.store.move_field(index, direction)
    }

    /// Append a generated option to a radio/select field
    pub fn add_option(&mut self, field: FieldId) -> bool {
        let action = self
            .current_document()
            .field(field)
            .and_then(options::add_option);
        self.dispatch_some(action)
    }

    /// Replace option `index` of `field`
    pub fn update_option(&mut self, field: FieldId, index: usize, option: FieldOption) -> bool {
        let action = self
            .current_document()
            .field(field)
            .and_then(|f| options::update_option(f, index, option));
        self.dispatch_some(action)
    }

    /// Remove option `index` of `field`; the last option is never removed
    pub fn remove_option(&mut self, field: FieldId, index: usize) -> bool {
        let action = self
            .current_document()
            .field(field)
            .and_then(|f| options::remove_option(f, index));
        self.dispatch_some(action)
    }

    fn dispatch_some(&mut self, action: Option<Action>) -> bool {
        match action {
            Some(action) => self.dispatch(action),
            None => {
                tracing::debug!("option edit refused");
                false
            }
        }
    }

    /// Saved forms, oldest first
    #[inline]
    #[must_use]
    pub fn saved_forms(&self) -> &[SavedForm] {
        self.repository.list()
    }

    /// Save the current form under a new id
    ///
    /// # Errors
    /// Returns [`FormkitError`] if the collection could not be written; the
    /// current form and the saved-form list are unchanged
    pub fn save(&mut self) -> Result<SavedFormId, FormkitError> {
        self.repository
            .save(self.store.state())
            .map_err(|e| {
                tracing::warn!(error = %e, "save failed");
                FormkitError::from(e)
            })
    }

    /// Replace the current form with the one saved under `id`
    ///
    /// Returns `false` if no such saved form exists or its contents are
    /// malformed.
    pub fn load(&mut self, id: &SavedFormId) -> bool {
        let Some(document) = self.repository.load(id) else {
            tracing::debug!(%id, "no saved form with this id");
            return false;
        };
        let loaded = self.dispatch(Action::load_document(document));
        if loaded {
            tracing::info!(%id, "saved form loaded");
        }
        loaded
    }

    /// Re-read saved forms from storage
    ///
    /// # Errors
    /// Returns [`FormkitError`] if the collection cannot be read; the
    /// previous list is kept
    pub fn reload_saved_forms(&mut self) -> Result<usize, FormkitError> {
        Ok(self.repository.reload()?)
    }

    /// Required-field errors for `answers` against the current form
    #[must_use]
    pub fn validate(&self, answers: &AnswerSet) -> ValidationErrors {
        self.validator.validate_document(self.store.state(), answers)
    }

    /// Validate and, if every required field is answered, accept `answers`
    ///
    /// # Errors
    /// Returns the per-field errors when validation fails
    pub fn submit(&self, answers: AnswerSet) -> Result<Submission, ValidationErrors> {
        let errors = self.validate(&answers);
        if !errors.is_empty() {
            tracing::debug!(failed = errors.len(), "submit rejected");
            return Err(errors);
        }
        Ok(Submission {
            title: self.store.state().title.clone(),
            answers,
            submitted_at: Utc::now(),
        })
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &FormkitConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn repository(&self) -> &FormRepository<B> {
        &self.repository
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formkit_model::{FieldKind, FieldPatch};
    use formkit_repository::MemoryBackend;

    fn controller() -> FormController<MemoryBackend> {
        FormController::open(FormkitConfig::new(), MemoryBackend::new()).unwrap()
    }

    fn add(ctl: &mut FormController<MemoryBackend>, kind: FieldKind) -> FieldId {
        let action = Action::add_field(kind);
        let id = action.created_field().unwrap();
        assert!(ctl.dispatch(action));
        id
    }

    #[test]
    fn starts_with_default_document() {
        let ctl = controller();
        assert_eq!(ctl.current_document(), &FormDocument::default());
        assert!(ctl.saved_forms().is_empty());
    }

    #[test]
    fn option_helpers() {
        let mut ctl = controller();
        let id = add(&mut ctl, FieldKind::Select);

        assert!(!ctl.remove_option(id, 0));
        assert!(ctl.add_option(id));
        assert!(ctl.update_option(id, 1, FieldOption::new("blue", "Blue")));
        assert!(ctl.remove_option(id, 0));

        let field = ctl.current_document().field(id).unwrap();
        assert_eq!(field.options(), &[FieldOption::new("blue", "Blue")]);
    }

    #[test]
    fn option_helpers_on_unknown_field() {
        let mut ctl = controller();
        assert!(!ctl.add_option(FieldId::new()));
        assert_eq!(ctl.revision(), 0);
    }

    #[test]
    fn load_unknown_id_keeps_document() {
        let mut ctl = controller();
        add(&mut ctl, FieldKind::Text);
        let before = ctl.current_document().clone();
        assert!(!ctl.load(&SavedFormId::from("nope")));
        assert_eq!(ctl.current_document(), &before);
    }

    #[test]
    fn submit_uses_configured_message() {
        let config = FormkitConfig::new().with_required_message("Needed");
        let mut ctl = FormController::open(config, MemoryBackend::new()).unwrap();
        let id = add(&mut ctl, FieldKind::Text);
        ctl.dispatch(Action::update_field(id, FieldPatch::new().with_required(true)));

        let errors = ctl.submit(AnswerSet::new()).unwrap_err();
        assert_eq!(errors.get(&id), Some("Needed"));

        let ok = ctl.submit(AnswerSet::new().with(id, "filled")).unwrap();
        assert_eq!(ok.title, "Untitled Form");
        assert_eq!(ok.answers.len(), 1);
    }
}
