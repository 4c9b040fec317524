//! formkit CLI commands
//!
//! Each command runs against a [`FormController`] and returns a value the
//! binary prints as JSON.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

use anyhow::{bail, Context, Result};
use formkit_core::{FormController, FormkitConfig};
use formkit_model::{AnswerSet, FieldKind, FormDocument, RenderHint};
use formkit_repository::{SavedFormId, StorageBackend};
use formkit_store::Action;
use formkit_validation::ValidationErrors;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Store directory used when neither the flag nor the config names one
pub const DEFAULT_STORE_DIR: &str = ".formkit";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One line of `formkit list`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormSummary {
    pub id: String,
    pub title: String,
    pub fields: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}

/// Outcome of `formkit build`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildReport {
    pub id: String,
    pub applied: usize,
    pub ignored: usize,
    pub fields: usize,
}

/// One entry of `formkit kinds`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KindInfo {
    pub kind: FieldKind,
    pub widget: String,
    pub placeholder: bool,
    pub options: bool,
}

/// `--store` wins, then `storage_dir` from config, then [`DEFAULT_STORE_DIR`]
#[must_use]
pub fn resolve_store_dir(flag: Option<&Path>, config: &FormkitConfig) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or_else(|| config.storage_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_DIR))
}

/// Read and parse a JSON file
///
/// # Errors
/// Fails if the file cannot be read or does not parse as `T`
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", path.display()))
}

pub fn list_forms<B: StorageBackend>(ctl: &FormController<B>) -> Vec<FormSummary> {
    ctl.saved_forms()
        .iter()
        .map(|f| FormSummary {
            id: f.id.to_string(),
            title: f.title.clone(),
            fields: f.fields.len(),
            saved_at: f.saved_at.map(|t| t.to_rfc3339()),
        })
        .collect()
}

/// Load the saved form `id` into the controller and return it
///
/// # Errors
/// Fails if no usable saved form has this id
pub fn show_form<B: StorageBackend>(ctl: &mut FormController<B>, id: &str) -> Result<FormDocument> {
    let id = SavedFormId::from(id);
    if !ctl.load(&id) {
        bail!("no saved form with id {id}");
    }
    Ok(ctl.current_document().clone())
}

/// Replay `actions` on a fresh form and save the result
///
/// # Errors
/// Fails if the form could not be saved
pub fn build_form<B: StorageBackend>(
    ctl: &mut FormController<B>,
    actions: Vec<Action>,
) -> Result<BuildReport> {
    ctl.dispatch(Action::ResetForm);
    let total = actions.len();
    let applied = actions
        .into_iter()
        .filter(|action| {
            let name = action.name();
            let ok = ctl.dispatch(action.clone());
            if !ok {
                tracing::warn!(action = name, "action ignored");
            }
            ok
        })
        .count();

    let id = ctl.save().context("failed to save form")?;
    Ok(BuildReport {
        id: id.to_string(),
        applied,
        ignored: total - applied,
        fields: ctl.current_document().len(),
    })
}

/// Validate `answers` against the saved form `id`
///
/// # Errors
/// Fails if no usable saved form has this id
pub fn validate_answers<B: StorageBackend>(
    ctl: &mut FormController<B>,
    id: &str,
    answers: &AnswerSet,
) -> Result<ValidationErrors> {
    show_form(ctl, id)?;
    Ok(ctl.validate(answers))
}

#[must_use]
pub fn kinds() -> Vec<KindInfo> {
    FieldKind::ALL
        .into_iter()
        .map(|kind| KindInfo {
            kind,
            widget: match kind.render_hint() {
                RenderHint::Input(ty) => format!("input[type={ty}]"),
                RenderHint::TextArea => "textarea".to_string(),
                RenderHint::Dropdown => "select".to_string(),
                RenderHint::RadioGroup => "radio-group".to_string(),
            },
            placeholder: kind.supports_placeholder(),
            options: kind.has_options(),
        })
        .collect()
}
