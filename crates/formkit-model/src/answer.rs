//! Answers collected from a filled-in form

use crate::field::FieldId;
use crate::kind::FieldKind;
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Typed answer for one field
///
/// Deserializes untagged from JSON: booleans, numbers and strings map to
/// `Bool`, `Number` and `Text`. `Date` is produced by
/// [`FieldKind::parse_answer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Checkbox state
    Bool(bool),
    /// Numeric input
    Number(f64),
    /// Free text, e-mail, or the selected option value
    Text(String),
    /// Parsed calendar date
    Date(NaiveDate),
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Answers keyed by field id, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(IndexMap<FieldId, AnswerValue>);

impl AnswerSet {
    /// Empty answer set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) the answer for `id`
    pub fn insert(&mut self, id: FieldId, value: impl Into<AnswerValue>) -> Option<AnswerValue> {
        self.0.insert(id, value.into())
    }

    /// Builder-style [`insert`](Self::insert)
    #[must_use]
    pub fn with(mut self, id: FieldId, value: impl Into<AnswerValue>) -> Self {
        self.insert(id, value);
        self
    }

    /// Answer for `id`, if any
    #[inline]
    #[must_use]
    pub fn get(&self, id: &FieldId) -> Option<&AnswerValue> {
        self.0.get(id)
    }

    /// Drop the answer for `id`
    pub fn remove(&mut self, id: &FieldId) -> Option<AnswerValue> {
        self.0.shift_remove(id)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate answers in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, &AnswerValue)> {
        self.0.iter()
    }
}

impl FromIterator<(FieldId, AnswerValue)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (FieldId, AnswerValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Raw input could not be read as the field's kind
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("invalid {kind} answer: {raw:?}")]
    Invalid { kind: FieldKind, raw: String },
}

impl AnswerError {
    pub(crate) fn invalid(kind: FieldKind, raw: &str) -> Self {
        Self::Invalid {
            kind,
            raw: raw.to_string(),
        }
    }
}
