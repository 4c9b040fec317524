//! Required-field validation
//!
//! Validation is all-or-nothing per submit: every required field is checked
//! on every run, and an empty [`ValidationErrors`] is the only pass signal.

use formkit_model::{AnswerSet, FieldId, FieldSpec, FormDocument};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Message recorded for an unanswered required field
pub const DEFAULT_REQUIRED_MESSAGE: &str = "This field is required";

/// Per-field error messages, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(IndexMap<FieldId, String>);

impl ValidationErrors {
    /// True when every required field was answered
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Error for `id`, if it failed
    #[inline]
    #[must_use]
    pub fn get(&self, id: &FieldId) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, id: &FieldId) -> bool {
        self.0.contains_key(id)
    }

    /// Failing fields and messages in field order
    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, &str)> {
        self.0.iter().map(|(id, msg)| (id, msg.as_str()))
    }

    /// Failing field ids in field order
    pub fn field_ids(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.0.keys().copied()
    }
}

/// Required-field checker
///
/// Stateless apart from the message it records; the same fields and answers
/// always give the same result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationEngine {
    required_message: String,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self {
            required_message: DEFAULT_REQUIRED_MESSAGE.to_string(),
        }
    }
}

impl ValidationEngine {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `message` for unanswered required fields
    #[must_use]
    pub fn with_required_message(mut self, message: impl Into<String>) -> Self {
        self.required_message = message.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn required_message(&self) -> &str {
        &self.required_message
    }

    /// Check `answers` against every required field in `fields`
    ///
    /// Whether an answer counts is decided by the field kind
    /// ([`FieldKind::is_answer_present`](formkit_model::FieldKind::is_answer_present)).
    #[must_use]
    pub fn validate(&self, fields: &[FieldSpec], answers: &AnswerSet) -> ValidationErrors {
        let errors = fields
            .iter()
            .filter(|field| field.required)
            .filter(|field| {
                !answers
                    .get(&field.id())
                    .is_some_and(|answer| field.kind().is_answer_present(answer))
            })
            .map(|field| (field.id(), self.required_message.clone()))
            .collect();
        ValidationErrors(errors)
    }

    /// [`validate`](Self::validate) over a whole document
    #[must_use]
    pub fn validate_document(&self, document: &FormDocument, answers: &AnswerSet) -> ValidationErrors {
        self.validate(&document.fields, answers)
    }
}

/// Validate with the default message
#[must_use]
pub fn validate(fields: &[FieldSpec], answers: &AnswerSet) -> ValidationErrors {
    ValidationEngine::default().validate(fields, answers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use formkit_model::{AnswerValue, FieldKind, FieldPatch};

    fn required(kind: FieldKind) -> FieldSpec {
        FieldSpec::new(kind)
            .patched(&FieldPatch::new().with_required(true))
            .unwrap()
    }

    #[test]
    fn no_fields_no_errors() {
        let answers = AnswerSet::new().with(FieldId::new(), "stray");
        assert!(validate(&[], &answers).is_empty());
        assert!(validate(&[], &AnswerSet::new()).is_empty());
    }

    #[test]
    fn missing_required_text() {
        let field = required(FieldKind::Text);
        let errors = validate(std::slice::from_ref(&field), &AnswerSet::new());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(&field.id()), Some(DEFAULT_REQUIRED_MESSAGE));

        let answered = AnswerSet::new().with(field.id(), "x");
        assert!(validate(&[field], &answered).is_empty());
    }

    #[test]
    fn empty_string_is_missing() {
        let field = required(FieldKind::Email);
        let answers = AnswerSet::new().with(field.id(), "");
        assert!(validate(std::slice::from_ref(&field), &answers).contains(&field.id()));
    }

    #[test]
    fn optional_fields_never_error() {
        let fields: Vec<_> = FieldKind::ALL.into_iter().map(FieldSpec::new).collect();
        assert!(validate(&fields, &AnswerSet::new()).is_empty());
    }

    #[test]
    fn required_checkbox_must_be_checked() {
        let field = required(FieldKind::Checkbox);
        let unchecked = AnswerSet::new().with(field.id(), false);
        let checked = AnswerSet::new().with(field.id(), true);
        assert!(!validate(std::slice::from_ref(&field), &unchecked).is_empty());
        assert!(validate(std::slice::from_ref(&field), &checked).is_empty());
    }

    #[test]
    fn required_number_accepts_zero() {
        let field = required(FieldKind::Number);
        let answers = AnswerSet::new().with(field.id(), AnswerValue::Number(0.0));
        assert!(validate(&[field], &answers).is_empty());
    }

    #[test]
    fn errors_follow_field_order() {
        let a = required(FieldKind::Text);
        let b = required(FieldKind::Select);
        let c = required(FieldKind::Date);
        let answers = AnswerSet::new().with(b.id(), "option1");
        let errors = validate(&[a.clone(), b, c.clone()], &answers);
        assert_eq!(errors.field_ids().collect::<Vec<_>>(), vec![a.id(), c.id()]);
    }

    #[test]
    fn custom_message() {
        let field = required(FieldKind::Textarea);
        let engine = ValidationEngine::new().with_required_message("Please fill this in");
        let errors = engine.validate(std::slice::from_ref(&field), &AnswerSet::new());
        assert_eq!(errors.get(&field.id()), Some("Please fill this in"));
    }

    #[test]
    fn errors_serialize_as_object() {
        let field = required(FieldKind::Text);
        let errors = validate(std::slice::from_ref(&field), &AnswerSet::new());
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json[field.id().to_string()], DEFAULT_REQUIRED_MESSAGE);
    }
}
