//! Form fields
//!
//! A [`FieldSpec`] is the data shape of one field. Attribute changes are
//! expressed as a [`FieldPatch`] and applied with [`FieldSpec::patched`],
//! which refuses patches that would break the option invariant.

use crate::kind::FieldKind;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Unique field identifier
///
/// Assigned at creation and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(pub Uuid);

impl FieldId {
    /// Generate new field ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FieldId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for FieldId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FieldId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// One choice of a radio or select field
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldOption {
    /// Submitted value
    pub value: String,
    /// Displayed text
    pub label: String,
}

impl FieldOption {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The `n`-th generated option: `option<n>` / `Option <n>`
    #[must_use]
    pub fn numbered(n: usize) -> Self {
        Self::new(format!("option{n}"), format!("Option {n}"))
    }
}

/// Field invariant violations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// Radio/select field left without options
    #[error("{kind} field {id} must keep at least one option")]
    EmptyOptions { id: FieldId, kind: FieldKind },

    /// Options given to a kind that has none
    #[error("{kind} field {id} cannot carry options")]
    OptionsNotSupported { id: FieldId, kind: FieldKind },
}

/// One form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    id: FieldId,
    #[serde(rename = "type")]
    kind: FieldKind,
    /// Display label
    pub label: String,
    /// Hint text for text-like kinds
    #[serde(default)]
    pub placeholder: String,
    /// Must be answered on submit
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    options: Vec<FieldOption>,
}

impl FieldSpec {
    /// New field of `kind` with a fresh id and default attributes
    #[must_use]
    pub fn new(kind: FieldKind) -> Self {
        Self::with_id(FieldId::new(), kind)
    }

    /// New field with a caller-chosen id
    ///
    /// Radio and select fields start with one default option.
    #[must_use]
    pub fn with_id(id: FieldId, kind: FieldKind) -> Self {
        let options = if kind.has_options() {
            vec![FieldOption::numbered(1)]
        } else {
            Vec::new()
        };
        Self {
            id,
            kind,
            label: kind.default_label(),
            placeholder: String::new(),
            required: false,
            options,
        }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> FieldId {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn options(&self) -> &[FieldOption] {
        &self.options
    }

    /// Check the option invariant for this field's kind
    ///
    /// # Errors
    /// Returns [`FieldError`] if a radio/select has no options or another
    /// kind carries some
    pub fn validate(&self) -> Result<(), FieldError> {
        check_options(self.id, self.kind, &self.options)
    }

    /// Copy of this field with `patch` applied
    ///
    /// Attributes absent from the patch are kept. The id and kind are never
    /// touched.
    ///
    /// # Errors
    /// Returns [`FieldError`] if the patched options would break the option
    /// invariant; `self` is left as it was.
    pub fn patched(&self, patch: &FieldPatch) -> Result<Self, FieldError> {
        if let Some(options) = &patch.options {
            check_options(self.id, self.kind, options)?;
        }

        let mut next = self.clone();
        if let Some(label) = &patch.label {
            next.label.clone_from(label);
        }
        if let Some(placeholder) = &patch.placeholder {
            next.placeholder.clone_from(placeholder);
        }
        if let Some(required) = patch.required {
            next.required = required;
        }
        if let Some(options) = &patch.options {
            next.options.clone_from(options);
        }
        Ok(next)
    }
}

fn check_options(id: FieldId, kind: FieldKind, options: &[FieldOption]) -> Result<(), FieldError> {
    match (kind.has_options(), options.is_empty()) {
        (true, true) => Err(FieldError::EmptyOptions { id, kind }),
        (false, false) => Err(FieldError::OptionsNotSupported { id, kind }),
        _ => Ok(()),
    }
}

/// Partial attribute update for a field
///
/// `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,
}

impl FieldPatch {
    /// Empty patch
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: Vec<FieldOption>) -> Self {
        self.options = Some(options);
        self
    }

    /// True if the patch changes nothing
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.placeholder.is_none()
            && self.required.is_none()
            && self.options.is_none()
    }
}
