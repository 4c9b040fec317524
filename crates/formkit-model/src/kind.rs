//! Field kinds and their per-kind capabilities
//!
//! Every behaviour that depends on the type of a field lives here, keyed on
//! [`FieldKind`]. Renderers and the validation engine ask the kind instead of
//! branching on type strings.

use crate::answer::{AnswerError, AnswerValue};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Date format accepted for date answers
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Type of a form field
///
/// Fixed when the field is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Single-line text
    Text,
    /// Numeric input
    Number,
    /// E-mail address
    Email,
    /// Calendar date
    Date,
    /// Single boolean checkbox
    Checkbox,
    /// One-of-many radio group
    Radio,
    /// Drop-down selection
    Select,
    /// Multi-line text
    Textarea,
}

/// Widget a renderer should draw for a field kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderHint {
    /// `<input type="...">` with the given type attribute
    Input(&'static str),
    /// Multi-line text area
    TextArea,
    /// Drop-down built from the field options
    Dropdown,
    /// Radio button group built from the field options
    RadioGroup,
}

impl FieldKind {
    /// All kinds, in palette order
    pub const ALL: [FieldKind; 8] = [
        FieldKind::Text,
        FieldKind::Number,
        FieldKind::Email,
        FieldKind::Date,
        FieldKind::Checkbox,
        FieldKind::Radio,
        FieldKind::Select,
        FieldKind::Textarea,
    ];

    /// Lowercase wire name
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Email => "email",
            Self::Date => "date",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Select => "select",
            Self::Textarea => "textarea",
        }
    }

    /// Whether fields of this kind carry an option list
    #[inline]
    #[must_use]
    pub const fn has_options(self) -> bool {
        matches!(self, Self::Radio | Self::Select)
    }

    /// Whether the placeholder attribute is shown for this kind
    #[inline]
    #[must_use]
    pub const fn supports_placeholder(self) -> bool {
        matches!(
            self,
            Self::Text | Self::Number | Self::Email | Self::Textarea
        )
    }

    /// Widget to draw
    #[inline]
    #[must_use]
    pub const fn render_hint(self) -> RenderHint {
        match self {
            Self::Text => RenderHint::Input("text"),
            Self::Number => RenderHint::Input("number"),
            Self::Email => RenderHint::Input("email"),
            Self::Date => RenderHint::Input("date"),
            Self::Checkbox => RenderHint::Input("checkbox"),
            Self::Radio => RenderHint::RadioGroup,
            Self::Select => RenderHint::Dropdown,
            Self::Textarea => RenderHint::TextArea,
        }
    }

    /// Label given to a freshly added field of this kind
    #[must_use]
    pub fn default_label(self) -> String {
        format!("New {self} field")
    }

    /// Does `answer` count as "answered" for a field of this kind?
    ///
    /// Used by required-field validation. A checkbox answered `false` is
    /// an answer, but not one that satisfies `required`.
    #[must_use]
    pub fn is_answer_present(self, answer: &AnswerValue) -> bool {
        match (self, answer) {
            (Self::Checkbox, AnswerValue::Bool(checked)) => *checked,
            (Self::Checkbox, AnswerValue::Text(raw)) => parse_checked(raw).unwrap_or(false),
            (Self::Checkbox, _) => false,

            (Self::Number, AnswerValue::Number(n)) => n.is_finite(),
            (Self::Number, AnswerValue::Text(raw)) => {
                raw.trim().parse::<f64>().is_ok_and(f64::is_finite)
            }
            (Self::Number, _) => false,

            (Self::Date, AnswerValue::Date(_)) => true,
            (Self::Date, AnswerValue::Text(raw)) => {
                NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).is_ok()
            }
            (Self::Date, _) => false,

            (Self::Radio | Self::Select, AnswerValue::Text(raw)) => !raw.is_empty(),
            (Self::Radio | Self::Select, _) => false,

            // Text-like kinds
            (_, AnswerValue::Text(raw)) => !raw.is_empty(),
            (_, AnswerValue::Number(n)) => n.is_finite(),
            (_, AnswerValue::Date(_)) => true,
            (_, AnswerValue::Bool(_)) => false,
        }
    }

    /// Convert raw renderer input into a typed answer
    ///
    /// # Errors
    /// Returns [`AnswerError`] when `raw` cannot be read as this kind
    pub fn parse_answer(self, raw: &str) -> Result<AnswerValue, AnswerError> {
        match self {
            Self::Checkbox => parse_checked(raw)
                .map(AnswerValue::Bool)
                .ok_or_else(|| AnswerError::invalid(self, raw)),
            Self::Number => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Ok(AnswerValue::Text(String::new()));
                }
                trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|n| n.is_finite())
                    .map(AnswerValue::Number)
                    .ok_or_else(|| AnswerError::invalid(self, raw))
            }
            Self::Date => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Ok(AnswerValue::Text(String::new()));
                }
                NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
                    .map(AnswerValue::Date)
                    .map_err(|_| AnswerError::invalid(self, raw))
            }
            Self::Text | Self::Email | Self::Radio | Self::Select | Self::Textarea => {
                Ok(AnswerValue::Text(raw.to_string()))
            }
        }
    }
}

fn parse_checked(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Some(true),
        "" | "off" | "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`FieldKind`] from its name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for FieldKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for kind in FieldKind::ALL {
            assert_eq!(kind.as_str().parse::<FieldKind>().unwrap(), kind);
        }
        assert!("slider".parse::<FieldKind>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&FieldKind::Textarea).unwrap();
        assert_eq!(json, "\"textarea\"");
        let kind: FieldKind = serde_json::from_str("\"select\"").unwrap();
        assert_eq!(kind, FieldKind::Select);
    }

    #[test]
    fn only_radio_and_select_have_options() {
        let with_options: Vec<_> = FieldKind::ALL
            .into_iter()
            .filter(|k| k.has_options())
            .collect();
        assert_eq!(with_options, vec![FieldKind::Radio, FieldKind::Select]);
    }

    #[test]
    fn default_label_names_the_kind() {
        assert_eq!(FieldKind::Email.default_label(), "New email field");
    }

    #[test]
    fn render_hints() {
        assert_eq!(FieldKind::Date.render_hint(), RenderHint::Input("date"));
        assert_eq!(FieldKind::Select.render_hint(), RenderHint::Dropdown);
        assert_eq!(FieldKind::Radio.render_hint(), RenderHint::RadioGroup);
        assert_eq!(FieldKind::Textarea.render_hint(), RenderHint::TextArea);
    }

    #[test]
    fn checkbox_presence_distinguishes_false_from_true() {
        assert!(FieldKind::Checkbox.is_answer_present(&AnswerValue::Bool(true)));
        assert!(!FieldKind::Checkbox.is_answer_present(&AnswerValue::Bool(false)));
        assert!(!FieldKind::Checkbox.is_answer_present(&AnswerValue::Text("x".into())));
    }

    #[test]
    fn text_presence_requires_content() {
        assert!(FieldKind::Text.is_answer_present(&AnswerValue::Text("Alice".into())));
        assert!(!FieldKind::Text.is_answer_present(&AnswerValue::Text(String::new())));
        assert!(!FieldKind::Email.is_answer_present(&AnswerValue::Bool(true)));
    }

    #[test]
    fn number_zero_is_present() {
        assert!(FieldKind::Number.is_answer_present(&AnswerValue::Number(0.0)));
        assert!(FieldKind::Number.is_answer_present(&AnswerValue::Text("0".into())));
        assert!(!FieldKind::Number.is_answer_present(&AnswerValue::Text("abc".into())));
        assert!(!FieldKind::Number.is_answer_present(&AnswerValue::Number(f64::NAN)));
    }

    #[test]
    fn non_finite_number_text_is_absent() {
        for raw in ["NaN", "inf", "-infinity", " 1e400 "] {
            assert!(
                !FieldKind::Number.is_answer_present(&AnswerValue::Text(raw.into())),
                "{raw}"
            );
        }
    }

    #[test]
    fn choices_need_a_selected_value() {
        for kind in [FieldKind::Radio, FieldKind::Select] {
            assert!(kind.is_answer_present(&AnswerValue::Text("option1".into())));
            assert!(!kind.is_answer_present(&AnswerValue::Text(String::new())));
            assert!(!kind.is_answer_present(&AnswerValue::Number(3.0)));
            assert!(!kind.is_answer_present(&AnswerValue::Bool(true)));
            assert!(!kind.is_answer_present(&AnswerValue::Date(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
            )));
        }
    }

    #[test]
    fn parse_answer_per_kind() {
        assert_eq!(
            FieldKind::Checkbox.parse_answer("on").unwrap(),
            AnswerValue::Bool(true)
        );
        assert_eq!(
            FieldKind::Number.parse_answer(" 42 ").unwrap(),
            AnswerValue::Number(42.0)
        );
        assert_eq!(
            FieldKind::Date.parse_answer("2024-02-29").unwrap(),
            AnswerValue::Date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        );
        assert!(FieldKind::Date.parse_answer("2023-02-29").is_err());
        assert!(FieldKind::Number.parse_answer("twelve").is_err());
        assert_eq!(
            FieldKind::Select.parse_answer("option2").unwrap(),
            AnswerValue::Text("option2".into())
        );
    }

    #[test]
    fn empty_numeric_input_parses_as_blank() {
        let blank = FieldKind::Number.parse_answer("").unwrap();
        assert!(!FieldKind::Number.is_answer_present(&blank));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // parsing never changes whether a required field counts as answered
            #[test]
            fn parsed_answer_keeps_presence(
                kind in proptest::sample::select(FieldKind::ALL.to_vec()),
                raw in prop_oneof![
                    "[ 0-9.e-]{0,8}",
                    "(19|20)[0-9]{2}-[01][0-9]-[0-3][0-9]",
                    "(on|off|yes|no|true|false|0|1| )",
                    ".{0,12}",
                ],
            ) {
                if let Ok(value) = kind.parse_answer(&raw) {
                    prop_assert_eq!(
                        kind.is_answer_present(&value),
                        kind.is_answer_present(&AnswerValue::Text(raw.clone()))
                    );
                }
            }
        }
    }
}
