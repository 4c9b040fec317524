//! Option list edits for radio and select fields
//!
//! Each helper reads the field's current options and returns the
//! `UpdateField` action that carries the new list. `None` means the edit is
//! refused and nothing should be dispatched.

use crate::action::Action;
use formkit_model::{FieldOption, FieldPatch, FieldSpec};

fn replace_options(field: &FieldSpec, options: Vec<FieldOption>) -> Action {
    Action::update_field(field.id(), FieldPatch::new().with_options(options))
}

/// Append a generated `option<N+1>` entry
#[must_use]
pub fn add_option(field: &FieldSpec) -> Option<Action> {
    if !field.kind().has_options() {
        return None;
    }
    let mut options = field.options().to_vec();
    options.push(FieldOption::numbered(options.len() + 1));
    Some(replace_options(field, options))
}

/// Replace the option at `index`
#[must_use]
pub fn update_option(field: &FieldSpec, index: usize, option: FieldOption) -> Option<Action> {
    if index >= field.options().len() {
        return None;
    }
    let mut options = field.options().to_vec();
    options[index] = option;
    Some(replace_options(field, options))
}

/// Drop the option at `index`; refused if it is the last one left
#[must_use]
pub fn remove_option(field: &FieldSpec, index: usize) -> Option<Action> {
    let current = field.options();
    if current.len() <= 1 || index >= current.len() {
        return None;
    }
    let mut options = current.to_vec();
    options.remove(index);
    Some(replace_options(field, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::apply;
    use formkit_model::{FieldKind, FormDocument};

    fn doc_with(field: FieldSpec) -> FormDocument {
        FormDocument::new().with_field(field)
    }

    #[test]
    fn add_option_numbers_sequentially() {
        let field = FieldSpec::new(FieldKind::Radio);
        let doc = apply(doc_with(field.clone()), add_option(&field).unwrap());
        let options = doc.fields[0].options();
        assert_eq!(options.len(), 2);
        assert_eq!(options[1], FieldOption::new("option2", "Option 2"));
    }

    #[test]
    fn add_option_refused_for_text() {
        assert!(add_option(&FieldSpec::new(FieldKind::Text)).is_none());
    }

    #[test]
    fn update_option_by_position() {
        let field = FieldSpec::new(FieldKind::Select);
        let action = update_option(&field, 0, FieldOption::new("red", "Red")).unwrap();
        let doc = apply(doc_with(field.clone()), action);
        assert_eq!(doc.fields[0].options(), &[FieldOption::new("red", "Red")]);

        assert!(update_option(&field, 3, FieldOption::numbered(4)).is_none());
    }

    #[test]
    fn last_option_cannot_be_removed() {
        let field = FieldSpec::new(FieldKind::Select);
        assert!(remove_option(&field, 0).is_none());
        assert_eq!(field.options().len(), 1);
    }

    #[test]
    fn remove_option_by_position() {
        let field = FieldSpec::new(FieldKind::Radio);
        let doc = apply(doc_with(field.clone()), add_option(&field).unwrap());
        let grown = doc.fields[0].clone();

        let doc = apply(doc, remove_option(&grown, 0).unwrap());
        assert_eq!(doc.fields[0].options(), &[FieldOption::numbered(2)]);
    }
}
