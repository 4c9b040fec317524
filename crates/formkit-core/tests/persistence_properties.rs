//! Persistence properties
//!
//! Whatever the controller saves, it loads back unchanged.

use formkit_model::{FieldKind, FieldPatch};
use formkit_store::Action;
use formkit_test_utils::memory_controller;
use proptest::prelude::*;

fn edit() -> impl Strategy<Value = (usize, String, String, bool)> {
    (0..FieldKind::ALL.len(), "[a-zA-Z ]{0,12}", "[a-z@.]{0,10}", any::<bool>())
}

proptest! {
    #[test]
    fn prop_save_then_load_is_identity(
        title in "[A-Za-z0-9 ]{0,24}",
        edits in prop::collection::vec(edit(), 0..10),
    ) {
        let mut ctl = memory_controller();
        ctl.dispatch(Action::set_title(title));
        for (kind, label, placeholder, required) in edits {
            ctl.dispatch(Action::add_field_with(
                FieldKind::ALL[kind],
                FieldPatch::new()
                    .with_label(label)
                    .with_placeholder(placeholder)
                    .with_required(required),
            ));
        }
        let expected = ctl.current_document().clone();

        let id = ctl.save().unwrap();
        ctl.dispatch(Action::ResetForm);
        prop_assert!(ctl.load(&id));
        prop_assert_eq!(ctl.current_document(), &expected);
        prop_assert_eq!(ctl.repository().load(&id), Some(expected));
    }
}
