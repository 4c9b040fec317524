//! Reducer properties
//!
//! Id uniqueness, field counting and move reversibility over arbitrary
//! action sequences.

use formkit_model::{FieldId, FieldKind, FieldPatch, FormDocument};
use formkit_store::options::remove_option;
use formkit_store::{apply, move_field, Action, Direction};
use proptest::prelude::*;
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum Op {
    Add(usize),
    Remove(usize),
    RemoveUnknown,
    Update(usize, bool),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..FieldKind::ALL.len()).prop_map(Op::Add),
        any::<usize>().prop_map(Op::Remove),
        Just(Op::RemoveUnknown),
        (any::<usize>(), any::<bool>()).prop_map(|(i, r)| Op::Update(i, r)),
    ]
}

fn document_of(len: usize) -> FormDocument {
    (0..len).fold(FormDocument::new(), |doc, i| {
        apply(
            doc,
            Action::add_field(FieldKind::ALL[i % FieldKind::ALL.len()]),
        )
    })
}

fn order(doc: &FormDocument) -> Vec<FieldId> {
    doc.ids().collect()
}

proptest! {
    #[test]
    fn prop_ids_unique_and_count_matches(ops in prop::collection::vec(op(), 0..60)) {
        let mut doc = FormDocument::new();
        let mut added = 0usize;
        let mut removed = 0usize;

        for op in ops {
            let action = match op {
                Op::Add(k) => {
                    added += 1;
                    Action::add_field(FieldKind::ALL[k])
                }
                Op::Remove(i) => {
                    if doc.is_empty() {
                        continue;
                    }
                    removed += 1;
                    Action::remove_field(doc.fields[i % doc.len()].id())
                }
                Op::RemoveUnknown => Action::remove_field(FieldId::new()),
                Op::Update(i, required) => {
                    if doc.is_empty() {
                        continue;
                    }
                    let id = doc.fields[i % doc.len()].id();
                    Action::update_field(id, FieldPatch::new().with_required(required))
                }
            };
            doc = apply(doc, action);

            let unique: HashSet<_> = doc.ids().collect();
            prop_assert_eq!(unique.len(), doc.len());
        }

        prop_assert_eq!(doc.len(), added - removed);
        prop_assert!(doc.validate().is_ok());
    }

    #[test]
    fn prop_boundary_moves_are_noops(len in 1usize..12) {
        let doc = document_of(len);
        let before = order(&doc);

        let up = move_field(doc.clone(), 0, Direction::Up);
        prop_assert_eq!(order(&up), before.clone());

        let down = move_field(doc, len - 1, Direction::Down);
        prop_assert_eq!(order(&down), before);
    }

    #[test]
    fn prop_up_then_down_restores(len in 2usize..12, pick in any::<usize>()) {
        let doc = document_of(len);
        let i = 1 + pick % (len - 1);

        let up = move_field(doc.clone(), i, Direction::Up);
        prop_assert_ne!(order(&up), order(&doc));

        let restored = move_field(up, i - 1, Direction::Down);
        prop_assert_eq!(order(&restored), order(&doc));
    }

    #[test]
    fn prop_move_changes_only_two_positions(len in 2usize..12, pick in any::<usize>(), down in any::<bool>()) {
        let doc = document_of(len);
        let i = pick % len;
        let direction = if down { Direction::Down } else { Direction::Up };
        let moved = move_field(doc.clone(), i, direction);

        let changed = order(&doc)
            .iter()
            .zip(order(&moved).iter())
            .filter(|(a, b)| a != b)
            .count();
        prop_assert!(changed == 0 || changed == 2);
    }
}

#[test]
fn sole_option_survives_removal_attempt() {
    for kind in [FieldKind::Radio, FieldKind::Select] {
        let add = Action::add_field(kind);
        let id = add.created_field().unwrap();
        let doc = apply(FormDocument::new(), add);
        let field = doc.field(id).unwrap();

        assert_eq!(field.options().len(), 1);
        assert!(remove_option(field, 0).is_none());
        assert_eq!(doc.field(id).unwrap().options().len(), 1);
    }
}
