//! Moving a field one slot up or down

use crate::action::Action;
use crate::reducer::apply;
use formkit_model::FormDocument;
use serde::{Deserialize, Serialize};

/// Direction of a single-step move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards index 0
    Up,
    /// Towards the last index
    Down,
}

/// ReorderFields action swapping the field at `index` with its neighbour
///
/// `None` when the move would leave the list (first field up, last field
/// down) or `index` is out of range.
#[must_use]
pub fn move_action(state: &FormDocument, index: usize, direction: Direction) -> Option<Action> {
    let neighbour = match direction {
        Direction::Up => index.checked_sub(1)?,
        Direction::Down => index.checked_add(1)?,
    };
    if index >= state.len() || neighbour >= state.len() {
        return None;
    }

    let mut order: Vec<_> = state.ids().collect();
    order.swap(index, neighbour);
    Some(Action::reorder_fields(order))
}

/// Move the field at `index` one step in `direction`
///
/// Boundary and out-of-range moves return `state` unchanged.
#[must_use]
pub fn move_field(state: FormDocument, index: usize, direction: Direction) -> FormDocument {
    match move_action(&state, index, direction) {
        Some(action) => apply(state, action),
        None => state,
    }
}
