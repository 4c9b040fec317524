//! formkit Store
//!
//! The single place where a [`FormDocument`](formkit_model::FormDocument)
//! changes.
//!
//! # Overview
//!
//! - [`Action`]: every supported mutation
//! - [`apply`] / [`try_apply`]: the pure reducer
//! - [`DocumentStore`]: owns the current document and dispatches actions
//! - [`move_field`] / [`move_action`]: adjacent swaps
//! - [`options`]: add/update/remove option helpers for radio and select
//!
//! # Example
//!
//! ```rust
//! use formkit_model::{FieldKind, FieldPatch};
//! use formkit_store::{Action, Direction, DocumentStore};
//!
//! let mut store = DocumentStore::new();
//! let add = Action::add_field(FieldKind::Text);
//! let id = add.created_field().unwrap();
//! store.dispatch(add);
//! store.dispatch(Action::update_field(id, FieldPatch::new().with_required(true)));
//!
//! // first field cannot move up
//! assert!(!store.move_field(0, Direction::Up));
//! assert!(store.state().field(id).unwrap().required);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod action;
mod movement;
pub mod options;
mod reducer;
mod store;

pub use action::Action;
pub use movement::{move_action, move_field, Direction};
pub use reducer::{apply, try_apply, Rejection};
pub use store::DocumentStore;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for driving the store
    pub use crate::{apply, move_field, Action, Direction, DocumentStore};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
