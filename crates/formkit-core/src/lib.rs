//! formkit Core - Form Controller
//!
//! Ties the pieces together behind a single owner:
//! - [`FormController`]: current document, saved forms, validation
//! - [`FormkitConfig`]: TOML configuration
//! - [`FormkitError`]: recoverable failures
//! - [`telemetry`]: subscriber setup for binaries
//!
//! # Example
//!
//! ```rust
//! use formkit_core::{FormController, FormkitConfig};
//! use formkit_model::{AnswerSet, FieldKind, FieldPatch};
//! use formkit_repository::MemoryBackend;
//! use formkit_store::Action;
//!
//! let mut ctl = FormController::open(FormkitConfig::new(), MemoryBackend::new()).unwrap();
//!
//! let add = Action::add_field(FieldKind::Text);
//! let id = add.created_field().unwrap();
//! ctl.dispatch(add);
//! ctl.dispatch(Action::update_field(id, FieldPatch::new().with_label("Name").with_required(true)));
//!
//! assert_eq!(ctl.validate(&AnswerSet::new()).len(), 1);
//! assert!(ctl.validate(&AnswerSet::new().with(id, "Alice")).is_empty());
//!
//! let saved = ctl.save().unwrap();
//! assert!(ctl.load(&saved));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod controller;
pub mod error;
pub mod telemetry;

pub use config::{ConfigError, FormkitConfig};
pub use controller::{FormController, Submission};
pub use error::FormkitError;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for renderers driving a controller
    pub use crate::{FormController, FormkitConfig, FormkitError, Submission};
    pub use formkit_model::prelude::*;
    pub use formkit_store::{Action, Direction};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
