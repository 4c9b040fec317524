//! formkit Validation
//!
//! Checks a set of answers against the required fields of a form.
//!
//! # Example
//!
//! ```rust
//! use formkit_model::{AnswerSet, FieldKind, FieldPatch, FieldSpec};
//! use formkit_validation::validate;
//!
//! let name = FieldSpec::new(FieldKind::Text)
//!     .patched(&FieldPatch::new().with_required(true))
//!     .unwrap();
//!
//! let errors = validate(std::slice::from_ref(&name), &AnswerSet::new());
//! assert!(errors.contains(&name.id()));
//!
//! let answers = AnswerSet::new().with(name.id(), "Alice");
//! assert!(validate(&[name], &answers).is_empty());
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod engine;

pub use engine::{validate, ValidationEngine, ValidationErrors, DEFAULT_REQUIRED_MESSAGE};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
