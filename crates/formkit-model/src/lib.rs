//! formkit Model
//!
//! Data shapes shared by every formkit crate.
//!
//! # Core Concepts
//!
//! - [`FieldSpec`]: one typed form field
//! - [`FieldKind`]: the field type, and every per-type capability
//!   (render hint, answer parsing, answer presence)
//! - [`FieldPatch`]: partial attribute update
//! - [`FormDocument`]: title plus ordered fields
//! - [`AnswerSet`]: answers collected from a filled-in form
//!
//! # Example
//!
//! ```rust
//! use formkit_model::{FieldKind, FieldPatch, FieldSpec, FormDocument};
//!
//! let name = FieldSpec::new(FieldKind::Text)
//!     .patched(&FieldPatch::new().with_label("Name").with_required(true))
//!     .unwrap();
//! let doc = FormDocument::new().with_field(name);
//!
//! assert_eq!(doc.title, "Untitled Form");
//! assert!(doc.validate().is_ok());
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod answer;
mod document;
mod field;
mod kind;

pub use answer::{AnswerError, AnswerSet, AnswerValue};
pub use document::{DocumentError, FormDocument, DEFAULT_TITLE};
pub use field::{FieldError, FieldId, FieldOption, FieldPatch, FieldSpec};
pub use kind::{FieldKind, RenderHint, UnknownKind, DATE_FORMAT};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with form documents
    pub use crate::{
        AnswerSet, AnswerValue, FieldId, FieldKind, FieldOption, FieldPatch, FieldSpec,
        FormDocument,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
