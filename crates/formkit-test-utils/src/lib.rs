//! Testing utilities for formkit workspace
//!
//! Shared fixtures, a controllable storage backend, and controller helpers.

#![allow(missing_docs)]

use formkit_core::{FormController, FormkitConfig};
use formkit_model::{FieldId, FieldKind, FieldPatch, FieldSpec, FormDocument};
use formkit_repository::{MemoryBackend, StorageBackend, StorageError};
use formkit_store::Action;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Backend that can be switched into a failing state
///
/// While healthy it behaves like [`MemoryBackend`].
#[derive(Debug, Default)]
pub struct FlakyBackend {
    inner: MemoryBackend,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    writes: Mutex<usize>,
}

impl FlakyBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(key: &str, value: &str) -> Self {
        Self {
            inner: MemoryBackend::with_slot(key, value),
            ..Self::default()
        }
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Successful writes so far
    pub fn write_count(&self) -> usize {
        *self.writes.lock()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }
}

impl StorageBackend for FlakyBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(format!("read of {key} refused")));
        }
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(format!("write of {key} refused")));
        }
        self.inner.write(key, value)?;
        *self.writes.lock() += 1;
        Ok(())
    }
}

pub fn required_field(kind: FieldKind, label: &str) -> FieldSpec {
    FieldSpec::new(kind)
        .patched(&FieldPatch::new().with_label(label).with_required(true))
        .unwrap()
}

/// Contact form: required name, optional e-mail, required consent checkbox,
/// optional select
pub fn sample_document() -> FormDocument {
    FormDocument::with_title("Contact")
        .with_field(required_field(FieldKind::Text, "Name"))
        .with_field(FieldSpec::new(FieldKind::Email))
        .with_field(required_field(FieldKind::Checkbox, "I agree"))
        .with_field(FieldSpec::new(FieldKind::Select))
}

pub fn memory_controller() -> FormController<MemoryBackend> {
    FormController::open(FormkitConfig::new(), MemoryBackend::new()).unwrap()
}

pub fn flaky_controller() -> FormController<FlakyBackend> {
    FormController::open(FormkitConfig::new(), FlakyBackend::new()).unwrap()
}

/// Dispatch an AddField and return the new field's id
pub fn add_field<B: StorageBackend>(ctl: &mut FormController<B>, kind: FieldKind) -> FieldId {
    let action = Action::add_field(kind);
    let id = action.created_field().unwrap();
    assert!(ctl.dispatch(action), "add_field was ignored");
    id
}

/// Field ids of the current document, in order
pub fn field_order<B: StorageBackend>(ctl: &FormController<B>) -> Vec<FieldId> {
    ctl.current_document().ids().collect()
}
