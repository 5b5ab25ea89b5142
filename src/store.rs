//! Key/value persistence for the theme preference.
//!
//! DESIGN
//! ======
//! Stores report failures as [`StorageError`] instead of swallowing them, so
//! the controller decides how to degrade. In the browser the store is
//! `localStorage`; [`MemoryStore`] backs tests and non-browser hosts.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StorageError {
    /// No storage is reachable (no window, or storage disabled by policy).
    #[error("storage unavailable")]
    Unavailable,

    /// Reading a key failed.
    #[error("storage read failed: {0}")]
    Read(String),

    /// Writing a key failed (quota exceeded, private mode, ...).
    #[error("storage write failed: {0}")]
    Write(String),
}

/// String key/value storage, as exposed by the host page.
pub trait PreferenceStore {
    /// Value stored under `key`, or `None` when the key is absent.
    ///
    /// # Errors
    ///
    /// [`StorageError::Unavailable`] when no storage is reachable,
    /// [`StorageError::Read`] when the lookup itself fails.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// [`StorageError::Unavailable`] when no storage is reachable,
    /// [`StorageError::Write`] when the write is refused.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store with switchable failure modes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    /// Make subsequent reads fail with [`StorageError::Unavailable`].
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    /// Make subsequent writes fail with [`StorageError::Write`].
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Current value for `key`, bypassing failure injection.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.get() {
            return Err(StorageError::Unavailable);
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Write("quota exceeded".into()));
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for std::rc::Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
