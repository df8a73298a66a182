//! Storage backends
//!
//! `LocalStorage` talks to `window.localStorage`; `MemoryStorage` keeps
//! values in a map and backs the tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::CartError;

/// Key/value backend the cart is persisted to
pub trait CartStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), CartError>;
}

/// Browser `localStorage`. Missing storage (no window, disabled by the
/// user) reads as empty and rejects writes.
pub struct LocalStorage {
    inner: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn new() -> Self {
        let inner = web_sys::window().and_then(|win| win.local_storage().ok().flatten());
        Self { inner }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStorage for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.inner.as_ref()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), CartError> {
        let storage = self
            .inner
            .as_ref()
            .ok_or_else(|| CartError::Storage("localStorage is not available".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| CartError::Storage(format!("{:?}", e)))
    }
}

/// In-memory backend
#[derive(Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStorage {
    /// Backend that rejects every write
    pub fn read_only() -> Self {
        Self {
            values: RefCell::default(),
            read_only: true,
        }
    }
}

impl CartStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), CartError> {
        if self.read_only {
            return Err(CartError::Storage("read-only storage".to_string()));
        }
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
