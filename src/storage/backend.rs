//! Key-value storage seam and its browser implementation.
//!
//! The stores are generic over [`StorageBackend`] so their contracts can be
//! exercised against an in-memory map in native tests; [`BrowserStorage`]
//! is the real thing, a thin layer over `window().local_storage()` that
//! no-ops safely outside the browser (the `csr` feature is off for native
//! test builds).

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use super::StorageError;

/// Synchronous string-valued key-value storage.
pub trait StorageBackend {
    /// The stored value, or `None` when the key is absent or storage is
    /// unreachable.
    fn read(&self, key: &str) -> Option<String>;

    /// Replace the value under `key`.
    ///
    /// # Errors
    ///
    /// [`StorageError::Unavailable`] when there is no storage to write to,
    /// [`StorageError::Write`] when the browser rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key` entirely. Best-effort; removing an absent key is fine.
    fn remove(&self, key: &str);
}

impl<S: StorageBackend> StorageBackend for &S {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// The browser's `localStorage` for this origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl StorageBackend for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage().and_then(|s| s.get_item(key).ok().flatten())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|err| StorageError::Write(format!("{err:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// In-memory backend for tests: a plain map plus a switch that makes every
/// write fail, standing in for a full or inaccessible store.
#[cfg(test)]
pub(crate) struct MemoryStorage {
    cells: std::cell::RefCell<std::collections::HashMap<String, String>>,
    reject_writes: std::cell::Cell<bool>,
}

#[cfg(test)]
impl MemoryStorage {
    pub(crate) fn new() -> Self {
        Self {
            cells: std::cell::RefCell::new(std::collections::HashMap::new()),
            reject_writes: std::cell::Cell::new(false),
        }
    }

    /// Backend pre-seeded with one raw value, e.g. a corrupt collection.
    pub(crate) fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .cells
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        storage
    }

    pub(crate) fn reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }
}

#[cfg(test)]
impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.cells.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.reject_writes.get() {
            return Err(StorageError::Write("quota exceeded".to_owned()));
        }
        self.cells
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.cells.borrow_mut().remove(key);
    }
}
