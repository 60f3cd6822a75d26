//! Persistence seam between the editor and browser-local storage.
//!
//! The layout is kept as one JSON document under a single key. `KeyValueStore`
//! abstracts the backing store so the load/recover/save rules can run against
//! `MemoryStore` in tests and against `window.localStorage` in the browser.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::consts::LAYOUT_STORAGE_KEY;
use crate::doc::Layout;

/// Failures talking to the key-value store or decoding its contents.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("{0}")]
    Backend(String),
    #[error("stored layout is not valid: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Minimal string key-value store.
pub trait KeyValueStore {
    /// Read the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// How a layout was obtained at screen mount.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Read and decoded from the store.
    Loaded(Layout),
    /// Nothing was stored; defaults were used.
    Defaulted(Layout),
    /// The stored blob was unreadable; defaults were used.
    Recovered { layout: Layout, error: StorageError },
}

impl LoadOutcome {
    #[must_use]
    pub fn into_layout(self) -> Layout {
        match self {
            Self::Loaded(layout) | Self::Defaulted(layout) | Self::Recovered { layout, .. } => layout,
        }
    }
}

/// Load the layout, falling back to the defaults when nothing usable is
/// stored. Defaults are written back so the next load finds them.
pub fn load_layout(store: &dyn KeyValueStore) -> LoadOutcome {
    let stored = match store.get(LAYOUT_STORAGE_KEY) {
        Ok(stored) => stored,
        Err(error) => return LoadOutcome::Recovered { layout: Layout::default(), error },
    };
    let Some(text) = stored else {
        let layout = Layout::default();
        write_back(store, &layout);
        return LoadOutcome::Defaulted(layout);
    };
    match serde_json::from_str::<Layout>(&text) {
        Ok(layout) => LoadOutcome::Loaded(layout),
        Err(e) => {
            log::warn!("discarding stored layout: {e}");
            let layout = Layout::default();
            write_back(store, &layout);
            LoadOutcome::Recovered { layout, error: StorageError::Corrupt(e) }
        }
    }
}

fn write_back(store: &dyn KeyValueStore, layout: &Layout) {
    if let Err(e) = save_layout(store, layout) {
        log::warn!("failed to write default layout: {e}");
    }
}

/// Serialize and store the whole layout.
///
/// # Errors
///
/// Returns an error when the layout cannot be encoded or the store rejects the write.
pub fn save_layout(store: &dyn KeyValueStore, layout: &Layout) -> Result<(), StorageError> {
    let text = serde_json::to_string(layout)?;
    store.set(LAYOUT_STORAGE_KEY, &text)
}
