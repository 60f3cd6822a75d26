//! `window.localStorage` backend for the layout document.
//!
//! SYSTEM CONTEXT
//! ==============
//! `floorplan::storage` owns the load/recover/save rules; this module only
//! supplies the browser `KeyValueStore`. Outside the browser every call
//! reports `StorageError::Unavailable`, so SSR and native tests fall back to
//! the default layout without touching any state.

#[cfg(test)]
#[path = "layout_storage_test.rs"]
mod layout_storage_test;

use floorplan::doc::Layout;
use floorplan::storage::{KeyValueStore, LoadOutcome, StorageError, load_layout, save_layout};

/// Key-value store backed by `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::trace!("localStorage unavailable, cannot read {key}");
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(key, value).map_err(js_error)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::trace!("localStorage unavailable, dropping {} bytes for {key}", value.len());
            Err(StorageError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(js_error)?
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn js_error(e: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Backend(e.as_string().unwrap_or_else(|| format!("{e:?}")))
}

/// Load the stored layout, falling back to defaults.
pub fn load() -> Layout {
    match load_layout(&BrowserStore) {
        LoadOutcome::Loaded(layout) => layout,
        LoadOutcome::Defaulted(layout) => {
            log::info!("no stored layout, starting from defaults");
            layout
        }
        LoadOutcome::Recovered { layout, error } => {
            log::warn!("stored layout discarded: {error}");
            layout
        }
    }
}

/// Write the whole layout document.
///
/// # Errors
///
/// Returns the store error when the browser rejects the write.
pub fn save(layout: &Layout) -> Result<(), StorageError> {
    save_layout(&BrowserStore, layout)
}
