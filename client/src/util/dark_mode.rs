//! Dark mode initialization and toggle.
//!
//! Reads the visitor's preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back to
//! `localStorage` and updates that attribute.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "tablekit_dark";

/// Value of the `data-theme` attribute for a preference.
pub fn theme_name(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Read the dark mode preference from localStorage.
///
/// Returns `true` if the visitor previously enabled dark mode, or if the
/// system prefers dark mode and no preference is stored.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                return val == "true";
            }
        }

        match window.match_media("(prefers-color-scheme: dark)") {
            Ok(Some(mq)) => mq.matches(),
            _ => false,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            if let Err(e) = el.set_attribute("data-theme", theme_name(enabled)) {
                log::warn!("failed to set theme attribute: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::trace!("theme {} not applied outside the browser", theme_name(enabled));
    }
}

/// Toggle dark mode and persist the new preference to localStorage.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            if let Err(e) = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" }) {
                log::warn!("failed to store theme preference: {e:?}");
            }
        }
    }
    next
}
