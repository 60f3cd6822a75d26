//! Toast notification state.
//!
//! DESIGN
//! ======
//! Only one toast is visible at a time; a newer one replaces the older.
//! Each toast carries an id so the dismiss timer of a replaced toast cannot
//! close its successor.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use floorplan::engine::ToastLevel;

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 3000;

/// A visible notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub current: Option<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Show `message`, replacing any visible toast. Returns the new toast id.
    pub fn show(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.current = Some(Toast { id: self.next_id, level, message: message.into() });
        self.next_id
    }

    /// Hide the toast `id` if it is still the visible one.
    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|t| t.id == id) {
            self.current = None;
        }
    }
}

/// CSS class for a toast of the given level.
pub fn toast_class(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Success => "toast toast--success",
        ToastLevel::Error => "toast toast--error",
        ToastLevel::Info => "toast toast--info",
    }
}
