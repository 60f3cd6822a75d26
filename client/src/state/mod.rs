//! Client state modules.
//!
//! DESIGN
//! ======
//! State lives in `RwSignal`s provided through Leptos context. The editor
//! signal is page-scoped; toasts and UI chrome are app-wide.

pub mod editor;
pub mod toast;
pub mod ui;
