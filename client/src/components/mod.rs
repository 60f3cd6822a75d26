//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the editor chrome and the floor plan while reading and
//! writing shared state from Leptos context providers.

pub mod booking_panel;
pub mod floor_canvas;
pub mod properties_panel;
pub mod sidebar;
pub mod theme_toggle;
pub mod toast;
pub mod zoom_bar;
