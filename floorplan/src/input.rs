//! Input model: editor modes, tools, item references and the gesture state machine.
//!
//! `Mode` and `Tool` capture what a pointer event means at the time it
//! arrives. `InputState` is the gesture tracked between pointer-down and
//! pointer-up, carrying the context needed to compute cell deltas and commit
//! the final document mutation on release. `UiState` holds the selections
//! that outlive a single gesture.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::doc::{GridRect, ItemId};

/// Which screen mode the editor is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Layout editing (default).
    #[default]
    Builder,
    /// Booking: tables can be selected and booked, nothing moves.
    View,
}

/// Data URL cursor shown while deleting items or toggling chairs.
pub const REMOVE_CURSOR: &str = "url(\"data:image/svg+xml;utf8,%3Csvg xmlns='http://www.w3.org/2000/svg' width='24' height='24' viewBox='0 0 24 24'%3E%3Ccircle cx='12' cy='12' r='10' stroke='black' stroke-width='1.5' fill='white' fill-opacity='0.7'/%3E%3Cline x1='7' y1='12' x2='17' y2='12' stroke='black' stroke-width='1.5'/%3E%3C/svg%3E\") 12 12, pointer";

/// Which builder tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Select and drag tables and elements (default).
    #[default]
    Select,
    /// Drag out a straight wall segment.
    DrawWall,
    /// Click an item to delete it.
    DeleteItem,
}

impl Tool {
    /// CSS cursor for the canvas while this tool is active.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::Select => "default",
            Self::DrawWall => "crosshair",
            Self::DeleteItem => REMOVE_CURSOR,
        }
    }
}

/// Reference to a table or element by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemRef {
    Table(ItemId),
    Element(ItemId),
}

impl ItemRef {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Table(id) | Self::Element(id) => id,
        }
    }
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub mode: Mode,
    pub tool: Tool,
    /// Item selected for the properties panel in builder mode.
    pub selected: Option<ItemRef>,
    /// Table selected for booking in view mode.
    pub booking_selection: Option<ItemId>,
    /// Table whose chairs are being toggled, if any.
    pub chair_edit: Option<ItemId>,
}

impl UiState {
    #[must_use]
    pub fn is_builder(&self) -> bool {
        self.mode == Mode::Builder
    }

    /// Whether `id` is highlighted as selected in the current mode.
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        match self.mode {
            Mode::Builder => self.selected.as_ref().is_some_and(|s| s.id() == id),
            Mode::View => self.booking_selection.as_deref() == Some(id),
        }
    }

    #[must_use]
    pub fn is_chair_editing(&self, id: &str) -> bool {
        self.chair_edit.as_deref() == Some(id)
    }

    /// Drop any selection that points at `id`.
    pub fn forget(&mut self, id: &str) {
        if self.selected.as_ref().is_some_and(|s| s.id() == id) {
            self.selected = None;
        }
        if self.booking_selection.as_deref() == Some(id) {
            self.booking_selection = None;
        }
        if self.chair_edit.as_deref() == Some(id) {
            self.chair_edit = None;
        }
    }

    /// Clear every selection and leave chair-edit mode.
    pub fn clear_selections(&mut self) {
        self.selected = None;
        self.booking_selection = None;
        self.chair_edit = None;
    }
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is moving a table or non-wall element across the grid.
    DraggingItem {
        item: ItemRef,
        /// World-space pointer position at pointer-down.
        start_world: Point,
        /// Item cell position at pointer-down.
        orig_x: u32,
        orig_y: u32,
    },
    /// The user is dragging out a new wall.
    DrawingWall {
        /// Cell where the drag started.
        start_cell: (u32, u32),
        /// Wall that would be committed on release.
        preview: GridRect,
    },
}

/// Straight wall from `start` towards `end`: horizontal when the horizontal
/// run is at least the vertical one, vertical otherwise.
#[must_use]
pub fn wall_between(start: (u32, u32), end: (u32, u32)) -> GridRect {
    let (x1, y1) = start;
    let (x2, y2) = end;
    if x1.abs_diff(x2) >= y1.abs_diff(y2) {
        GridRect::new(x1.min(x2), y1, x1.abs_diff(x2) + 1, 1)
    } else {
        GridRect::new(x1, y1.min(y2), 1, y1.abs_diff(y2) + 1)
    }
}
