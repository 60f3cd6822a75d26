//! Editor state machine for the floor-plan builder and booking view.
//!
//! SYSTEM CONTEXT
//! ==============
//! `EditorCore` owns the layout document, the camera, the UI selections and
//! the in-flight gesture. The browser host feeds it pointer positions and
//! button presses and carries out the `Action`s it returns: showing toasts,
//! writing the layout to storage, re-rendering and updating the cursor.
//!
//! DESIGN
//! ======
//! Every mutating operation returns `Vec<Action>` instead of touching the
//! DOM or storage directly, so the whole editor runs in native unit tests.
//! Persistence is requested with `Action::Persist`; the host reports the
//! outcome back through `persist_feedback`.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::camera::{Camera, Point, ViewBox, screen_to_world, world_to_cell};
use crate::consts::{CELL_SIZE_PX, MAX_GRID_DIM, MAX_SEATS_REQUEST, MIN_GRID_DIM};
use crate::doc::{Element, GridRect, Layout, Table, TableShape, is_boundary_wall, new_item_id};
use crate::hit::{Hit, hit_test};
use crate::input::{InputState, ItemRef, Mode, REMOVE_CURSOR, Tool, UiState, wall_between};
use crate::seating::visual_max_seats;
use crate::storage::StorageError;

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

/// Actions returned from editor operations for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Notify { level: ToastLevel, message: String },
    /// Write the layout to storage; `announce` adds a success toast.
    Persist { announce: bool },
    SetCursor(String),
    RenderNeeded,
}

impl Action {
    fn success(message: impl Into<String>) -> Self {
        Self::Notify { level: ToastLevel::Success, message: message.into() }
    }

    fn error(message: impl Into<String>) -> Self {
        Self::Notify { level: ToastLevel::Error, message: message.into() }
    }

    fn info(message: impl Into<String>) -> Self {
        Self::Notify { level: ToastLevel::Info, message: message.into() }
    }

    const fn persist() -> Self {
        Self::Persist { announce: false }
    }
}

/// Rejected workspace dimensions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Invalid dimensions. Cols/Rows must be whole numbers.")]
    NotANumber,
    #[error("Invalid dimensions. Cols/Rows must be between 5 and 200.")]
    OutOfRange { cols: i64, rows: i64 },
}

/// Parse the workspace inputs. Both values must lie in the inclusive grid range.
///
/// # Errors
///
/// Returns `GridError::NotANumber` when either input is not an integer and
/// `GridError::OutOfRange` when either value is outside the allowed range.
pub fn parse_grid_dimensions(cols_text: &str, rows_text: &str) -> Result<(u32, u32), GridError> {
    let parse = |s: &str| s.trim().parse::<i64>().map_err(|_| GridError::NotANumber);
    let cols = parse(cols_text)?;
    let rows = parse(rows_text)?;
    let range = i64::from(MIN_GRID_DIM)..=i64::from(MAX_GRID_DIM);
    if !range.contains(&cols) || !range.contains(&rows) {
        return Err(GridError::OutOfRange { cols, rows });
    }
    let narrow = |v: i64| u32::try_from(v).map_err(|_| GridError::OutOfRange { cols, rows });
    Ok((narrow(cols)?, narrow(rows)?))
}

/// Toast to show after the host tried to persist the layout.
#[must_use]
pub fn persist_feedback(announce: bool, result: &Result<(), StorageError>) -> Option<Action> {
    match result {
        Ok(()) if announce => Some(Action::success("Layout saved successfully!")),
        Ok(()) => None,
        Err(e) => Some(Action::error(format!("Error saving: {e}"))),
    }
}

/// `orig + delta` clamped to `[0, limit]`.
fn offset_clamped(orig: u32, delta: i64, limit: u32) -> u32 {
    let moved = (i64::from(orig) + delta).clamp(0, i64::from(limit));
    u32::try_from(moved).unwrap_or(limit)
}

/// Core editor state: all logic that doesn't depend on the DOM.
pub struct EditorCore {
    pub layout: Layout,
    pub camera: Camera,
    pub ui: UiState,
    pub input: InputState,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for EditorCore {
    fn default() -> Self {
        Self::new(Layout::default())
    }
}

impl EditorCore {
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            camera: Camera::default(),
            ui: UiState::default(),
            input: InputState::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
        }
    }

    /// Editor locked in view mode, used by the booking page.
    #[must_use]
    pub fn booking(layout: Layout) -> Self {
        let mut core = Self::new(layout);
        core.ui.mode = Mode::View;
        core
    }

    // --- Data inputs ---

    /// Replace the whole document, dropping selections and any gesture.
    pub fn load_layout(&mut self, layout: Layout) {
        self.layout = layout;
        self.ui.clear_selections();
        self.input = InputState::Idle;
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    // --- Queries ---

    #[must_use]
    pub fn view_box(&self) -> ViewBox {
        self.camera.view_box(self.layout.grid_cols, self.layout.grid_rows)
    }

    /// Convert an element-relative screen point to world pixels.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        screen_to_world(screen, self.viewport_width, self.viewport_height, self.view_box())
    }

    /// CSS cursor for the current mode, tool and chair-edit state.
    #[must_use]
    pub fn cursor(&self) -> &'static str {
        match self.ui.mode {
            Mode::View => "pointer",
            Mode::Builder if self.ui.chair_edit.is_some() => REMOVE_CURSOR,
            Mode::Builder => self.ui.tool.cursor(),
        }
    }

    /// Table shown in the builder properties panel.
    #[must_use]
    pub fn selected_table(&self) -> Option<&Table> {
        match &self.ui.selected {
            Some(ItemRef::Table(id)) => self.layout.table(id),
            _ => None,
        }
    }

    /// Table picked for booking in view mode.
    #[must_use]
    pub fn booking_table(&self) -> Option<&Table> {
        self.ui.booking_selection.as_deref().and_then(|id| self.layout.table(id))
    }

    /// Wall preview while a wall is being drawn.
    #[must_use]
    pub fn wall_preview(&self) -> Option<GridRect> {
        match &self.input {
            InputState::DrawingWall { preview, .. } => Some(*preview),
            _ => None,
        }
    }

    fn view_changed(&self) -> Vec<Action> {
        vec![Action::SetCursor(self.cursor().to_owned()), Action::RenderNeeded]
    }

    // --- Mode and tool ---

    pub fn set_mode(&mut self, mode: Mode) -> Vec<Action> {
        if self.ui.mode == mode {
            return Vec::new();
        }
        self.ui.mode = mode;
        self.input = InputState::Idle;
        match mode {
            Mode::View => {
                self.ui.selected = None;
                self.ui.chair_edit = None;
            }
            Mode::Builder => self.ui.booking_selection = None,
        }
        self.view_changed()
    }

    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        self.ui.tool = tool;
        self.ui.chair_edit = None;
        self.input = InputState::Idle;
        self.view_changed()
    }

    // --- Selection and booking ---

    fn select(&mut self, item: ItemRef) -> Vec<Action> {
        self.ui.selected = Some(item);
        vec![Action::RenderNeeded]
    }

    /// Click on an item in view mode. A free table toggles the booking
    /// selection; a booked table clears it. Builder-mode clicks arrive as
    /// pointer gestures instead.
    pub fn click_item(&mut self, item: &ItemRef) -> Vec<Action> {
        if self.ui.is_builder() {
            return Vec::new();
        }
        let ItemRef::Table(id) = item else {
            return Vec::new();
        };
        let Some(table) = self.layout.table(id) else {
            return Vec::new();
        };
        if table.is_booked || self.ui.booking_selection.as_deref() == Some(id.as_str()) {
            self.ui.booking_selection = None;
        } else {
            self.ui.booking_selection = Some(id.clone());
        }
        vec![Action::RenderNeeded]
    }

    /// Book the table selected in view mode.
    pub fn book_selected(&mut self) -> Vec<Action> {
        if self.ui.is_builder() {
            return Vec::new();
        }
        let selected = self.ui.booking_selection.clone();
        let Some(table) = selected.as_deref().and_then(|id| self.layout.table_mut(id)) else {
            return vec![Action::error("Table already booked or not selectable.")];
        };
        if table.is_booked {
            return vec![Action::error("Table already booked or not selectable.")];
        }
        table.is_booked = true;
        let message = format!("Table ({}) booked!", table.display_name());
        self.ui.booking_selection = None;
        vec![Action::success(message), Action::persist(), Action::RenderNeeded]
    }

    // --- Table editing ---

    /// Add a default-sized table centred on the grid and select it.
    pub fn add_table(&mut self, shape: TableShape) -> Vec<Action> {
        if !self.ui.is_builder() {
            return Vec::new();
        }
        self.ui.chair_edit = None;
        let (w, h, seats) = shape.default_footprint();
        let x = (self.layout.grid_cols.saturating_sub(w) / 2).max(1);
        let y = (self.layout.grid_rows.saturating_sub(h) / 2).max(1);
        let label = format!("T{}", self.layout.tables.len() + 1);
        let table = Table::new(shape, GridRect::new(x, y, w, h), seats, Some(label));
        let id = table.id.clone();
        self.layout.tables.push(table);
        self.ui.selected = Some(ItemRef::Table(id));
        vec![Action::persist(), Action::RenderNeeded]
    }

    /// Set the seat count, capped at what fits around the table.
    pub fn update_table_seats(&mut self, id: &str, requested: u32) -> Vec<Action> {
        let Some(table) = self.layout.table_mut(id) else {
            return Vec::new();
        };
        let requested = requested.clamp(1, MAX_SEATS_REQUEST);
        let max = visual_max_seats(table.shape, table.grid_width, table.grid_height);
        let mut actions = Vec::new();
        table.seats = if requested > max {
            actions.push(Action::error(format!("Max {max} seats for this table size. Adjusted.")));
            max
        } else {
            requested
        };
        table.reset_visibility();
        actions.extend([Action::persist(), Action::RenderNeeded]);
        actions
    }

    /// Resize a table inside the grid, trimming seats that no longer fit.
    pub fn update_table_size(&mut self, id: &str, width: u32, height: u32) -> Vec<Action> {
        let cols = self.layout.grid_cols;
        let rows = self.layout.grid_rows;
        let Some(table) = self.layout.table_mut(id) else {
            return Vec::new();
        };
        table.grid_width = width.clamp(1, cols.saturating_sub(table.grid_x).max(1));
        table.grid_height = height.clamp(1, rows.saturating_sub(table.grid_y).max(1));

        let max = visual_max_seats(table.shape, table.grid_width, table.grid_height);
        let mut actions = Vec::new();
        if table.seats > max {
            table.seats = max;
            table.reset_visibility();
            actions.push(Action::error(format!("Resized. Max seats adjusted to {max}.")));
        } else {
            table.fit_visibility();
        }
        actions.extend([Action::persist(), Action::RenderNeeded]);
        actions
    }

    /// Rename a table. A blank label clears it.
    pub fn update_table_label(&mut self, id: &str, label: &str) -> Vec<Action> {
        let Some(table) = self.layout.table_mut(id) else {
            return Vec::new();
        };
        let label = label.trim();
        table.label = (!label.is_empty()).then(|| label.to_owned());
        vec![Action::persist(), Action::RenderNeeded]
    }

    /// Copy a table one cell down-right and select the copy.
    pub fn duplicate_table(&mut self, id: &str) -> Vec<Action> {
        if !self.ui.is_builder() {
            return Vec::new();
        }
        self.ui.chair_edit = None;
        let Some(source) = self.layout.table(id) else {
            return Vec::new();
        };
        let base = match source.label.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => "Table",
        };
        let message = format!("Table \"{}\" duplicated.", source.display_name());
        let mut copy = source.clone();
        copy.id = new_item_id();
        copy.label = Some(format!("{base}-copy"));
        copy.grid_x = (source.grid_x + 1).min(self.layout.grid_cols.saturating_sub(source.grid_width));
        copy.grid_y = (source.grid_y + 1).min(self.layout.grid_rows.saturating_sub(source.grid_height));
        copy.is_booked = false;
        copy.fit_visibility();

        self.ui.selected = Some(ItemRef::Table(copy.id.clone()));
        self.layout.tables.push(copy);
        vec![Action::success(message), Action::persist(), Action::RenderNeeded]
    }

    // --- Chair editing ---

    /// Enter or leave chair-edit mode for a table.
    pub fn toggle_chair_edit(&mut self, id: &str) -> Vec<Action> {
        if !self.ui.is_builder() || self.layout.table(id).is_none() {
            return Vec::new();
        }
        if self.ui.is_chair_editing(id) {
            self.ui.chair_edit = None;
        } else {
            self.ui.chair_edit = Some(id.to_owned());
            self.ui.selected = Some(ItemRef::Table(id.to_owned()));
        }
        self.input = InputState::Idle;
        self.view_changed()
    }

    /// Flip the visibility of one chair of the table in chair-edit mode.
    pub fn toggle_chair(&mut self, table_id: &str, index: u32) -> Vec<Action> {
        if !self.ui.is_builder() || !self.ui.is_chair_editing(table_id) {
            return Vec::new();
        }
        let Some(table) = self.layout.table_mut(table_id) else {
            return Vec::new();
        };
        table.fit_visibility();
        let Some(flag) = table.chair_visibility.get_mut(index as usize) else {
            log::warn!("chair index {index} out of bounds for table {table_id} with {} seats", table.seats);
            return Vec::new();
        };
        *flag = !*flag;
        vec![Action::persist(), Action::RenderNeeded]
    }

    // --- Deletion ---

    pub fn delete_item(&mut self, item: &ItemRef) -> Vec<Action> {
        if !self.ui.is_builder() || self.ui.chair_edit.is_some() {
            return Vec::new();
        }
        let message = match item {
            ItemRef::Table(id) => match self.layout.remove_table(id) {
                Some(_) => "Table deleted.".to_owned(),
                None => return Vec::new(),
            },
            ItemRef::Element(id) => {
                if is_boundary_wall(id) {
                    return vec![Action::error("Boundary walls cannot be deleted.")];
                }
                match self.layout.remove_element(id) {
                    Some(el) => format!("{} deleted.", el.kind.as_str()),
                    None => return Vec::new(),
                }
            }
        };
        self.ui.forget(item.id());
        vec![Action::persist(), Action::success(message), Action::RenderNeeded]
    }

    // --- Workspace ---

    /// Validate new grid dimensions and reset the layout to the defaults for that size.
    pub fn apply_grid_dimensions(&mut self, cols_text: &str, rows_text: &str) -> Vec<Action> {
        let (cols, rows) = match parse_grid_dimensions(cols_text, rows_text) {
            Ok(dims) => dims,
            Err(e) => return vec![Action::error(e.to_string())],
        };
        if cols == self.layout.grid_cols && rows == self.layout.grid_rows {
            return vec![Action::info("Dimensions are already set to these values.")];
        }
        self.load_layout(Layout::with_defaults(cols, rows));
        vec![
            Action::persist(),
            Action::success(format!("Workspace updated to {cols}x{rows}. Layout reset.")),
            Action::RenderNeeded,
        ]
    }

    /// Explicit save from the sidebar button.
    #[must_use]
    pub fn save(&self) -> Vec<Action> {
        vec![Action::Persist { announce: true }]
    }

    pub fn zoom_in(&mut self) -> Vec<Action> {
        self.camera.zoom_in();
        vec![Action::RenderNeeded]
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        self.camera.zoom_out();
        vec![Action::RenderNeeded]
    }

    // --- Pointer gestures ---

    /// Pointer pressed at a world position.
    pub fn pointer_down(&mut self, world: Point) -> Vec<Action> {
        let hit = hit_test(world, &self.layout, self.ui.chair_edit.as_deref());
        match self.ui.mode {
            Mode::View => match hit {
                Some(Hit::Table(id)) => self.click_item(&ItemRef::Table(id)),
                _ => Vec::new(),
            },
            Mode::Builder => self.builder_pointer_down(world, hit),
        }
    }

    fn builder_pointer_down(&mut self, world: Point, hit: Option<Hit>) -> Vec<Action> {
        if let Some(editing) = self.ui.chair_edit.clone() {
            return match hit {
                Some(Hit::Chair { table_id, index }) => self.toggle_chair(&table_id, index),
                Some(Hit::Table(id)) if id == editing => Vec::new(),
                _ => {
                    self.ui.chair_edit = None;
                    self.view_changed()
                }
            };
        }

        match (self.ui.tool, hit) {
            (Tool::DrawWall, _) => {
                let cell = world_to_cell(world, self.layout.grid_cols, self.layout.grid_rows);
                self.input = InputState::DrawingWall { start_cell: cell, preview: wall_between(cell, cell) };
                self.ui.selected = None;
                vec![Action::RenderNeeded]
            }
            (Tool::DeleteItem, Some(Hit::Table(id))) => self.delete_item(&ItemRef::Table(id)),
            (Tool::DeleteItem, Some(Hit::Element(id))) => self.delete_item(&ItemRef::Element(id)),
            (Tool::Select, Some(Hit::Table(id))) => {
                let item = ItemRef::Table(id);
                self.start_drag(&item, world);
                self.select(item)
            }
            (Tool::Select, Some(Hit::Element(id))) => {
                let item = ItemRef::Element(id);
                self.start_drag(&item, world);
                self.select(item)
            }
            (_, None) => {
                self.ui.selected = None;
                vec![Action::RenderNeeded]
            }
            (_, Some(Hit::Chair { .. })) => Vec::new(),
        }
    }

    /// Begin dragging a table or element. Walls are selectable but stay put.
    fn start_drag(&mut self, item: &ItemRef, world: Point) {
        let origin = match item {
            ItemRef::Table(id) => self.layout.table(id).map(|t| (t.grid_x, t.grid_y)),
            ItemRef::Element(id) => {
                self.layout.element(id).filter(|e| !e.kind.is_wall()).map(|e| (e.grid_x, e.grid_y))
            }
        };
        if let Some((orig_x, orig_y)) = origin {
            self.input = InputState::DraggingItem { item: item.clone(), start_world: world, orig_x, orig_y };
        }
    }

    /// Pointer moved to a world position.
    pub fn pointer_move(&mut self, world: Point) -> Vec<Action> {
        match &self.input {
            InputState::Idle => Vec::new(),
            InputState::DraggingItem { item, start_world, orig_x, orig_y } => {
                let dx = ((world.x - start_world.x) / CELL_SIZE_PX).round() as i64;
                let dy = ((world.y - start_world.y) / CELL_SIZE_PX).round() as i64;
                let (item, orig_x, orig_y) = (item.clone(), *orig_x, *orig_y);
                self.move_item(&item, orig_x, orig_y, dx, dy)
            }
            InputState::DrawingWall { start_cell, preview } => {
                let start_cell = *start_cell;
                let end = world_to_cell(world, self.layout.grid_cols, self.layout.grid_rows);
                let next = wall_between(start_cell, end);
                if next == *preview {
                    return Vec::new();
                }
                self.input = InputState::DrawingWall { start_cell, preview: next };
                vec![Action::RenderNeeded]
            }
        }
    }

    fn move_item(&mut self, item: &ItemRef, orig_x: u32, orig_y: u32, dx: i64, dy: i64) -> Vec<Action> {
        let cols = self.layout.grid_cols;
        let rows = self.layout.grid_rows;
        let position = match item {
            ItemRef::Table(id) => {
                self.layout.table_mut(id).map(|t| (&mut t.grid_x, &mut t.grid_y, t.grid_width, t.grid_height))
            }
            ItemRef::Element(id) => {
                self.layout.element_mut(id).map(|e| (&mut e.grid_x, &mut e.grid_y, e.grid_width, e.grid_height))
            }
        };
        let Some((x, y, w, h)) = position else {
            return Vec::new();
        };
        let new_x = offset_clamped(orig_x, dx, cols.saturating_sub(w));
        let new_y = offset_clamped(orig_y, dy, rows.saturating_sub(h));
        if (*x, *y) == (new_x, new_y) {
            return Vec::new();
        }
        *x = new_x;
        *y = new_y;
        vec![Action::RenderNeeded]
    }

    /// Pointer released: commit the drag or the drawn wall.
    pub fn pointer_up(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::DraggingItem { .. } => vec![Action::persist()],
            InputState::DrawingWall { preview, .. } => {
                self.layout.elements.push(Element::wall(new_item_id(), preview));
                vec![Action::persist(), Action::RenderNeeded]
            }
        }
    }

    /// Pointer left the canvas; treated as a release.
    pub fn pointer_leave(&mut self) -> Vec<Action> {
        self.pointer_up()
    }
}
