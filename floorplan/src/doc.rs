//! Document model: tables, decor elements and the layout that owns them.
//!
//! This module defines the persisted layout document (`Layout`), its two
//! record kinds (`Table`, `Element`), the default restaurant produced for a
//! fresh or resized workspace, and the normalization applied when a document
//! is read back from storage.
//!
//! The wire shape is the camelCase JSON blob kept in browser-local storage.
//! Missing collections fall back to the defaults and malformed seat
//! visibility vectors are rebuilt, so a document written by an older build
//! still loads.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{BOUNDARY_WALL_IDS, CELL_SIZE_PX, INITIAL_GRID_COLS, INITIAL_GRID_ROWS};

/// Identifier of a table or element. Boundary walls use fixed ids.
pub type ItemId = String;

/// Generate a fresh short item id.
#[must_use]
pub fn new_item_id() -> ItemId {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(12);
    id
}

/// Whether `id` names one of the four perimeter walls.
#[must_use]
pub fn is_boundary_wall(id: &str) -> bool {
    BOUNDARY_WALL_IDS.contains(&id)
}

/// Axis-aligned rectangle in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl GridRect {
    #[must_use]
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Pixel width of the rectangle.
    #[must_use]
    pub fn pixel_width(&self) -> f64 {
        f64::from(self.width) * CELL_SIZE_PX
    }

    /// Pixel height of the rectangle.
    #[must_use]
    pub fn pixel_height(&self) -> f64 {
        f64::from(self.height) * CELL_SIZE_PX
    }

    /// Pixel position of the top-left corner.
    #[must_use]
    pub fn pixel_origin(&self) -> (f64, f64) {
        (f64::from(self.x) * CELL_SIZE_PX, f64::from(self.y) * CELL_SIZE_PX)
    }

    /// Pixel position of the centre.
    #[must_use]
    pub fn pixel_center(&self) -> (f64, f64) {
        let (x, y) = self.pixel_origin();
        (x + self.pixel_width() / 2.0, y + self.pixel_height() / 2.0)
    }

    /// Whether the rectangle fits entirely inside a `cols` × `rows` grid.
    #[must_use]
    pub fn fits_within(&self, cols: u32, rows: u32) -> bool {
        self.x + self.width <= cols && self.y + self.height <= rows
    }
}

// =============================================================
// Tables
// =============================================================

/// Outline of a table top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableShape {
    Circle,
    Square,
    Rectangle,
}

impl TableShape {
    /// Footprint and seat count of a freshly added table of this shape.
    #[must_use]
    pub fn default_footprint(self) -> (u32, u32, u32) {
        match self {
            Self::Circle | Self::Square => (2, 2, 4),
            Self::Rectangle => (3, 2, 6),
        }
    }
}

/// Surface finish of a table top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStyle {
    #[default]
    Wood,
    Modern,
    Classic,
}

/// A bookable table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: ItemId,
    pub shape: TableShape,
    pub grid_x: u32,
    pub grid_y: u32,
    pub grid_width: u32,
    pub grid_height: u32,
    /// Number of chair slots around the table.
    #[serde(default)]
    pub seats: u32,
    /// Per-slot visibility. Length equals `seats` once normalized.
    #[serde(default)]
    pub chair_visibility: Vec<bool>,
    #[serde(default)]
    pub is_booked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_style: Option<TableStyle>,
}

impl Table {
    /// Build a table with every chair visible.
    #[must_use]
    pub fn new(shape: TableShape, rect: GridRect, seats: u32, label: Option<String>) -> Self {
        Self {
            id: new_item_id(),
            shape,
            grid_x: rect.x,
            grid_y: rect.y,
            grid_width: rect.width,
            grid_height: rect.height,
            seats,
            chair_visibility: vec![true; seats as usize],
            is_booked: false,
            label,
            table_style: Some(TableStyle::Wood),
        }
    }

    #[must_use]
    pub fn rect(&self) -> GridRect {
        GridRect::new(self.grid_x, self.grid_y, self.grid_width, self.grid_height)
    }

    /// Label if set, otherwise the id. Used in toasts and the booking panel.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => &self.id,
        }
    }

    #[must_use]
    pub fn style(&self) -> TableStyle {
        self.table_style.unwrap_or_default()
    }

    /// Whether the visibility vector has exactly one flag per seat.
    #[must_use]
    pub fn visibility_is_consistent(&self) -> bool {
        self.chair_visibility.len() == self.seats as usize
    }

    /// Resize the visibility vector to `seats`, keeping the existing prefix
    /// and marking new slots visible.
    pub fn fit_visibility(&mut self) {
        self.chair_visibility.resize(self.seats as usize, true);
    }

    /// Replace the visibility vector with an all-visible one.
    pub fn reset_visibility(&mut self) {
        self.chair_visibility = vec![true; self.seats as usize];
    }
}

// =============================================================
// Elements
// =============================================================

/// Kind of a non-bookable floor-plan element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Wall,
    Bar,
    Kitchen,
    Door,
    Window,
    Decoration,
    Wc,
}

impl ElementKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wall => "wall",
            Self::Bar => "bar",
            Self::Kitchen => "kitchen",
            Self::Door => "door",
            Self::Window => "window",
            Self::Decoration => "decoration",
            Self::Wc => "wc",
        }
    }

    #[must_use]
    pub fn is_wall(self) -> bool {
        self == Self::Wall
    }

    /// Walls and decorations are drawn flat; everything else gets depth.
    #[must_use]
    pub fn is_flat(self) -> bool {
        matches!(self, Self::Wall | Self::Decoration)
    }
}

/// Fill texture of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Texture {
    Wood,
    Tile,
    Metal,
}

/// A wall, counter, door or other decor record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: ItemId,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub grid_x: u32,
    pub grid_y: u32,
    pub grid_width: u32,
    pub grid_height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
    /// Corner radius as a fraction of the shorter pixel side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rx: Option<f64>,
    /// Drop-shadow depth in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<Texture>,
}

const WALL_FILL: &str = "rgb(180 180 180)";
const WALL_STROKE: &str = "rgb(150 150 150)";

impl Element {
    /// Plain element with no decoration attributes.
    #[must_use]
    pub fn bare(id: impl Into<ItemId>, kind: ElementKind, rect: GridRect) -> Self {
        Self {
            id: id.into(),
            kind,
            grid_x: rect.x,
            grid_y: rect.y,
            grid_width: rect.width,
            grid_height: rect.height,
            label: None,
            color: None,
            stroke_color: None,
            label_color: None,
            icon_name: None,
            icon_color: None,
            rx: None,
            depth: None,
            texture: None,
        }
    }

    /// A grey wall segment.
    #[must_use]
    pub fn wall(id: impl Into<ItemId>, rect: GridRect) -> Self {
        Self {
            color: Some(WALL_FILL.to_owned()),
            stroke_color: Some(WALL_STROKE.to_owned()),
            ..Self::bare(id, ElementKind::Wall, rect)
        }
    }

    #[must_use]
    pub fn rect(&self) -> GridRect {
        GridRect::new(self.grid_x, self.grid_y, self.grid_width, self.grid_height)
    }

    /// Corner radius in pixels.
    #[must_use]
    pub fn corner_radius_px(&self) -> f64 {
        let rect = self.rect();
        self.rx.unwrap_or(0.0) * rect.pixel_width().min(rect.pixel_height())
    }
}

// =============================================================
// Layout
// =============================================================

/// The whole floor plan: grid size, tables and elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredLayout")]
pub struct Layout {
    pub grid_cols: u32,
    pub grid_rows: u32,
    pub tables: Vec<Table>,
    pub elements: Vec<Element>,
}

/// Lenient wire form accepted on load.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredLayout {
    #[serde(default)]
    grid_cols: Option<u32>,
    #[serde(default)]
    grid_rows: Option<u32>,
    #[serde(default)]
    tables: Option<Vec<Table>>,
    #[serde(default)]
    elements: Option<Vec<Element>>,
}

impl From<StoredLayout> for Layout {
    fn from(raw: StoredLayout) -> Self {
        let cols = raw.grid_cols.filter(|c| *c > 0).unwrap_or(INITIAL_GRID_COLS);
        let rows = raw.grid_rows.filter(|r| *r > 0).unwrap_or(INITIAL_GRID_ROWS);
        let mut layout = Self {
            grid_cols: cols,
            grid_rows: rows,
            tables: raw.tables.unwrap_or_else(default_tables),
            elements: raw.elements.unwrap_or_else(|| default_elements(cols, rows)),
        };
        layout.normalize();
        layout
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::with_defaults(INITIAL_GRID_COLS, INITIAL_GRID_ROWS)
    }
}

impl Layout {
    /// Default restaurant for a `cols` × `rows` grid. Default tables that do
    /// not fit are dropped.
    #[must_use]
    pub fn with_defaults(cols: u32, rows: u32) -> Self {
        let tables = default_tables()
            .into_iter()
            .filter(|t| t.rect().fits_within(cols, rows))
            .collect();
        Self { grid_cols: cols, grid_rows: rows, tables, elements: default_elements(cols, rows) }
    }

    /// Rebuild every inconsistent chair visibility vector as all-visible.
    pub fn normalize(&mut self) {
        for table in &mut self.tables {
            if !table.visibility_is_consistent() {
                table.reset_visibility();
            }
        }
    }

    #[must_use]
    pub fn table(&self, id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    pub fn table_mut(&mut self, id: &str) -> Option<&mut Table> {
        self.tables.iter_mut().find(|t| t.id == id)
    }

    #[must_use]
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Remove a table by id, returning it if it was present.
    pub fn remove_table(&mut self, id: &str) -> Option<Table> {
        let idx = self.tables.iter().position(|t| t.id == id)?;
        Some(self.tables.remove(idx))
    }

    /// Remove an element by id, returning it if it was present.
    pub fn remove_element(&mut self, id: &str) -> Option<Element> {
        let idx = self.elements.iter().position(|e| e.id == id)?;
        Some(self.elements.remove(idx))
    }
}

/// `floor(n * ratio)` for small grid dimensions.
fn scaled(n: u32, ratio: f64) -> u32 {
    (f64::from(n) * ratio).floor() as u32
}

/// Perimeter walls, entrance, bar and kitchen sized for the grid.
#[must_use]
pub fn default_elements(cols: u32, rows: u32) -> Vec<Element> {
    let last_col = cols.saturating_sub(1);
    let last_row = rows.saturating_sub(1);
    vec![
        Element::wall("wall-n", GridRect::new(0, 0, cols, 1)),
        Element::wall("wall-s", GridRect::new(0, last_row, cols, 1)),
        Element::wall("wall-w", GridRect::new(0, 0, 1, rows)),
        Element::wall("wall-e", GridRect::new(last_col, 0, 1, rows)),
        Element {
            label: Some("ENTRANCE".to_owned()),
            color: Some("rgb(139, 92, 60)".to_owned()),
            stroke_color: Some("rgb(101, 67, 33)".to_owned()),
            label_color: Some("rgb(255, 240, 150)".to_owned()),
            icon_name: Some("DoorOpen".to_owned()),
            icon_color: Some("rgb(255, 240, 150)".to_owned()),
            rx: Some(0.05),
            depth: Some(0.1 * CELL_SIZE_PX),
            ..Element::bare(
                "door-main",
                ElementKind::Door,
                GridRect::new(scaled(cols, 0.45), rows.saturating_sub(2), scaled(cols, 0.12).max(3), 2),
            )
        },
        Element {
            label: Some("Main Bar".to_owned()),
            color: Some("rgb(104 50 30)".to_owned()),
            stroke_color: Some("rgb(77 42 10)".to_owned()),
            label_color: Some("rgb(254 252 232)".to_owned()),
            icon_name: Some("Coffee".to_owned()),
            icon_color: Some("rgb(253 224 71)".to_owned()),
            rx: Some(0.1),
            depth: Some(0.8 * CELL_SIZE_PX),
            texture: Some(Texture::Wood),
            ..Element::bare(
                "bar",
                ElementKind::Bar,
                GridRect::new(
                    scaled(cols, 0.65),
                    scaled(rows, 0.4),
                    scaled(cols, 0.25).max(4),
                    scaled(rows, 0.12).max(2),
                ),
            )
        },
        Element {
            label: Some("Kitchen Area".to_owned()),
            color: Some("rgb(225 230 235)".to_owned()),
            stroke_color: Some("rgb(170 170 170)".to_owned()),
            label_color: Some("rgb(55 65 81)".to_owned()),
            icon_name: Some("ChefHat".to_owned()),
            icon_color: Some("rgb(55 65 81)".to_owned()),
            rx: Some(0.05),
            depth: Some(0.2 * CELL_SIZE_PX),
            texture: Some(Texture::Tile),
            ..Element::bare(
                "kitchen",
                ElementKind::Kitchen,
                GridRect::new(
                    scaled(cols, 0.03),
                    scaled(rows, 0.03),
                    scaled(cols, 0.30).max(5),
                    scaled(rows, 0.25).max(4),
                ),
            )
        },
    ]
}

/// The three demo tables placed on a fresh workspace.
#[must_use]
pub fn default_tables() -> Vec<Table> {
    let mut booked = Table::new(TableShape::Square, GridRect::new(25, 5, 2, 2), 4, Some("S1".to_owned()));
    booked.is_booked = true;
    booked.table_style = Some(TableStyle::Modern);

    let mut long = Table::new(TableShape::Rectangle, GridRect::new(10, 18, 3, 2), 6, Some("R1".to_owned()));
    long.table_style = Some(TableStyle::Classic);

    vec![
        Table::new(TableShape::Circle, GridRect::new(15, 10, 2, 2), 4, Some("C1".to_owned())),
        booked,
        long,
    ]
}
