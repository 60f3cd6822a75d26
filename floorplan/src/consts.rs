//! Shared numeric constants for the floorplan crate.

// ── Grid ────────────────────────────────────────────────────────

/// Edge length of one grid cell in SVG user units (CSS pixels at zoom 1).
pub const CELL_SIZE_PX: f64 = 25.0;

/// Column count of a fresh workspace.
pub const INITIAL_GRID_COLS: u32 = 50;

/// Row count of a fresh workspace.
pub const INITIAL_GRID_ROWS: u32 = 30;

/// Smallest accepted column/row count when resizing the workspace.
pub const MIN_GRID_DIM: u32 = 5;

/// Largest accepted column/row count when resizing the workspace.
pub const MAX_GRID_DIM: u32 = 200;

// ── Seats ───────────────────────────────────────────────────────

/// Upper bound the properties panel applies before geometry is consulted.
pub const MAX_SEATS_REQUEST: u32 = 64;

/// Chair edge length as a fraction of the table's shorter side.
pub const CHAIR_SIZE_RATIO: f64 = 0.22;

/// Centre-to-centre chair spacing as a multiple of the chair size.
pub const CHAIR_SPACING_RATIO: f64 = 1.2;

// ── Zoom ────────────────────────────────────────────────────────

pub const ZOOM_MIN: f64 = 0.2;
pub const ZOOM_MAX: f64 = 3.0;
pub const ZOOM_STEP: f64 = 0.1;

// ── Persistence ─────────────────────────────────────────────────

/// Local-storage key of the layout document. The suffix is bumped whenever
/// the document shape changes incompatibly.
pub const LAYOUT_STORAGE_KEY: &str = "restaurantLayout_v11";

/// Ids of the four perimeter walls, which can never be deleted.
pub const BOUNDARY_WALL_IDS: [&str; 4] = ["wall-n", "wall-s", "wall-w", "wall-e"];
