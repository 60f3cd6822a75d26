//! Zoom level, viewBox computation and screen/world/cell conversions.
//!
//! The floor plan is drawn in an `<svg>` whose `viewBox` shrinks around the
//! centre as the zoom grows. The browser maps the viewBox into the element
//! with `preserveAspectRatio="xMidYMid meet"`, so converting a pointer
//! position back into world pixels has to undo a uniform scale plus a
//! centring offset.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{CELL_SIZE_PX, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The visible world rectangle, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// Value for the SVG `viewBox` attribute.
    #[must_use]
    pub fn to_attr(&self) -> String {
        format!("{} {} {} {}", self.x, self.y, self.width, self.height)
    }
}

/// Zoom state. `zoom` is a scale factor (1.0 = whole grid visible).
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { zoom: 1.0 }
    }
}

impl Camera {
    /// Step the zoom up, clamped to the maximum.
    pub fn zoom_in(&mut self) {
        self.zoom = clamp_zoom(self.zoom + ZOOM_STEP);
    }

    /// Step the zoom down, clamped to the minimum.
    pub fn zoom_out(&mut self) {
        self.zoom = clamp_zoom(self.zoom - ZOOM_STEP);
    }

    #[must_use]
    pub fn view_box(&self, cols: u32, rows: u32) -> ViewBox {
        view_box(cols, rows, self.zoom)
    }
}

/// Clamp to the zoom range and snap to one decimal so repeated steps do not drift.
#[must_use]
pub fn clamp_zoom(zoom: f64) -> f64 {
    ((zoom * 10.0).round() / 10.0).clamp(ZOOM_MIN, ZOOM_MAX)
}

/// ViewBox for a `cols` × `rows` grid at `zoom`, centred on the grid.
#[must_use]
pub fn view_box(cols: u32, rows: u32, zoom: f64) -> ViewBox {
    let base_w = f64::from(cols) * CELL_SIZE_PX;
    let base_h = f64::from(rows) * CELL_SIZE_PX;
    let width = base_w / zoom;
    let height = base_h / zoom;
    ViewBox { x: (base_w - width) / 2.0, y: (base_h - height) / 2.0, width, height }
}

/// Convert an element-relative screen point into world pixels.
///
/// `viewport_w` / `viewport_h` are the rendered size of the `<svg>` element.
#[must_use]
pub fn screen_to_world(screen: Point, viewport_w: f64, viewport_h: f64, vb: ViewBox) -> Point {
    if viewport_w <= 0.0 || viewport_h <= 0.0 || vb.width <= 0.0 || vb.height <= 0.0 {
        return Point::new(vb.x, vb.y);
    }
    let scale = (viewport_w / vb.width).min(viewport_h / vb.height);
    let offset_x = (viewport_w - vb.width * scale) / 2.0;
    let offset_y = (viewport_h - vb.height * scale) / 2.0;
    Point { x: vb.x + (screen.x - offset_x) / scale, y: vb.y + (screen.y - offset_y) / scale }
}

/// Grid cell containing `world`, clamped into the grid.
#[must_use]
pub fn world_to_cell(world: Point, cols: u32, rows: u32) -> (u32, u32) {
    let clamp = |v: f64, n: u32| {
        let max = f64::from(n.saturating_sub(1));
        (v / CELL_SIZE_PX).floor().clamp(0.0, max) as u32
    };
    (clamp(world.x, cols), clamp(world.y, rows))
}
