//! Seat geometry: chair size, perimeter capacity and chair slot placement.
//!
//! All positions are in pixels relative to the table centre. Chairs are
//! sized from the shorter side of the table so small tables get small chairs,
//! and the visual maximum seat count is whatever fits around the perimeter at
//! that size.

#[cfg(test)]
#[path = "seating_test.rs"]
mod seating_test;

use std::f64::consts::PI;

use crate::consts::{CELL_SIZE_PX, CHAIR_SIZE_RATIO, CHAIR_SPACING_RATIO};
use crate::doc::{Table, TableShape};

/// Offset of a circle chair from the centre, as a fraction of the radius.
const CIRCLE_OFFSET_RATIO: f64 = 0.65;
/// Extra push of a circle chair, as a fraction of the chair size.
const CIRCLE_PUSH_RATIO: f64 = 0.4;
/// Distance a rectangle chair sits outside the table edge, as a fraction of the chair size.
const EDGE_PUSH_RATIO: f64 = 0.35;

/// One chair position around a table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChairSlot {
    pub index: u32,
    /// Offset from the table centre, in pixels.
    pub x: f64,
    pub y: f64,
    /// Rotation in degrees; 0 faces down onto the table from above.
    pub rotation: f64,
    pub visible: bool,
}

/// Chair size in pixels for a table of `grid_w` × `grid_h` cells.
#[must_use]
pub fn chair_pixel_size(grid_w: u32, grid_h: u32) -> f64 {
    let min_dim = f64::from(grid_w.min(grid_h)) * CELL_SIZE_PX;
    min_dim * CHAIR_SIZE_RATIO
}

/// Centre-to-centre distance between neighbouring chairs on a side.
#[must_use]
pub fn chair_spacing(grid_w: u32, grid_h: u32) -> f64 {
    chair_pixel_size(grid_w, grid_h) * CHAIR_SPACING_RATIO
}

/// Chairs that fit along the horizontal and vertical sides.
fn side_capacity(grid_w: u32, grid_h: u32) -> (u32, u32) {
    let spacing = chair_spacing(grid_w, grid_h);
    if spacing <= 0.0 {
        return (0, 0);
    }
    let pw = f64::from(grid_w) * CELL_SIZE_PX;
    let ph = f64::from(grid_h) * CELL_SIZE_PX;
    ((pw / spacing).floor() as u32, (ph / spacing).floor() as u32)
}

/// Maximum number of chairs that can be drawn around a table of this shape and size.
#[must_use]
pub fn visual_max_seats(shape: TableShape, grid_w: u32, grid_h: u32) -> u32 {
    let chair = chair_pixel_size(grid_w, grid_h);
    if grid_w.min(grid_h) == 0 || chair <= 1.0 {
        return 0;
    }

    match shape {
        TableShape::Circle => {
            let radius = f64::from(grid_w) * CELL_SIZE_PX / 2.0;
            let effective = radius - chair * 0.5;
            if effective <= chair * 0.2 {
                return 0;
            }
            let circumference = 2.0 * PI * effective;
            (circumference / (chair * CHAIR_SPACING_RATIO)).floor() as u32
        }
        TableShape::Square | TableShape::Rectangle => {
            let (h, v) = side_capacity(grid_w, grid_h);
            match (grid_w, grid_h) {
                (1, 1) => (h + v).min(2),
                (1, _) => v * 2,
                (_, 1) => h * 2,
                _ => h * 2 + v * 2,
            }
        }
    }
}

/// Visibility flag for slot `index`, treating a malformed vector as all-visible.
fn slot_visible(table: &Table, index: u32) -> bool {
    if !table.visibility_is_consistent() {
        return true;
    }
    table.chair_visibility.get(index as usize).copied().unwrap_or(true)
}

/// Positions of every placeable chair slot, hidden ones included.
#[must_use]
pub fn chair_slots(table: &Table) -> Vec<ChairSlot> {
    let chair = chair_pixel_size(table.grid_width, table.grid_height);
    match table.shape {
        TableShape::Circle => circle_slots(table, chair),
        TableShape::Square | TableShape::Rectangle => edge_slots(table, chair),
    }
}

fn circle_slots(table: &Table, chair: f64) -> Vec<ChairSlot> {
    let seats = table.seats;
    let radius = f64::from(table.grid_width) * CELL_SIZE_PX / 2.0;
    let offset = radius * CIRCLE_OFFSET_RATIO + chair * CIRCLE_PUSH_RATIO;
    (0..seats)
        .map(|i| {
            let frac = f64::from(i) / f64::from(seats);
            let angle = frac * 2.0 * PI;
            ChairSlot {
                index: i,
                x: angle.cos() * offset,
                y: angle.sin() * offset,
                rotation: frac * 360.0 + 90.0,
                visible: slot_visible(table, i),
            }
        })
        .collect()
}

#[derive(Clone, Copy)]
enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    fn rotation(self) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Bottom => 180.0,
            Self::Left => 270.0,
            Self::Right => 90.0,
        }
    }
}

/// Slots fill the top row, then bottom, left and right until `seats` are placed.
fn edge_slots(table: &Table, chair: f64) -> Vec<ChairSlot> {
    let (h, v) = side_capacity(table.grid_width, table.grid_height);
    let spacing = chair * CHAIR_SPACING_RATIO;
    let half_w = f64::from(table.grid_width) * CELL_SIZE_PX / 2.0;
    let half_h = f64::from(table.grid_height) * CELL_SIZE_PX / 2.0;
    let push = chair * EDGE_PUSH_RATIO;
    let along = |j: u32, count: u32| (f64::from(j) - (f64::from(count) - 1.0) / 2.0) * spacing;

    let sides = [(Side::Top, h), (Side::Bottom, h), (Side::Left, v), (Side::Right, v)];
    let mut slots = Vec::with_capacity(table.seats as usize);
    for (side, count) in sides {
        for j in 0..count {
            let index = slots.len() as u32;
            if index >= table.seats {
                return slots;
            }
            let (x, y) = match side {
                Side::Top => (along(j, count), -half_h - push),
                Side::Bottom => (along(j, count), half_h + push),
                Side::Left => (-half_w - push, along(j, count)),
                Side::Right => (half_w + push, along(j, count)),
            };
            slots.push(ChairSlot { index, x, y, rotation: side.rotation(), visible: slot_visible(table, index) });
        }
    }
    slots
}

/// Number of chairs shown as occupied seats on the table label.
#[must_use]
pub fn visible_seat_count(table: &Table) -> u32 {
    if !table.visibility_is_consistent() {
        return table.seats;
    }
    table.chair_visibility.iter().filter(|v| **v).count() as u32
}
