#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Point;
use crate::doc::{GridRect, ItemId, Layout, Table, TableShape};
use crate::seating::{chair_pixel_size, chair_slots};

/// Radius of a chair's hit circle, as a fraction of the chair size.
const CHAIR_HIT_RATIO: f64 = 0.6;

/// What lies under a world point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    Chair { table_id: ItemId, index: u32 },
    Table(ItemId),
    Element(ItemId),
}

fn rect_contains(rect: GridRect, pt: Point) -> bool {
    let (x, y) = rect.pixel_origin();
    pt.x >= x && pt.x <= x + rect.pixel_width() && pt.y >= y && pt.y <= y + rect.pixel_height()
}

/// Whether `pt` lies on the table top.
#[must_use]
pub fn table_contains(table: &Table, pt: Point) -> bool {
    let rect = table.rect();
    match table.shape {
        TableShape::Circle => {
            let (cx, cy) = rect.pixel_center();
            let r = rect.pixel_width() / 2.0;
            (pt.x - cx).powi(2) + (pt.y - cy).powi(2) <= r * r
        }
        TableShape::Square | TableShape::Rectangle => rect_contains(rect, pt),
    }
}

/// Index of the chair slot of `table` under `pt`, hidden slots included.
#[must_use]
pub fn chair_at(table: &Table, pt: Point) -> Option<u32> {
    let (cx, cy) = table.rect().pixel_center();
    let reach = chair_pixel_size(table.grid_width, table.grid_height) * CHAIR_HIT_RATIO;
    chair_slots(table)
        .into_iter()
        .find(|slot| {
            let dx = pt.x - (cx + slot.x);
            let dy = pt.y - (cy + slot.y);
            dx * dx + dy * dy <= reach * reach
        })
        .map(|slot| slot.index)
}

/// Test which item (if any) is under `world_pt`, checking the chairs of the
/// chair-edit table first, then tables and elements topmost first.
#[must_use]
pub fn hit_test(world_pt: Point, layout: &Layout, chair_edit: Option<&str>) -> Option<Hit> {
    if let Some(table) = chair_edit.and_then(|id| layout.table(id)) {
        if let Some(index) = chair_at(table, world_pt) {
            return Some(Hit::Chair { table_id: table.id.clone(), index });
        }
    }

    if let Some(table) = layout.tables.iter().rev().find(|t| table_contains(t, world_pt)) {
        return Some(Hit::Table(table.id.clone()));
    }

    layout
        .elements
        .iter()
        .rev()
        .find(|e| rect_contains(e.rect(), world_pt))
        .map(|e| Hit::Element(e.id.clone()))
}
