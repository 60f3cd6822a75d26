use super::*;
use floorplan::doc::{GridRect, TableShape};

fn table(label: Option<&str>, w: u32, h: u32, seats: u32) -> Table {
    Table::new(TableShape::Rectangle, GridRect::new(2, 2, w, h), seats, label.map(str::to_owned))
}

#[test]
fn stepped_seats_clamps_to_request_range() {
    assert_eq!(stepped_seats(4, 1), 5);
    assert_eq!(stepped_seats(1, -1), 1);
    assert_eq!(stepped_seats(64, 1), 64);
    assert_eq!(stepped_seats(0, -1), 1);
}

#[test]
fn stepped_size_stays_inside_room() {
    assert_eq!(stepped_size(2, 1, 10), 3);
    assert_eq!(stepped_size(3, 1, 3), 3);
    assert_eq!(stepped_size(1, -1, 10), 1);
    assert_eq!(stepped_size(1, 1, 0), 1);
}

#[test]
fn panel_title_uses_label() {
    assert_eq!(panel_title(&table(Some("R1"), 3, 2, 6)), "R1 Properties");
    assert_eq!(panel_title(&table(None, 3, 2, 6)), "Table Properties");
    assert_eq!(panel_title(&table(Some(""), 3, 2, 6)), "Table Properties");
}

#[test]
fn seat_hint_reports_geometric_max() {
    // 3×2 rectangle: 75×50 px, chair 11, spacing 13.2 -> 5 + 3 per side pair.
    assert_eq!(seat_hint(&table(None, 3, 2, 6)), "max 16");
}

#[test]
fn seat_hint_counts_hidden_chairs() {
    let mut t = table(None, 3, 2, 6);
    t.chair_visibility[0] = false;
    t.chair_visibility[3] = false;
    assert_eq!(seat_hint(&t), "4 shown, max 16");
}
