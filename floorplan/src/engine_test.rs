#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::{ElementKind, default_elements};
use crate::seating::visual_max_seats;

// =============================================================
// Helpers
// =============================================================

fn make_table(id: &str, shape: TableShape, rect: GridRect, seats: u32, booked: bool) -> Table {
    let mut t = Table::new(shape, rect, seats, Some(id.to_uppercase()));
    t.id = id.to_owned();
    t.is_booked = booked;
    t
}

/// 20x12 grid with default elements, a free square table "f" at (4,4) and a
/// booked circle table "b" at (10,4).
fn fixture() -> EditorCore {
    let layout = Layout {
        grid_cols: 20,
        grid_rows: 12,
        tables: vec![
            make_table("f", TableShape::Square, GridRect::new(4, 4, 2, 2), 4, false),
            make_table("b", TableShape::Circle, GridRect::new(10, 4, 2, 2), 4, true),
        ],
        elements: default_elements(20, 12),
    };
    EditorCore::new(layout)
}

fn view_fixture() -> EditorCore {
    let mut core = fixture();
    core.set_mode(Mode::View);
    core
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn table_ref(id: &str) -> ItemRef {
    ItemRef::Table(id.to_owned())
}

fn element_ref(id: &str) -> ItemRef {
    ItemRef::Element(id.to_owned())
}

fn toasts(actions: &[Action]) -> Vec<(ToastLevel, String)> {
    actions
        .iter()
        .filter_map(|a| match a {
            Action::Notify { level, message } => Some((*level, message.clone())),
            _ => None,
        })
        .collect()
}

fn has_persist(actions: &[Action]) -> bool {
    actions.iter().any(|a| matches!(a, Action::Persist { .. }))
}

fn table<'a>(core: &'a EditorCore, id: &str) -> &'a Table {
    core.layout.table(id).unwrap()
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_core_starts_in_builder_mode() {
    let core = fixture();
    assert!(core.ui.is_builder());
    assert_eq!(core.ui.tool, Tool::Select);
    assert!(matches!(core.input, InputState::Idle));
    assert_eq!(core.cursor(), "default");
}

#[test]
fn booking_core_starts_in_view_mode() {
    let core = EditorCore::booking(Layout::default());
    assert_eq!(core.ui.mode, Mode::View);
    assert_eq!(core.cursor(), "pointer");
}

#[test]
fn load_layout_clears_selections() {
    let mut core = fixture();
    select_f(&mut core);
    core.load_layout(Layout::default());
    assert!(core.ui.selected.is_none());
    assert_eq!(core.layout.grid_cols, 50);
}

// =============================================================
// Mode and tool
// =============================================================

#[test]
fn set_mode_same_mode_is_noop() {
    let mut core = fixture();
    assert!(core.set_mode(Mode::Builder).is_empty());
}

#[test]
fn leaving_builder_exits_chair_edit_and_clears_selection() {
    let mut core = fixture();
    core.toggle_chair_edit("f");
    assert!(core.ui.is_chair_editing("f"));
    let actions = core.set_mode(Mode::View);
    assert!(core.ui.chair_edit.is_none());
    assert!(core.ui.selected.is_none());
    assert!(actions.contains(&Action::SetCursor("pointer".to_owned())));
    assert!(actions.contains(&Action::RenderNeeded));
}

#[test]
fn entering_builder_clears_booking_selection() {
    let mut core = view_fixture();
    core.click_item(&table_ref("f"));
    core.set_mode(Mode::Builder);
    assert!(core.ui.booking_selection.is_none());
}

#[test]
fn set_tool_exits_chair_edit_and_updates_cursor() {
    let mut core = fixture();
    core.toggle_chair_edit("f");
    let actions = core.set_tool(Tool::DrawWall);
    assert!(core.ui.chair_edit.is_none());
    assert_eq!(actions[0], Action::SetCursor("crosshair".to_owned()));
}

#[test]
fn chair_edit_uses_remove_cursor() {
    let mut core = fixture();
    let actions = core.toggle_chair_edit("f");
    assert_eq!(core.cursor(), REMOVE_CURSOR);
    assert_eq!(actions[0], Action::SetCursor(REMOVE_CURSOR.to_owned()));
}

// =============================================================
// View mode selection
// =============================================================

#[test]
fn selecting_free_table_in_view_mode() {
    let mut core = view_fixture();
    core.click_item(&table_ref("f"));
    assert_eq!(core.ui.booking_selection.as_deref(), Some("f"));
    assert!(core.ui.is_selected("f"));
}

#[test]
fn selecting_same_free_table_again_toggles_off() {
    let mut core = view_fixture();
    core.click_item(&table_ref("f"));
    core.click_item(&table_ref("f"));
    assert!(core.ui.booking_selection.is_none());
}

#[test]
fn selecting_other_free_table_replaces_selection() {
    let mut core = view_fixture();
    core.layout.tables.push(make_table("g", TableShape::Square, GridRect::new(4, 8, 2, 2), 4, false));
    core.click_item(&table_ref("f"));
    core.click_item(&table_ref("g"));
    assert_eq!(core.ui.booking_selection.as_deref(), Some("g"));
    assert!(!core.ui.is_selected("f"));
}

#[test]
fn clicking_booked_table_clears_selection() {
    let mut core = view_fixture();
    core.click_item(&table_ref("f"));
    core.click_item(&table_ref("b"));
    assert!(core.ui.booking_selection.is_none());
}

#[test]
fn clicking_element_in_view_mode_does_nothing() {
    let mut core = view_fixture();
    core.click_item(&table_ref("f"));
    assert!(core.click_item(&element_ref("bar")).is_empty());
    assert_eq!(core.ui.booking_selection.as_deref(), Some("f"));
}

#[test]
fn booking_table_query() {
    let mut core = view_fixture();
    assert!(core.booking_table().is_none());
    core.click_item(&table_ref("f"));
    assert_eq!(core.booking_table().unwrap().id, "f");
}

// =============================================================
// Booking
// =============================================================

#[test]
fn booking_selected_table_sets_flag_and_clears_selection() {
    let mut core = view_fixture();
    core.click_item(&table_ref("f"));
    let actions = core.book_selected();
    assert!(table(&core, "f").is_booked);
    assert!(core.ui.booking_selection.is_none());
    assert_eq!(toasts(&actions), [(ToastLevel::Success, "Table (F) booked!".to_owned())]);
    assert!(has_persist(&actions));
}

#[test]
fn booking_without_selection_is_an_error() {
    let mut core = view_fixture();
    let actions = core.book_selected();
    assert_eq!(toasts(&actions), [(ToastLevel::Error, "Table already booked or not selectable.".to_owned())]);
    assert!(!has_persist(&actions));
}

#[test]
fn booking_an_already_booked_table_is_an_error() {
    let mut core = view_fixture();
    core.ui.booking_selection = Some("b".to_owned());
    let actions = core.book_selected();
    assert_eq!(toasts(&actions)[0].0, ToastLevel::Error);
}

#[test]
fn booking_in_builder_mode_is_ignored() {
    let mut core = fixture();
    core.ui.booking_selection = Some("f".to_owned());
    assert!(core.book_selected().is_empty());
    assert!(!table(&core, "f").is_booked);
}

#[test]
fn booked_table_cannot_be_selected_after_booking() {
    let mut core = view_fixture();
    core.click_item(&table_ref("f"));
    core.book_selected();
    core.click_item(&table_ref("f"));
    assert!(core.ui.booking_selection.is_none());
}

// =============================================================
// Builder selection
// =============================================================

/// Press and release over table "f" with the select tool.
fn select_f(core: &mut EditorCore) {
    core.pointer_down(pt(125.0, 125.0));
    core.pointer_up();
}

#[test]
fn builder_pointer_selects_wall_without_dragging() {
    let mut core = fixture();
    core.pointer_down(pt(200.0, 10.0));
    assert_eq!(core.ui.selected, Some(element_ref("wall-n")));
    assert!(core.selected_table().is_none());
    assert!(matches!(core.input, InputState::Idle));
    select_f(&mut core);
    assert_eq!(core.selected_table().unwrap().id, "f");
}

#[test]
fn click_item_is_ignored_in_builder_mode() {
    let mut core = fixture();
    assert!(core.click_item(&table_ref("f")).is_empty());
    assert!(core.ui.selected.is_none());
    assert!(core.ui.booking_selection.is_none());
}

#[test]
fn pointer_on_other_table_exits_chair_edit_keeping_selection() {
    let mut core = fixture();
    core.toggle_chair_edit("f");
    core.pointer_down(pt(275.0, 125.0));
    assert!(core.ui.chair_edit.is_none());
    assert_eq!(core.ui.selected, Some(table_ref("f")));
    assert!(matches!(core.input, InputState::Idle));
}

// =============================================================
// add_table
// =============================================================

#[test]
fn add_table_centres_and_selects() {
    let mut core = fixture();
    let actions = core.add_table(TableShape::Circle);
    let added = core.layout.tables.last().unwrap();
    assert_eq!(added.rect(), GridRect::new(9, 5, 2, 2));
    assert_eq!(added.seats, 4);
    assert_eq!(added.label.as_deref(), Some("T3"));
    assert_eq!(added.chair_visibility, vec![true; 4]);
    assert!(!added.is_booked);
    assert_eq!(core.ui.selected, Some(ItemRef::Table(added.id.clone())));
    assert!(has_persist(&actions));
}

#[test]
fn add_rectangle_table_has_six_seats() {
    let mut core = fixture();
    core.add_table(TableShape::Rectangle);
    let added = core.layout.tables.last().unwrap();
    assert_eq!((added.grid_width, added.grid_height, added.seats), (3, 2, 6));
    assert_eq!(added.grid_x, 8);
}

#[test]
fn add_table_on_tiny_grid_keeps_one_cell_margin() {
    let mut core = EditorCore::new(Layout::with_defaults(5, 5));
    core.add_table(TableShape::Rectangle);
    let added = core.layout.tables.last().unwrap();
    assert_eq!((added.grid_x, added.grid_y), (1, 1));
}

#[test]
fn add_table_ignored_in_view_mode() {
    let mut core = view_fixture();
    assert!(core.add_table(TableShape::Square).is_empty());
    assert_eq!(core.layout.tables.len(), 2);
}

// =============================================================
// update_table_seats
// =============================================================

#[test]
fn update_seats_within_max() {
    let mut core = fixture();
    let actions = core.update_table_seats("f", 8);
    assert_eq!(table(&core, "f").seats, 8);
    assert_eq!(table(&core, "f").chair_visibility, vec![true; 8]);
    assert!(toasts(&actions).is_empty());
    assert!(has_persist(&actions));
}

#[test]
fn update_seats_above_max_is_adjusted() {
    let mut core = fixture();
    let actions = core.update_table_seats("f", 30);
    assert_eq!(table(&core, "f").seats, 12);
    assert_eq!(
        toasts(&actions),
        [(ToastLevel::Error, "Max 12 seats for this table size. Adjusted.".to_owned())]
    );
}

#[test]
fn update_seats_request_clamped_to_at_least_one() {
    let mut core = fixture();
    core.update_table_seats("f", 0);
    assert_eq!(table(&core, "f").seats, 1);
}

#[test]
fn update_seats_resets_visibility() {
    let mut core = fixture();
    core.layout.table_mut("f").unwrap().chair_visibility = vec![false, false, true, true];
    core.update_table_seats("f", 4);
    assert_eq!(table(&core, "f").chair_visibility, vec![true; 4]);
}

#[test]
fn update_seats_unknown_table() {
    let mut core = fixture();
    assert!(core.update_table_seats("nope", 3).is_empty());
}

// =============================================================
// update_table_size
// =============================================================

#[test]
fn shrinking_table_trims_seats() {
    let mut core = fixture();
    let actions = core.update_table_size("f", 1, 1);
    let t = table(&core, "f");
    assert_eq!((t.grid_width, t.grid_height), (1, 1));
    assert_eq!(t.seats, 2);
    assert_eq!(t.chair_visibility, vec![true, true]);
    assert_eq!(toasts(&actions), [(ToastLevel::Error, "Resized. Max seats adjusted to 2.".to_owned())]);
}

#[test]
fn growing_table_preserves_visibility() {
    let mut core = fixture();
    core.layout.table_mut("f").unwrap().chair_visibility = vec![false, true, false, true];
    let actions = core.update_table_size("f", 3, 3);
    let t = table(&core, "f");
    assert_eq!(t.seats, 4);
    assert_eq!(t.chair_visibility, vec![false, true, false, true]);
    assert!(toasts(&actions).is_empty());
}

#[test]
fn resize_repairs_malformed_visibility() {
    let mut core = fixture();
    core.layout.table_mut("f").unwrap().chair_visibility = vec![false];
    core.update_table_size("f", 3, 2);
    assert_eq!(table(&core, "f").chair_visibility, vec![false, true, true, true]);
}

#[test]
fn resize_clamps_to_grid() {
    let mut core = fixture();
    core.update_table_size("f", 100, 100);
    let t = table(&core, "f");
    assert_eq!((t.grid_width, t.grid_height), (16, 8));
    core.update_table_size("f", 0, 0);
    let t = table(&core, "f");
    assert_eq!((t.grid_width, t.grid_height), (1, 1));
}

#[test]
fn resize_never_leaves_seats_above_max() {
    let mut core = fixture();
    for shape in [TableShape::Circle, TableShape::Square, TableShape::Rectangle] {
        core.layout.table_mut("f").unwrap().shape = shape;
        for w in 1..=6 {
            for h in 1..=6 {
                core.update_table_seats("f", 64);
                core.update_table_size("f", w, h);
                let t = table(&core, "f");
                assert!(t.seats <= visual_max_seats(shape, t.grid_width, t.grid_height));
                assert_eq!(t.chair_visibility.len(), t.seats as usize);
            }
        }
    }
}

// =============================================================
// update_table_label / duplicate_table
// =============================================================

#[test]
fn update_label_trims() {
    let mut core = fixture();
    core.update_table_label("f", "  Window  ");
    assert_eq!(table(&core, "f").label.as_deref(), Some("Window"));
}

#[test]
fn update_label_blank_clears() {
    let mut core = fixture();
    core.update_table_label("f", "   ");
    assert!(table(&core, "f").label.is_none());
}

#[test]
fn duplicate_table_offsets_and_selects() {
    let mut core = fixture();
    core.layout.table_mut("f").unwrap().chair_visibility = vec![true, false, true, true];
    let actions = core.duplicate_table("f");
    let copy = core.layout.tables.last().unwrap();
    assert_ne!(copy.id, "f");
    assert_eq!(copy.label.as_deref(), Some("F-copy"));
    assert_eq!((copy.grid_x, copy.grid_y), (5, 5));
    assert_eq!(copy.chair_visibility, vec![true, false, true, true]);
    assert_eq!(core.ui.selected, Some(ItemRef::Table(copy.id.clone())));
    assert_eq!(toasts(&actions), [(ToastLevel::Success, "Table \"F\" duplicated.".to_owned())]);
}

#[test]
fn duplicate_booked_table_is_free() {
    let mut core = fixture();
    core.duplicate_table("b");
    assert!(!core.layout.tables.last().unwrap().is_booked);
}

#[test]
fn duplicate_unlabeled_table() {
    let mut core = fixture();
    core.layout.table_mut("f").unwrap().label = None;
    core.duplicate_table("f");
    assert_eq!(core.layout.tables.last().unwrap().label.as_deref(), Some("Table-copy"));
}

#[test]
fn duplicate_at_grid_edge_stays_inside() {
    let mut core = fixture();
    {
        let t = core.layout.table_mut("f").unwrap();
        t.grid_x = 18;
        t.grid_y = 10;
    }
    core.duplicate_table("f");
    let copy = core.layout.tables.last().unwrap();
    assert_eq!((copy.grid_x, copy.grid_y), (18, 10));
}

// =============================================================
// Chair editing
// =============================================================

#[test]
fn toggle_chair_edit_enters_and_leaves() {
    let mut core = fixture();
    core.toggle_chair_edit("f");
    assert!(core.ui.is_chair_editing("f"));
    assert_eq!(core.ui.selected, Some(table_ref("f")));
    core.toggle_chair_edit("f");
    assert!(core.ui.chair_edit.is_none());
}

#[test]
fn toggle_chair_edit_ignored_in_view_mode() {
    let mut core = view_fixture();
    assert!(core.toggle_chair_edit("f").is_empty());
    assert!(core.ui.chair_edit.is_none());
}

#[test]
fn toggle_chair_flips_visibility() {
    let mut core = fixture();
    core.toggle_chair_edit("f");
    let actions = core.toggle_chair("f", 2);
    assert_eq!(table(&core, "f").chair_visibility, vec![true, true, false, true]);
    assert!(has_persist(&actions));
    core.toggle_chair("f", 2);
    assert_eq!(table(&core, "f").chair_visibility, vec![true; 4]);
}

#[test]
fn toggle_chair_rejects_out_of_range_index() {
    let mut core = fixture();
    core.toggle_chair_edit("f");
    assert!(core.toggle_chair("f", 4).is_empty());
    assert_eq!(table(&core, "f").chair_visibility, vec![true; 4]);
}

#[test]
fn toggle_chair_requires_chair_edit_on_that_table() {
    let mut core = fixture();
    assert!(core.toggle_chair("f", 0).is_empty());
    core.toggle_chair_edit("b");
    assert!(core.toggle_chair("f", 0).is_empty());
}

#[test]
fn toggle_chair_resizes_short_vector_first() {
    let mut core = fixture();
    core.layout.table_mut("f").unwrap().chair_visibility = vec![false];
    core.toggle_chair_edit("f");
    core.toggle_chair("f", 3);
    assert_eq!(table(&core, "f").chair_visibility, vec![false, true, true, false]);
}

// =============================================================
// delete_item
// =============================================================

#[test]
fn boundary_walls_cannot_be_deleted() {
    let mut core = fixture();
    for id in ["wall-n", "wall-s", "wall-w", "wall-e"] {
        let actions = core.delete_item(&element_ref(id));
        assert_eq!(toasts(&actions), [(ToastLevel::Error, "Boundary walls cannot be deleted.".to_owned())]);
        assert!(!has_persist(&actions));
        assert!(core.layout.element(id).is_some());
    }
}

#[test]
fn delete_table_announces_and_clears_selection() {
    let mut core = fixture();
    select_f(&mut core);
    let actions = core.delete_item(&table_ref("f"));
    assert!(core.layout.table("f").is_none());
    assert!(core.ui.selected.is_none());
    assert_eq!(toasts(&actions), [(ToastLevel::Success, "Table deleted.".to_owned())]);
    assert!(has_persist(&actions));
}

#[test]
fn delete_element_names_its_type() {
    let mut core = fixture();
    let actions = core.delete_item(&element_ref("bar"));
    assert!(core.layout.element("bar").is_none());
    assert_eq!(toasts(&actions), [(ToastLevel::Success, "bar deleted.".to_owned())]);
}

#[test]
fn delete_drawn_wall_is_allowed() {
    let mut core = fixture();
    core.layout.elements.push(Element::wall("inner", GridRect::new(3, 3, 4, 1)));
    core.delete_item(&element_ref("inner"));
    assert!(core.layout.element("inner").is_none());
}

#[test]
fn delete_blocked_while_chair_editing() {
    let mut core = fixture();
    core.toggle_chair_edit("f");
    assert!(core.delete_item(&table_ref("b")).is_empty());
    assert!(core.layout.table("b").is_some());
}

#[test]
fn delete_missing_item_is_noop() {
    let mut core = fixture();
    assert!(core.delete_item(&table_ref("ghost")).is_empty());
    assert!(core.delete_item(&element_ref("ghost")).is_empty());
}

// =============================================================
// apply_grid_dimensions
// =============================================================

#[test]
fn parse_grid_dimensions_bounds_are_inclusive() {
    assert_eq!(parse_grid_dimensions("5", "200"), Ok((5, 200)));
    assert_eq!(parse_grid_dimensions(" 40 ", "25"), Ok((40, 25)));
    assert_eq!(parse_grid_dimensions("4", "20"), Err(GridError::OutOfRange { cols: 4, rows: 20 }));
    assert_eq!(parse_grid_dimensions("20", "201"), Err(GridError::OutOfRange { cols: 20, rows: 201 }));
    assert_eq!(parse_grid_dimensions("-3", "20"), Err(GridError::OutOfRange { cols: -3, rows: 20 }));
    assert_eq!(parse_grid_dimensions("abc", "20"), Err(GridError::NotANumber));
    assert_eq!(parse_grid_dimensions("20", ""), Err(GridError::NotANumber));
}

#[test]
fn grid_out_of_range_rejected_layout_unchanged() {
    let mut core = fixture();
    let before = core.layout.clone();
    for (c, r) in [("4", "20"), ("20", "201"), ("x", "20"), ("0", "0")] {
        let actions = core.apply_grid_dimensions(c, r);
        assert_eq!(toasts(&actions)[0].0, ToastLevel::Error);
        assert!(!has_persist(&actions));
        assert_eq!(core.layout, before);
    }
}

#[test]
fn grid_out_of_range_message() {
    let mut core = fixture();
    let actions = core.apply_grid_dimensions("300", "20");
    assert_eq!(toasts(&actions)[0].1, "Invalid dimensions. Cols/Rows must be between 5 and 200.");
}

#[test]
fn grid_same_dimensions_is_info() {
    let mut core = fixture();
    let actions = core.apply_grid_dimensions("20", "12");
    assert_eq!(toasts(&actions), [(ToastLevel::Info, "Dimensions are already set to these values.".to_owned())]);
    assert_eq!(core.layout.tables.len(), 2);
}

#[test]
fn grid_change_resets_layout() {
    let mut core = fixture();
    select_f(&mut core);
    let actions = core.apply_grid_dimensions("60", "40");
    assert_eq!((core.layout.grid_cols, core.layout.grid_rows), (60, 40));
    assert_eq!(core.layout.element("wall-e").unwrap().grid_x, 59);
    assert_eq!(core.layout.tables.len(), 3);
    assert!(core.ui.selected.is_none());
    assert!(has_persist(&actions));
    assert_eq!(toasts(&actions), [(ToastLevel::Success, "Workspace updated to 60x40. Layout reset.".to_owned())]);
}

#[test]
fn grid_minimum_size_is_accepted() {
    let mut core = fixture();
    core.apply_grid_dimensions("5", "5");
    assert_eq!((core.layout.grid_cols, core.layout.grid_rows), (5, 5));
    assert!(core.layout.tables.is_empty());
}

// =============================================================
// Save / zoom / persist feedback
// =============================================================

#[test]
fn save_requests_announced_persist() {
    assert_eq!(fixture().save(), [Action::Persist { announce: true }]);
}

#[test]
fn persist_feedback_messages() {
    assert_eq!(
        persist_feedback(true, &Ok(())),
        Some(Action::Notify { level: ToastLevel::Success, message: "Layout saved successfully!".to_owned() })
    );
    assert_eq!(persist_feedback(false, &Ok(())), None);
    let err = Err(StorageError::Backend("QuotaExceededError".to_owned()));
    assert_eq!(
        persist_feedback(false, &err),
        Some(Action::Notify { level: ToastLevel::Error, message: "Error saving: QuotaExceededError".to_owned() })
    );
}

#[test]
fn zoom_changes_view_box() {
    let mut core = fixture();
    assert_eq!(core.view_box().width, 500.0);
    core.zoom_in();
    assert!(core.view_box().width < 500.0);
    core.zoom_out();
    core.zoom_out();
    assert!(core.view_box().width > 500.0);
}

#[test]
fn screen_to_world_uses_viewport() {
    let mut core = fixture();
    core.set_viewport(250.0, 150.0);
    let w = core.screen_to_world(pt(125.0, 75.0));
    assert!((w.x - 250.0).abs() < 1e-9);
    assert!((w.y - 150.0).abs() < 1e-9);
}

// =============================================================
// Pointer gestures: dragging
// =============================================================

#[test]
fn pointer_down_on_table_selects_and_starts_drag() {
    let mut core = fixture();
    core.pointer_down(pt(125.0, 125.0));
    assert_eq!(core.ui.selected, Some(table_ref("f")));
    assert!(matches!(core.input, InputState::DraggingItem { orig_x: 4, orig_y: 4, .. }));
}

#[test]
fn drag_moves_by_rounded_cells() {
    let mut core = fixture();
    core.pointer_down(pt(125.0, 125.0));
    core.pointer_move(pt(185.0, 118.0));
    let t = table(&core, "f");
    assert_eq!((t.grid_x, t.grid_y), (6, 4));
}

#[test]
fn drag_never_leaves_grid() {
    let mut core = fixture();
    core.pointer_down(pt(125.0, 125.0));
    core.pointer_move(pt(-5000.0, -5000.0));
    assert_eq!((table(&core, "f").grid_x, table(&core, "f").grid_y), (0, 0));
    core.pointer_move(pt(5000.0, 5000.0));
    assert_eq!((table(&core, "f").grid_x, table(&core, "f").grid_y), (18, 10));
}

#[test]
fn drag_without_cell_change_is_quiet() {
    let mut core = fixture();
    core.pointer_down(pt(125.0, 125.0));
    assert!(core.pointer_move(pt(130.0, 126.0)).is_empty());
}

#[test]
fn drag_release_persists() {
    let mut core = fixture();
    core.pointer_down(pt(125.0, 125.0));
    core.pointer_move(pt(150.0, 125.0));
    let actions = core.pointer_up();
    assert!(has_persist(&actions));
    assert!(matches!(core.input, InputState::Idle));
}

#[test]
fn drag_element() {
    let mut core = fixture();
    let bar = core.layout.element("bar").unwrap().rect();
    let (cx, cy) = bar.pixel_center();
    core.pointer_down(pt(cx, cy));
    core.pointer_move(pt(cx - 50.0, cy + 25.0));
    let moved = core.layout.element("bar").unwrap();
    assert_eq!((moved.grid_x, moved.grid_y), (bar.x - 2, bar.y + 1));
}

#[test]
fn walls_are_selectable_but_not_draggable() {
    let mut core = fixture();
    core.pointer_down(pt(200.0, 10.0));
    assert_eq!(core.ui.selected, Some(element_ref("wall-n")));
    assert!(matches!(core.input, InputState::Idle));
    core.pointer_move(pt(200.0, 200.0));
    assert_eq!(core.layout.element("wall-n").unwrap().grid_y, 0);
}

#[test]
fn pointer_down_on_empty_space_clears_selection() {
    let mut core = fixture();
    select_f(&mut core);
    core.pointer_down(pt(250.0, 200.0));
    assert!(core.ui.selected.is_none());
}

#[test]
fn pointer_up_when_idle_is_noop() {
    let mut core = fixture();
    assert!(core.pointer_up().is_empty());
}

// =============================================================
// Pointer gestures: walls and deletion
// =============================================================

#[test]
fn draw_wall_commits_on_release() {
    let mut core = fixture();
    core.set_tool(Tool::DrawWall);
    let count = core.layout.elements.len();
    core.pointer_down(pt(212.0, 212.0));
    assert_eq!(core.wall_preview(), Some(GridRect::new(8, 8, 1, 1)));
    core.pointer_move(pt(312.0, 237.0));
    assert_eq!(core.wall_preview(), Some(GridRect::new(8, 8, 5, 1)));
    let actions = core.pointer_up();
    assert!(has_persist(&actions));
    assert_eq!(core.layout.elements.len(), count + 1);
    let wall = core.layout.elements.last().unwrap();
    assert_eq!(wall.kind, ElementKind::Wall);
    assert_eq!(wall.rect(), GridRect::new(8, 8, 5, 1));
    assert_eq!(wall.color.as_deref(), Some("rgb(180 180 180)"));
    assert!(!is_boundary_wall(&wall.id));
    assert!(core.wall_preview().is_none());
}

#[test]
fn draw_vertical_wall() {
    let mut core = fixture();
    core.set_tool(Tool::DrawWall);
    core.pointer_down(pt(212.0, 212.0));
    core.pointer_move(pt(187.0, 87.0));
    assert_eq!(core.wall_preview(), Some(GridRect::new(8, 3, 1, 6)));
}

#[test]
fn pointer_leave_commits_wall() {
    let mut core = fixture();
    core.set_tool(Tool::DrawWall);
    let count = core.layout.elements.len();
    core.pointer_down(pt(212.0, 212.0));
    core.pointer_leave();
    assert_eq!(core.layout.elements.len(), count + 1);
}

#[test]
fn draw_wall_clears_selection() {
    let mut core = fixture();
    select_f(&mut core);
    core.set_tool(Tool::DrawWall);
    core.pointer_down(pt(125.0, 125.0));
    assert!(core.ui.selected.is_none());
}

#[test]
fn delete_tool_pointer_down_deletes() {
    let mut core = fixture();
    core.set_tool(Tool::DeleteItem);
    core.pointer_down(pt(125.0, 125.0));
    assert!(core.layout.table("f").is_none());
    let actions = core.pointer_down(pt(200.0, 10.0));
    assert_eq!(toasts(&actions)[0].1, "Boundary walls cannot be deleted.");
}

// =============================================================
// Pointer gestures: chair editing and view mode
// =============================================================

#[test]
fn pointer_on_chair_toggles_it() {
    let mut core = fixture();
    core.toggle_chair_edit("f");
    let slot = crate::seating::chair_slots(table(&core, "f"))[0];
    core.pointer_down(pt(125.0 + slot.x, 125.0 + slot.y));
    assert_eq!(table(&core, "f").chair_visibility, vec![false, true, true, true]);
    assert!(core.ui.is_chair_editing("f"));
}

#[test]
fn pointer_on_chair_edit_table_body_does_nothing() {
    let mut core = fixture();
    core.toggle_chair_edit("f");
    assert!(core.pointer_down(pt(125.0, 125.0)).is_empty());
    assert!(core.ui.is_chair_editing("f"));
    assert!(matches!(core.input, InputState::Idle));
}

#[test]
fn pointer_outside_exits_chair_edit() {
    let mut core = fixture();
    core.toggle_chair_edit("f");
    core.pointer_down(pt(250.0, 200.0));
    assert!(core.ui.chair_edit.is_none());
}

#[test]
fn view_mode_pointer_selects_table() {
    let mut core = view_fixture();
    core.pointer_down(pt(125.0, 125.0));
    assert_eq!(core.ui.booking_selection.as_deref(), Some("f"));
    assert!(matches!(core.input, InputState::Idle));
    core.pointer_down(pt(275.0, 125.0));
    assert!(core.ui.booking_selection.is_none());
}

#[test]
fn view_mode_pointer_never_drags() {
    let mut core = view_fixture();
    core.pointer_down(pt(125.0, 125.0));
    core.pointer_move(pt(400.0, 400.0));
    assert_eq!(table(&core, "f").grid_x, 4);
}
