#![cfg(not(feature = "hydrate"))]

use super::*;
use floorplan::doc::{Layout, TableShape};
use floorplan::input::{ItemRef, Mode};

fn signals() -> (RwSignal<EditorCore>, RwSignal<ToastState>) {
    let editor = RwSignal::new(EditorCore::new(Layout::with_defaults(20, 12)));
    let toasts = RwSignal::new(ToastState::default());
    (editor, toasts)
}

fn last_toast(toasts: RwSignal<ToastState>) -> Option<(ToastLevel, String)> {
    toasts.with_untracked(|t| t.current.as_ref().map(|t| (t.level, t.message.clone())))
}

#[test]
fn dispatch_applies_operation() {
    let (editor, toasts) = signals();
    let before = editor.with_untracked(|c| c.layout.tables.len());
    dispatch(editor, toasts, |c| c.add_table(TableShape::Circle));
    assert_eq!(editor.with_untracked(|c| c.layout.tables.len()), before + 1);
}

#[test]
fn persist_without_browser_storage_raises_error_toast() {
    let (editor, toasts) = signals();
    dispatch(editor, toasts, |c| c.add_table(TableShape::Square));
    assert_eq!(last_toast(toasts), Some((ToastLevel::Error, "Error saving: storage unavailable".to_owned())));
}

#[test]
fn engine_toast_is_shown() {
    let (editor, toasts) = signals();
    dispatch(editor, toasts, |c| c.delete_item(&ItemRef::Element("wall-n".to_owned())));
    assert_eq!(last_toast(toasts), Some((ToastLevel::Error, "Boundary walls cannot be deleted.".to_owned())));
}

#[test]
fn later_toasts_replace_earlier_ones() {
    let (editor, toasts) = signals();
    let id = editor.with_untracked(|c| c.layout.tables[0].id.clone());
    dispatch(editor, toasts, |c| c.delete_item(&ItemRef::Table(id)));
    assert_eq!(last_toast(toasts), Some((ToastLevel::Success, "Table deleted.".to_owned())));
}

#[test]
fn unchanged_grid_reports_info() {
    let (editor, toasts) = signals();
    dispatch(editor, toasts, |c| c.apply_grid_dimensions("20", "12"));
    assert_eq!(
        last_toast(toasts),
        Some((ToastLevel::Info, "Dimensions are already set to these values.".to_owned()))
    );
}

#[test]
fn mode_switch_without_toast() {
    let (editor, toasts) = signals();
    dispatch(editor, toasts, |c| c.set_mode(Mode::View));
    assert_eq!(editor.with_untracked(|c| c.ui.mode), Mode::View);
    assert_eq!(last_toast(toasts), None);
}

#[test]
fn show_toast_sets_current() {
    let toasts = RwSignal::new(ToastState::default());
    show_toast(toasts, ToastLevel::Info, "hello".to_owned());
    assert_eq!(last_toast(toasts), Some((ToastLevel::Info, "hello".to_owned())));
}
