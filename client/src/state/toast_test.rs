use super::*;

#[test]
fn default_has_no_toast() {
    assert!(ToastState::default().current.is_none());
}

#[test]
fn show_replaces_previous_toast() {
    let mut state = ToastState::default();
    let first = state.show(ToastLevel::Success, "Table deleted.");
    let second = state.show(ToastLevel::Error, "Boundary walls cannot be deleted.");
    assert_ne!(first, second);
    let toast = state.current.as_ref().unwrap();
    assert_eq!(toast.id, second);
    assert_eq!(toast.level, ToastLevel::Error);
    assert_eq!(toast.message, "Boundary walls cannot be deleted.");
}

#[test]
fn stale_dismiss_keeps_newer_toast() {
    let mut state = ToastState::default();
    let first = state.show(ToastLevel::Info, "one");
    let second = state.show(ToastLevel::Info, "two");
    state.dismiss(first);
    assert_eq!(state.current.as_ref().map(|t| t.id), Some(second));
    state.dismiss(second);
    assert!(state.current.is_none());
}

#[test]
fn toast_class_per_level() {
    assert_eq!(toast_class(ToastLevel::Success), "toast toast--success");
    assert_eq!(toast_class(ToastLevel::Error), "toast toast--error");
    assert_eq!(toast_class(ToastLevel::Info), "toast toast--info");
}
