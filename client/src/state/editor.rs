//! Reactive wrapper around the floor-plan `EditorCore`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each floor-plan page owns one `RwSignal<EditorCore>` and provides it via
//! context. Components never mutate the core directly: they call `dispatch`
//! with an engine operation, and the returned actions are carried out here.
//!
//! DESIGN
//! ======
//! The operation runs against an untracked write guard. Subscribers are
//! notified once, and only when the engine asked for a redraw, so pointer
//! moves that change nothing do not re-render the plan.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use leptos::prelude::*;

use floorplan::engine::{Action, EditorCore, ToastLevel, persist_feedback};

use crate::state::toast::ToastState;
use crate::util::layout_storage;

/// Run an editor operation and process the actions it returns.
pub fn dispatch(
    editor: RwSignal<EditorCore>,
    toasts: RwSignal<ToastState>,
    op: impl FnOnce(&mut EditorCore) -> Vec<Action>,
) {
    let actions = op(&mut editor.write_untracked());
    process_actions(actions, editor, toasts);
}

/// Carry out engine actions: toasts, storage writes and redraws.
pub fn process_actions(actions: Vec<Action>, editor: RwSignal<EditorCore>, toasts: RwSignal<ToastState>) {
    let mut redraw = false;
    for action in actions {
        match action {
            Action::Notify { level, message } => show_toast(toasts, level, message),
            Action::Persist { announce } => {
                let result = editor.with_untracked(|core| layout_storage::save(&core.layout));
                if let Err(e) = &result {
                    log::warn!("layout save failed: {e}");
                }
                if let Some(Action::Notify { level, message }) = persist_feedback(announce, &result) {
                    show_toast(toasts, level, message);
                }
            }
            Action::SetCursor(_) | Action::RenderNeeded => redraw = true,
        }
    }
    if redraw {
        editor.notify();
    }
}

/// Show a toast and schedule its dismissal.
pub fn show_toast(toasts: RwSignal<ToastState>, level: ToastLevel, message: String) {
    let Some(id) = toasts.try_update(|t| t.show(level, message)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::state::toast::TOAST_DURATION_MS).await;
        toasts.update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    log::trace!("toast {id} stays until replaced");
}
