//! Zoom controls under the floor plan.

#[cfg(test)]
#[path = "zoom_bar_test.rs"]
mod zoom_bar_test;

use leptos::prelude::*;

use floorplan::engine::EditorCore;

use crate::state::editor::dispatch;
use crate::state::toast::ToastState;

/// Zoom readout, one decimal place.
pub fn zoom_label(zoom: f64) -> String {
    format!("Zoom: {zoom:.1}x")
}

#[component]
pub fn ZoomBar() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorCore>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="zoom-bar">
            <button
                class="btn zoom-bar__button"
                aria-label="Zoom Out"
                on:click=move |_| dispatch(editor, toasts, EditorCore::zoom_out)
            >
                "−"
            </button>
            <span class="zoom-bar__label">{move || zoom_label(editor.with(|c| c.camera.zoom))}</span>
            <button
                class="btn zoom-bar__button"
                aria-label="Zoom In"
                on:click=move |_| dispatch(editor, toasts, EditorCore::zoom_in)
            >
                "+"
            </button>
        </div>
    }
}
