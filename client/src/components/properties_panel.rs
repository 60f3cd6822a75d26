//! Builder properties panel for the selected table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shown in the sidebar while a table is selected in builder mode. Seat and
//! size steppers pre-clamp the request the way the sidebar always has; the
//! engine then applies the geometric limits and reports adjustments.

#[cfg(test)]
#[path = "properties_panel_test.rs"]
mod properties_panel_test;

use leptos::prelude::*;

use floorplan::consts::MAX_SEATS_REQUEST;
use floorplan::doc::Table;
use floorplan::engine::EditorCore;
use floorplan::seating::{visible_seat_count, visual_max_seats};

use crate::state::editor::dispatch;
use crate::state::toast::ToastState;
use crate::state::ui::UiState;

/// Seat request after pressing a stepper, kept in `[1, MAX_SEATS_REQUEST]`.
pub fn stepped_seats(current: u32, delta: i32) -> u32 {
    current.saturating_add_signed(delta).clamp(1, MAX_SEATS_REQUEST)
}

/// Width or height after pressing a stepper, kept in `[1, room]`.
pub fn stepped_size(current: u32, delta: i32, room: u32) -> u32 {
    current.saturating_add_signed(delta).clamp(1, room.max(1))
}

/// Panel heading.
pub fn panel_title(table: &Table) -> String {
    match table.label.as_deref() {
        Some(label) if !label.is_empty() => format!("{label} Properties"),
        _ => "Table Properties".to_owned(),
    }
}

/// Seat line shown under the stepper.
pub fn seat_hint(table: &Table) -> String {
    let max = visual_max_seats(table.shape, table.grid_width, table.grid_height);
    let shown = visible_seat_count(table);
    if shown == table.seats {
        format!("max {max}")
    } else {
        format!("{shown} shown, max {max}")
    }
}

#[component]
pub fn PropertiesPanel() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorCore>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let selected = Memo::new(move |_| editor.with(|c| c.selected_table().cloned()));
    let grid = Memo::new(move |_| editor.with(|c| (c.layout.grid_cols, c.layout.grid_rows)));
    let selected_id = Memo::new(move |_| selected.with(|t| t.as_ref().map(|t| t.id.clone())));
    let chair_editing =
        move || selected_id.get().is_some_and(|id| editor.with(|c| c.ui.is_chair_editing(&id)));

    // A new selection discards any half-edited label.
    Effect::new(move |_| {
        selected_id.track();
        ui.update(|u| u.label_draft = None);
    });

    let on_seats = move |delta: i32| {
        if let Some(table) = selected.get_untracked() {
            let requested = stepped_seats(table.seats, delta);
            dispatch(editor, toasts, |c| c.update_table_seats(&table.id, requested));
        }
    };
    let on_width = move |delta: i32| {
        if let Some(table) = selected.get_untracked() {
            let room = grid.get_untracked().0.saturating_sub(table.grid_x);
            let width = stepped_size(table.grid_width, delta, room);
            dispatch(editor, toasts, |c| c.update_table_size(&table.id, width, table.grid_height));
        }
    };
    let on_height = move |delta: i32| {
        if let Some(table) = selected.get_untracked() {
            let room = grid.get_untracked().1.saturating_sub(table.grid_y);
            let height = stepped_size(table.grid_height, delta, room);
            dispatch(editor, toasts, |c| c.update_table_size(&table.id, table.grid_width, height));
        }
    };
    let on_label_save = move || {
        let Some(table) = selected.get_untracked() else {
            return;
        };
        if let Some(label) = ui.try_update(UiState::finish_label_edit).flatten() {
            dispatch(editor, toasts, |c| c.update_table_label(&table.id, &label));
        }
    };
    let on_toggle_chairs = move |_| {
        if let Some(table) = selected.get_untracked() {
            dispatch(editor, toasts, |c| c.toggle_chair_edit(&table.id));
        }
    };
    let on_duplicate = move |_| {
        if let Some(table) = selected.get_untracked() {
            dispatch(editor, toasts, |c| c.duplicate_table(&table.id));
        }
    };

    move || {
        selected.get().map(|table| {
            let title = panel_title(&table);
            let label_text = table.display_name().to_owned();
            let seats = table.seats;
            let hint = seat_hint(&table);
            let (width, height) = (table.grid_width, table.grid_height);
            view! {
                <section class="panel properties-panel">
                    <h3 class="panel__title">{title}</h3>
                    <Show
                        when=chair_editing
                        fallback=move || {
                            let label_text = label_text.clone();
                            let hint = hint.clone();
                            view! {
                                <div class="properties-panel__row">
                                    <span class="properties-panel__key">"Label"</span>
                                    <Show
                                        when=move || ui.with(|u| u.label_draft.is_some())
                                        fallback={
                                            let label_text = label_text.clone();
                                            move || {
                                                let label_text = label_text.clone();
                                                view! {
                                                    <span class="properties-panel__value">{label_text}</span>
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| {
                                                            let current = selected.get_untracked().and_then(|t| t.label);
                                                            ui.update(|u| u.begin_label_edit(current.as_deref()));
                                                        }
                                                    >
                                                        "Edit"
                                                    </button>
                                                }
                                            }
                                        }
                                    >
                                        <input
                                            class="properties-panel__input"
                                            type="text"
                                            prop:value=move || ui.with(|u| u.label_draft.clone().unwrap_or_default())
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                ui.update(|u| u.label_draft = Some(value));
                                            }
                                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                                if ev.key() == "Enter" {
                                                    on_label_save();
                                                }
                                            }
                                        />
                                        <button class="btn btn--small" on:click=move |_| on_label_save()>
                                            "Save"
                                        </button>
                                    </Show>
                                </div>
                                <div class="properties-panel__row">
                                    <span class="properties-panel__key">"Seats"</span>
                                    <button class="btn btn--small" on:click=move |_| on_seats(-1)>"−"</button>
                                    <span class="properties-panel__value">{seats}</span>
                                    <button class="btn btn--small" on:click=move |_| on_seats(1)>"+"</button>
                                    <span class="properties-panel__hint">{hint}</span>
                                </div>
                                <div class="properties-panel__row">
                                    <span class="properties-panel__key">"Width"</span>
                                    <button class="btn btn--small" on:click=move |_| on_width(-1)>"−"</button>
                                    <span class="properties-panel__value">{width}</span>
                                    <button class="btn btn--small" on:click=move |_| on_width(1)>"+"</button>
                                </div>
                                <div class="properties-panel__row">
                                    <span class="properties-panel__key">"Height"</span>
                                    <button class="btn btn--small" on:click=move |_| on_height(-1)>"−"</button>
                                    <span class="properties-panel__value">{height}</span>
                                    <button class="btn btn--small" on:click=move |_| on_height(1)>"+"</button>
                                </div>
                                <button class="btn properties-panel__action" on:click=on_toggle_chairs>
                                    "Edit Chairs"
                                </button>
                                <button class="btn properties-panel__action" on:click=on_duplicate>
                                    "Duplicate Table"
                                </button>
                            }
                        }
                    >
                        <div class="properties-panel__chair-edit">
                            <p class="properties-panel__chair-title">"Editing Chairs"</p>
                            <p class="properties-panel__chair-help">"Click chairs on the canvas to add/remove."</p>
                            <button class="btn btn--success" on:click=on_toggle_chairs>
                                "Done Editing Chairs"
                            </button>
                        </div>
                    </Show>
                </section>
            }
        })
    }
}
