//! Editor sidebar: mode switch, workspace settings, tools, table palette.
//!
//! SYSTEM CONTEXT
//! ==============
//! The builder page shows every section; the booking page passes
//! `booking_only` and gets the header plus the booking panel.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;

use floorplan::doc::TableShape;
use floorplan::engine::EditorCore;
use floorplan::input::{Mode, Tool};

use crate::components::booking_panel::BookingPanel;
use crate::components::properties_panel::PropertiesPanel;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::editor::dispatch;
use crate::state::toast::ToastState;
use crate::state::ui::UiState;

/// Tool buttons in display order.
pub const TOOL_BUTTONS: [(Tool, &str); 3] =
    [(Tool::Select, "Select & Move"), (Tool::DrawWall, "Draw Wall"), (Tool::DeleteItem, "Delete Item")];

/// Add-table buttons in display order.
pub const TABLE_BUTTONS: [(TableShape, &str); 3] = [
    (TableShape::Circle, "Add Circle Table"),
    (TableShape::Square, "Add Square Table"),
    (TableShape::Rectangle, "Add Rectangle Table"),
];

/// Label of the mode switch: it names the mode it switches to.
pub fn mode_button_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Builder => "View Mode",
        Mode::View => "Edit Mode",
    }
}

/// Tool button class. Chair editing suspends the tool highlight.
pub fn tool_button_class(active: Tool, tool: Tool, chair_editing: bool) -> &'static str {
    if active == tool && !chair_editing { "btn tool-button tool-button--active" } else { "btn tool-button" }
}

fn tool_buttons(editor: RwSignal<EditorCore>, toasts: RwSignal<ToastState>) -> impl IntoView {
    TOOL_BUTTONS
        .into_iter()
        .map(|(tool, label)| {
            let class = move || editor.with(|c| tool_button_class(c.ui.tool, tool, c.ui.chair_edit.is_some()));
            view! {
                <button class=class on:click=move |_| dispatch(editor, toasts, |c| c.set_tool(tool))>
                    {label}
                </button>
            }
        })
        .collect_view()
}

fn table_buttons(editor: RwSignal<EditorCore>, toasts: RwSignal<ToastState>) -> impl IntoView {
    TABLE_BUTTONS
        .into_iter()
        .map(|(shape, label)| {
            view! {
                <button
                    class="btn btn--success add-table-button"
                    on:click=move |_| dispatch(editor, toasts, |c| c.add_table(shape))
                >
                    {label}
                </button>
            }
        })
        .collect_view()
}

#[component]
pub fn Sidebar(#[prop(optional)] booking_only: bool) -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorCore>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let mode = Memo::new(move |_| editor.with(|c| c.ui.mode));
    let grid = Memo::new(move |_| editor.with(|c| (c.layout.grid_cols, c.layout.grid_rows)));
    let is_builder = move || mode.get() == Mode::Builder;

    // Workspace inputs follow the applied grid size.
    Effect::new(move |_| {
        let (cols, rows) = grid.get();
        ui.update(|u| u.sync_grid_drafts(cols, rows));
    });

    let on_toggle_mode = move |_| {
        let next = match mode.get_untracked() {
            Mode::Builder => Mode::View,
            Mode::View => Mode::Builder,
        };
        dispatch(editor, toasts, |c| c.set_mode(next));
    };
    let on_apply = move |_| {
        let (cols, rows) = ui.with_untracked(|u| (u.cols_draft.clone(), u.rows_draft.clone()));
        dispatch(editor, toasts, |c| c.apply_grid_dimensions(&cols, &rows));
    };
    let on_save = move |_| dispatch(editor, toasts, |c| c.save());

    view! {
        <aside class="sidebar">
            <header class="sidebar__header">
                <h2 class="sidebar__title">{if booking_only { "Book a Table" } else { "Restaurant Editor" }}</h2>
                <ThemeToggle/>
                <Show when=move || !booking_only>
                    <button
                        class=move || if is_builder() { "btn btn--primary mode-button" } else { "btn mode-button" }
                        on:click=on_toggle_mode
                    >
                        {move || mode_button_label(mode.get())}
                    </button>
                </Show>
            </header>

            <div class="sidebar__body">
                <Show when=is_builder fallback=|| view! { <BookingPanel/> }>
                    <section class="panel">
                        <h3 class="panel__title">"Workspace Settings"</h3>
                        <label class="field">
                            <span class="field__label">"Columns:"</span>
                            <input
                                class="field__input"
                                type="number"
                                prop:value=move || ui.with(|u| u.cols_draft.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    ui.update(|u| u.cols_draft = value);
                                }
                            />
                        </label>
                        <label class="field">
                            <span class="field__label">"Rows:"</span>
                            <input
                                class="field__input"
                                type="number"
                                prop:value=move || ui.with(|u| u.rows_draft.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    ui.update(|u| u.rows_draft = value);
                                }
                            />
                        </label>
                        <button class="btn btn--accent" on:click=on_apply>"Apply Dimensions"</button>
                    </section>

                    <section class="panel">
                        <h3 class="panel__title">"Editing Tools"</h3>
                        {tool_buttons(editor, toasts)}
                    </section>

                    <PropertiesPanel/>

                    <section class="panel">
                        <h3 class="panel__title">"Add Elements"</h3>
                        {table_buttons(editor, toasts)}
                    </section>
                </Show>
            </div>

            <Show when=is_builder>
                <footer class="sidebar__footer">
                    <button class="btn btn--primary save-button" on:click=on_save>"Save Layout"</button>
                </footer>
            </Show>
        </aside>
    }
}
