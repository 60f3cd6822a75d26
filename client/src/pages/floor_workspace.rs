//! Shared layout of the builder and booking screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the page-scoped editor signal. The server renders the default
//! layout; once hydrated, a mount effect swaps in the layout stored in
//! `localStorage` so the first client render matches the server markup.

use leptos::prelude::*;

use floorplan::doc::Layout;
use floorplan::engine::EditorCore;

use crate::components::floor_canvas::FloorCanvas;
use crate::components::sidebar::Sidebar;
use crate::components::toast::ToastHost;
use crate::components::zoom_bar::ZoomBar;
use crate::util::layout_storage;

#[component]
pub fn FloorWorkspace(#[prop(optional)] booking_only: bool) -> impl IntoView {
    let core = if booking_only { EditorCore::booking(Layout::default()) } else { EditorCore::default() };
    let editor = RwSignal::new(core);
    provide_context(editor);

    Effect::new(move |_| {
        let layout = layout_storage::load();
        editor.update(|c| c.load_layout(layout));
    });

    view! {
        <div class="workspace">
            <Sidebar booking_only=booking_only/>
            <div class="workspace__stage">
                <ToastHost/>
                <FloorCanvas/>
                <ZoomBar/>
            </div>
        </div>
    }
}
