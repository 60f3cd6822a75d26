//! SVG host for the floor plan.
//!
//! SYSTEM CONTEXT
//! ==============
//! Bridges DOM pointer events into `EditorCore` gestures. The engine does
//! its own hit-testing in world coordinates, so the host only converts the
//! pointer position relative to the `<svg>` box and reports the box size as
//! the viewport. The markup inside the `<svg>` comes from
//! `floorplan::render::scene` and is replaced whenever the editor signal
//! notifies.

use leptos::prelude::*;

use floorplan::camera::Point;
use floorplan::engine::EditorCore;
use floorplan::render;

use crate::state::editor::dispatch;
use crate::state::toast::ToastState;

/// Pointer position relative to the `<svg>` box, then the box width and height.
type PointerSample = (Point, f64, f64);

#[cfg(feature = "hydrate")]
fn sample(ev: &leptos::ev::PointerEvent, svg_ref: NodeRef<leptos::svg::Svg>) -> Option<PointerSample> {
    let svg = svg_ref.get()?;
    let rect = svg.get_bounding_client_rect();
    let screen = Point::new(f64::from(ev.client_x()) - rect.left(), f64::from(ev.client_y()) - rect.top());
    Some((screen, rect.width(), rect.height()))
}

#[cfg(not(feature = "hydrate"))]
fn sample(_ev: &leptos::ev::PointerEvent, _svg_ref: NodeRef<leptos::svg::Svg>) -> Option<PointerSample> {
    None
}

/// Sync the viewport and convert the sample to world pixels.
fn world_point(core: &mut EditorCore, (screen, width, height): PointerSample) -> Point {
    core.set_viewport(width, height);
    core.screen_to_world(screen)
}

/// Interactive floor plan. Reads the editor and toast signals from context.
#[component]
pub fn FloorCanvas() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorCore>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let svg_ref = NodeRef::<leptos::svg::Svg>::new();

    let markup = move || editor.with(render::scene);
    let view_box = move || editor.with(|c| c.view_box().to_attr());
    let cursor = move || editor.with(EditorCore::cursor);

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        if let Some(svg) = svg_ref.get() {
            if let Err(e) = svg.set_pointer_capture(ev.pointer_id()) {
                log::debug!("pointer capture refused: {e:?}");
            }
        }
        if let Some(s) = sample(&ev, svg_ref) {
            dispatch(editor, toasts, |c| {
                let world = world_point(c, s);
                c.pointer_down(world)
            });
        }
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        if let Some(s) = sample(&ev, svg_ref) {
            dispatch(editor, toasts, |c| {
                let world = world_point(c, s);
                c.pointer_move(world)
            });
        }
    };

    let on_pointer_up = move |_ev: leptos::ev::PointerEvent| {
        dispatch(editor, toasts, EditorCore::pointer_up);
    };

    let on_pointer_leave = move |_ev: leptos::ev::PointerEvent| {
        dispatch(editor, toasts, EditorCore::pointer_leave);
    };

    view! {
        <div class="floor-canvas">
            <svg
                node_ref=svg_ref
                class="floor-canvas__svg"
                preserveAspectRatio="xMidYMid meet"
                viewBox=view_box
                style:cursor=cursor
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointerleave=on_pointer_leave
                inner_html=markup
            ></svg>
        </div>
    }
}
