//! Booking route: the stored floor plan, locked in view mode.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::pages::floor_workspace::FloorWorkspace;

#[component]
pub fn TablesPage() -> impl IntoView {
    view! {
        <Title text="Book a Table · Tablekit"/>
        <FloorWorkspace booking_only=true/>
    }
}
