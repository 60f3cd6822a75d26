//! Floor-plan builder route.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::pages::floor_workspace::FloorWorkspace;

#[component]
pub fn CreatePage() -> impl IntoView {
    view! {
        <Title text="Floor Plan Builder · Tablekit"/>
        <FloorWorkspace/>
    }
}
