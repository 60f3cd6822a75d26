//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{create::CreatePage, home::HomePage, tables::TablesPage};
use crate::state::{toast::ToastState, ui::UiState};
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the app-wide state contexts and sets up client-side routing.
/// The floor-plan pages provide their own editor signal.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(ui);
    provide_context(toasts);

    // Browser-only: pick up the stored theme once hydrated.
    Effect::new(move |_| {
        let enabled = dark_mode::read_preference();
        dark_mode::apply(enabled);
        ui.update(|u| u.dark_mode = enabled);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/tablekit.css"/>
        <Title text="Tablekit"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("create") view=CreatePage/>
                <Route path=StaticSegment("tables") view=TablesPage/>
            </Routes>
        </Router>
    }
}
