//! Floating toast notification.

use leptos::prelude::*;

use crate::state::toast::{ToastState, toast_class};

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    move || {
        toasts.get().current.map(|toast| {
            view! {
                <div class=toast_class(toast.level) role="alert">
                    <span class="toast__message">{toast.message}</span>
                </div>
            }
        })
    }
}
