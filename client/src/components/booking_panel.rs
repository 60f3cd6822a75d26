//! Booking panel and legend shown in view mode.

#[cfg(test)]
#[path = "booking_panel_test.rs"]
mod booking_panel_test;

use leptos::prelude::*;

use floorplan::doc::Table;
use floorplan::engine::EditorCore;
use floorplan::icons::inline_svg;
use floorplan::seating::visible_seat_count;

use crate::state::editor::dispatch;
use crate::state::toast::ToastState;

/// What the booking panel shows for the current selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookingStatus {
    /// Nothing selected yet.
    Idle,
    /// A free table is selected and can be booked.
    Selected { name: String, seats: u32 },
    /// The selected table is already booked.
    Booked { name: String },
}

impl BookingStatus {
    pub fn of(table: Option<&Table>) -> Self {
        match table {
            None => Self::Idle,
            Some(t) if t.is_booked => Self::Booked { name: t.display_name().to_owned() },
            Some(t) => Self::Selected { name: t.display_name().to_owned(), seats: visible_seat_count(t) },
        }
    }
}

#[component]
pub fn BookingPanel() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorCore>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let status = Memo::new(move |_| editor.with(|c| BookingStatus::of(c.booking_table())));
    let on_book = move |_| dispatch(editor, toasts, EditorCore::book_selected);

    view! {
        <section class="panel booking-panel">
            <h3 class="panel__title">"Booking"</h3>
            <div class="booking-panel__status">
                {move || match status.get() {
                    BookingStatus::Idle => view! {
                        <p class="booking-panel__hint">"Click table to select."</p>
                    }
                    .into_any(),
                    BookingStatus::Selected { name, seats } => view! {
                        <h4 class="booking-panel__selected">
                            "Selected: " <span class="booking-panel__name">{name}</span>
                        </h4>
                        <p class="booking-panel__seats">
                            <span class="icon" inner_html=inline_svg("Users", 14, "icon--inline")></span>
                            {format!("{seats} seats")}
                        </p>
                        <button class="btn btn--primary booking-panel__book" on:click=on_book>
                            "Book Table"
                        </button>
                    }
                    .into_any(),
                    BookingStatus::Booked { name } => view! {
                        <p class="booking-panel__booked">{format!("Table ({name}) is booked!")}</p>
                    }
                    .into_any(),
                }}
            </div>
            <div class="legend">
                <h4 class="legend__title">"Legend"</h4>
                <div class="legend__row">
                    <span class="legend__swatch legend__swatch--available"></span>
                    <span>"Available"</span>
                </div>
                <div class="legend__row">
                    <span class="legend__swatch legend__swatch--selected"></span>
                    <span>"Selected"</span>
                </div>
                <div class="legend__row">
                    <span
                        class="legend__swatch legend__swatch--booked"
                        inner_html=inline_svg("Lock", 8, "legend__lock")
                    ></span>
                    <span>"Booked"</span>
                </div>
            </div>
        </section>
    }
}
