//! Landing page: audience selector, hero, steps, testimonials, FAQ, CTA.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::pages::home_content::{
    BusinessKind, FAQ, PARTNERS, STEPS, TESTIMONIALS, hero_for, rating_summary, star_filled, toggle_faq,
};

const RATING: f64 = 4.9;
const REVIEW_COUNT: u32 = 125;

#[component]
fn Stars(rating: f64, #[prop(optional, into)] reviews: Option<u32>) -> impl IntoView {
    view! {
        <div class="stars">
            {(0..5)
                .map(|i| {
                    let class = if star_filled(i, rating) { "stars__star stars__star--filled" } else { "stars__star" };
                    view! { <span class=class>"★"</span> }
                })
                .collect_view()}
            <span class="stars__summary">{rating_summary(rating, reviews)}</span>
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let selected = RwSignal::new(None::<BusinessKind>);
    let open_faq = RwSignal::new(None::<usize>);
    let hero = move || hero_for(selected.get());

    let business_buttons = BusinessKind::ALL
        .into_iter()
        .map(|kind| {
            let class = move || {
                if selected.get() == Some(kind) { "btn business-button business-button--active" } else { "btn business-button" }
            };
            view! {
                <button class=class on:click=move |_| selected.set(Some(kind))>
                    {kind.name()}
                </button>
            }
        })
        .collect_view();

    let faq_items = FAQ
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_open = move || open_faq.get() == Some(i);
            view! {
                <div class="faq__item" class:faq__item--open=is_open>
                    <button class="faq__question" on:click=move |_| open_faq.update(|o| *o = toggle_faq(*o, i))>
                        {item.question}
                    </button>
                    <Show when=is_open>
                        <p class="faq__answer">{item.answer}</p>
                    </Show>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="home">
            <header class="home__nav">
                <a href="/" class="home__logo">"Tablekit"</a>
                <nav class="home__links">
                    <a href="#howitworks">"How It Works"</a>
                    <a href="#testimonials">"Testimonials"</a>
                    <a href="#faq">"FAQ"</a>
                </nav>
                <div class="home__actions">
                    <a href="/tables" class="btn">"Book a Table"</a>
                    <a href="/create" class="btn btn--primary">"Open the Builder"</a>
                    <ThemeToggle/>
                </div>
            </header>

            <main>
                <section class="home__selector">
                    <h2>"Choose your type of business:"</h2>
                    <div class="home__business-grid">{business_buttons}</div>
                </section>

                <section class="home__hero">
                    <div class="home__hero-text">
                        <p class="home__subtitle">{move || hero().subtitle}</p>
                        <h1 class="home__title">{move || hero().title}</h1>
                        <p class="home__description">{move || hero().description}</p>
                        <div class="home__cta-row">
                            <a href="/create" class="btn btn--primary">"Build Your Floor Plan"</a>
                            <a href="/tables" class="btn">"Try Booking"</a>
                        </div>
                        <Stars rating=RATING reviews=REVIEW_COUNT/>
                    </div>
                    <div class="home__preview">
                        <p class="home__preview-title">{move || hero().preview_title}</p>
                        <p class="home__preview-description">{move || hero().preview_description}</p>
                        <div class="home__preview-details">
                            <h4>{move || hero().details_title}</h4>
                            {move || hero().details.iter().map(|d| view! { <p>{*d}</p> }).collect_view()}
                        </div>
                    </div>
                </section>

                <section class="home__partners">
                    <h2>"Forward-looking businesses already on board"</h2>
                    <div class="home__partner-row">
                        {PARTNERS.iter().map(|p| view! { <span class="home__partner">{*p}</span> }).collect_view()}
                    </div>
                </section>

                <section id="howitworks" class="home__steps">
                    <h2>"How It Works"</h2>
                    <p>"A few simple steps to calmer bookings."</p>
                    <div class="home__step-grid">
                        {STEPS
                            .iter()
                            .enumerate()
                            .map(|(i, step)| {
                                view! {
                                    <div class="home__step">
                                        <span class="home__step-number">{i + 1}</span>
                                        <h3>{step.title}</h3>
                                        <p>{step.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section id="testimonials" class="home__testimonials">
                    <h2>"What Our Customers Say"</h2>
                    <div class="home__testimonial-grid">
                        {TESTIMONIALS
                            .iter()
                            .map(|t| {
                                view! {
                                    <figure class="home__testimonial">
                                        <blockquote>{format!("\"{}\"", t.quote)}</blockquote>
                                        <figcaption>
                                            <strong>{t.name}</strong>
                                            <span>{t.role}</span>
                                        </figcaption>
                                    </figure>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section id="faq" class="home__faq">
                    <h2>"Frequently Asked Questions"</h2>
                    <div class="faq">{faq_items}</div>
                </section>

                <section class="home__cta">
                    <h2>"Ready to make booking simple?"</h2>
                    <p>"Join the businesses that already run their bookings with Tablekit."</p>
                    <a href="/create" class="btn btn--inverse">"Create Your Floor Plan"</a>
                </section>
            </main>

            <footer class="home__footer">
                <Stars rating=RATING/>
                <p>"© Tablekit"</p>
            </footer>
        </div>
    }
}
