//! Dashboard Screen
//!
//! Greeting, auto-advancing featured carousel, and category shortcuts into
//! the story browser.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use serde_json::json;

use crate::components::book_card::BookCard;
use crate::context::use_app_context;
use crate::models::{Book, Category};
use crate::navigation::{params_with, Screen};
use crate::store::{use_app_store, AppStateStoreFields};

const CAROUSEL_TICK_MS: u32 = 4000;
const FEATURED_COUNT: usize = 4;

/// Highest-rated books, catalog order breaking ties
fn featured_books(books: &[Book]) -> Vec<Book> {
    let mut featured: Vec<Book> = books.to_vec();
    featured.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(std::cmp::Ordering::Equal));
    featured.truncate(FEATURED_COUNT);
    featured
}

#[component]
pub fn DashboardScreen() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (carousel_idx, set_carousel_idx) = signal(0usize);

    // Auto-advance; the handle drop on unmount stops the ticking
    let ticker = StoredValue::new_local(None::<Interval>);
    ticker.set_value(Some(Interval::new(CAROUSEL_TICK_MS, move || {
        set_carousel_idx.update(|i| *i = i.wrapping_add(1));
    })));
    on_cleanup(move || ticker.set_value(None));

    let featured = move || featured_books(&store.books().read());
    let greeting = move || format!("Hello, {}!", store.profile_name().get());

    view! {
        <div class="screen dashboard-screen">
            <header class="dashboard-header">
                <h1>{greeting}</h1>
                <p>"What shall we read today?"</p>
            </header>

            <section class="featured-carousel">
                <h2>"Featured"</h2>
                {move || {
                    let books = featured();
                    if books.is_empty() {
                        view! { <div></div> }.into_any()
                    } else {
                        let book = books[carousel_idx.get() % books.len()].clone();
                        view! {
                            <BookCard book=book />
                            <div class="carousel-dots">
                                {(0..books.len()).map(|i| {
                                    let active = i == carousel_idx.get() % books.len();
                                    view! {
                                        <span class=if active { "dot active" } else { "dot" }></span>
                                    }
                                }).collect_view()}
                            </div>
                        }.into_any()
                    }
                }}
            </section>

            <section class="category-shortcuts">
                <h2>"Browse by category"</h2>
                <div class="category-grid">
                    {Category::ALL.iter().map(|category| {
                        let category = *category;
                        view! {
                            <button
                                class="category-tile"
                                on:click=move |_| {
                                    ctx.navigate(Screen::Stories, params_with("category", json!(category.tag())));
                                }
                            >
                                {category.label()}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
