//! Stories Screen
//!
//! Searchable, category-filtered story browser. The filter recomputes from
//! the full catalog on every keystroke or chip change.

use leptos::prelude::*;

use crate::components::book_card::BookCard;
use crate::components::empty_state::EmptyState;
use crate::context::use_app_context;
use crate::models::{Category, CategoryFilter, FilterCriteria};
use crate::search::filter_books;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StoriesScreen() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    // Category shortcut taps arrive as a nav param
    let initial_category = ctx
        .current_entry()
        .params
        .get("category")
        .and_then(|v| v.as_str())
        .and_then(Category::from_tag);

    let (query, set_query) = signal(String::new());
    let (category, set_category) = signal(match initial_category {
        Some(c) => CategoryFilter::Only(c),
        None => CategoryFilter::All,
    });

    let results = move || {
        let criteria = FilterCriteria {
            category: category.get(),
            query: query.get(),
        };
        filter_books(&store.books().read(), &criteria)
    };

    view! {
        <div class="screen stories-screen">
            <header class="stories-header">
                <button class="back-btn" on:click=move |_| ctx.go_back()>"‹"</button>
                <h1>"Stories"</h1>
            </header>

            <input
                class="search-input"
                type="search"
                placeholder="Search by title, author, or words..."
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />

            <div class="category-chips">
                <button
                    class=move || if category.get() == CategoryFilter::All { "chip active" } else { "chip" }
                    on:click=move |_| set_category.set(CategoryFilter::All)
                >
                    "All"
                </button>
                {Category::ALL.iter().map(|c| {
                    let c = *c;
                    view! {
                        <button
                            class=move || if category.get() == CategoryFilter::Only(c) { "chip active" } else { "chip" }
                            on:click=move |_| set_category.set(CategoryFilter::Only(c))
                        >
                            {c.label()}
                        </button>
                    }
                }).collect_view()}
            </div>

            {move || {
                let books = results();
                if books.is_empty() {
                    view! {
                        <EmptyState icon="🔍" message="No stories match your search." />
                    }.into_any()
                } else {
                    view! {
                        <div class="book-list">
                            <For
                                each=move || results()
                                key=|book| book.id
                                children=move |book| view! { <BookCard book=book /> }
                            />
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
