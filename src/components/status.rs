//! Status Screen
//!
//! Reading status: continue-reading list with per-book progress. Positions
//! are mock data; tapping a row reopens the reader at that page.

use leptos::prelude::*;
use serde_json::json;

use crate::catalog;
use crate::components::empty_state::EmptyState;
use crate::context::use_app_context;
use crate::navigation::{Params, Screen};
use crate::reader::{paginate, Paginator};
use crate::store::{store_find_book, use_app_store};

/// Mock reading positions: (book_id, zero-based page reached)
const IN_PROGRESS: &[(u32, usize)] = &[(2, 3), (6, 1), (9, 4)];

#[component]
pub fn StatusScreen() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let rows = move || {
        IN_PROGRESS
            .iter()
            .filter_map(|&(book_id, page)| {
                let book = store_find_book(&store, book_id)?;
                let total = paginate(catalog::book_text(book_id)?).len();
                let mut pager = Paginator::new(total);
                for _ in 0..page.min(total.saturating_sub(1)) {
                    pager.next();
                }
                Some((book, pager))
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="screen status-screen">
            <h1>"Reading Status"</h1>

            {move || {
                let rows = rows();
                if rows.is_empty() {
                    view! {
                        <EmptyState icon="⏱" message="Nothing in progress. Open a story to get started." />
                    }.into_any()
                } else {
                    view! {
                        <div class="status-list">
                            {rows.into_iter().map(|(book, pager)| {
                                let id = book.id;
                                let page = pager.index();
                                view! {
                                    <div
                                        class="status-row"
                                        on:click=move |_| {
                                            let mut params = Params::new();
                                            params.insert("book_id".to_string(), json!(id));
                                            params.insert("page".to_string(), json!(page));
                                            ctx.navigate(Screen::BookReader, params);
                                        }
                                    >
                                        <div class="status-row-text">
                                            <h3>{book.title.clone()}</h3>
                                            <p>{format!("Page {} of {}", pager.index() + 1, pager.total())}</p>
                                        </div>
                                        <div class="status-progress">
                                            <div
                                                class="status-progress-fill"
                                                style=format!("width: {}%", pager.progress_percent())
                                            ></div>
                                        </div>
                                        <span class="status-percent">{format!("{}%", pager.progress_percent())}</span>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
