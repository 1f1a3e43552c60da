//! Book Reader Screen
//!
//! Paged reading view over a book's fixed text. The current page is
//! mirrored into the nav entry's params so going back and returning from
//! the detail screen could restore it.

use leptos::prelude::*;
use serde_json::json;

use crate::catalog;
use crate::components::empty_state::EmptyState;
use crate::components::prompt;
use crate::context::use_app_context;
use crate::navigation::params_with;
use crate::reader::{paginate, PageTurn, Paginator};
use crate::store::{store_find_book, use_app_store};

#[component]
pub fn BookReaderScreen() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let entry = ctx.current_entry();
    let book_id = entry
        .params
        .get("book_id")
        .and_then(|v| v.as_u64())
        .map(|id| id as u32);
    let start_page = entry
        .params
        .get("page")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as usize;

    let book = book_id.and_then(|id| store_find_book(&store, id));
    let pages: Vec<String> = book_id
        .and_then(catalog::book_text)
        .map(paginate)
        .unwrap_or_default();

    let Some(book) = book else {
        return view! {
            <div class="screen reader-screen">
                <EmptyState icon="📕" message="This story could not be found." />
                <button class="back-btn" on:click=move |_| ctx.go_back()>"Back"</button>
            </div>
        }
        .into_any();
    };

    let mut initial = Paginator::new(pages.len());
    for _ in 0..start_page.min(pages.len().saturating_sub(1)) {
        initial.next();
    }
    let pager = RwSignal::new(initial);

    let remember_page = move || {
        ctx.set_params(params_with("page", json!(pager.get().index())));
    };

    let turn_forward = move |_| {
        let result = {
            let mut p = pager.get();
            let result = p.next();
            pager.set(p);
            result
        };
        match result {
            PageTurn::Advanced => remember_page(),
            PageTurn::EndReached => {
                if prompt::confirm("The end! Close the book?") {
                    ctx.go_back();
                }
            }
        }
    };

    let turn_back = move |_| {
        let mut p = pager.get();
        p.prev();
        pager.set(p);
        remember_page();
    };

    let title = book.title.clone();
    let page_text = {
        let pages = pages.clone();
        move || {
            pages
                .get(pager.get().index())
                .cloned()
                .unwrap_or_default()
        }
    };

    view! {
        <div class="screen reader-screen">
            <header class="reader-header">
                <button class="back-btn" on:click=move |_| ctx.go_back()>"‹"</button>
                <h1>{title}</h1>
            </header>

            <div class="reader-progress">
                <div
                    class="reader-progress-fill"
                    style=move || format!("width: {}%", pager.get().progress_percent())
                ></div>
            </div>
            <p class="reader-progress-label">
                {move || {
                    let p = pager.get();
                    format!("Page {} of {} · {}%", p.index() + 1, p.total(), p.progress_percent())
                }}
            </p>

            <article class="reader-page">{page_text}</article>

            <div class="reader-controls">
                <button
                    on:click=turn_back
                    disabled=move || pager.get().index() == 0
                >
                    "‹ Previous"
                </button>
                <button on:click=turn_forward>
                    {move || if pager.get().is_last_page() { "Finish" } else { "Next ›" }}
                </button>
            </div>
        </div>
    }
    .into_any()
}
