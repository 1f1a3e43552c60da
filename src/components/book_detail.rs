//! Book Detail Screen
//!
//! Full record for one book, looked up by the `book_id` nav param.
//! Removing a favorite asks for confirmation; adding one does not.

use leptos::prelude::*;
use serde_json::json;

use crate::components::empty_state::EmptyState;
use crate::components::prompt;
use crate::context::use_app_context;
use crate::navigation::{params_with, Screen};
use crate::store::{store_find_book, store_toggle_favorite, use_app_store};

#[component]
pub fn BookDetailScreen() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let book_id = ctx
        .current_entry()
        .params
        .get("book_id")
        .and_then(|v| v.as_u64())
        .map(|id| id as u32);

    let toggle_favorite = move |id: u32| {
        let is_favorite = store_find_book(&store, id).map(|b| b.is_favorite).unwrap_or(false);
        if is_favorite && !prompt::confirm("Remove this story from your favorites?") {
            return;
        }
        store_toggle_favorite(&store, id);
    };

    view! {
        <div class="screen book-detail-screen">
            <header class="detail-header">
                <button class="back-btn" on:click=move |_| ctx.go_back()>"‹"</button>
            </header>

            {move || {
                let book = book_id.and_then(|id| store_find_book(&store, id));
                match book {
                    None => view! {
                        <EmptyState icon="📕" message="This story could not be found." />
                    }.into_any(),
                    Some(book) => {
                        let id = book.id;
                        view! {
                            <div class="detail-body">
                                <img class="detail-cover" src=book.image.clone() alt=book.title.clone() />
                                <h1>{book.title.clone()}</h1>
                                <p class="detail-author">{format!("by {}", book.author)}</p>
                                <div class="detail-meta">
                                    <span>{format!("★ {:.1}", book.rating)}</span>
                                    <span>{format!("{} min", book.duration_minutes)}</span>
                                    <span>{book.category.label()}</span>
                                    <span>{format!("ages {}", book.age_range)}</span>
                                </div>
                                <p class="detail-description">{book.description.clone()}</p>

                                <div class="detail-actions">
                                    <button
                                        class="read-btn"
                                        on:click=move |_| {
                                            ctx.navigate(Screen::BookReader, params_with("book_id", json!(id)));
                                        }
                                    >
                                        "Read story"
                                    </button>
                                    <button
                                        class=if book.is_favorite { "favorite-btn active" } else { "favorite-btn" }
                                        on:click=move |_| toggle_favorite(id)
                                    >
                                        {if book.is_favorite { "❤ Favorited" } else { "♡ Add to favorites" }}
                                    </button>
                                </div>
                            </div>
                        }.into_any()
                    }
                }
            }}
        </div>
    }
}
