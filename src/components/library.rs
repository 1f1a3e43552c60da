//! Library Screen
//!
//! The reader's favorited stories, with confirmed removal.

use leptos::prelude::*;

use crate::components::book_card::BookCard;
use crate::components::empty_state::EmptyState;
use crate::components::prompt;
use crate::store::{store_favorites, store_toggle_favorite, use_app_store};

#[component]
pub fn LibraryScreen() -> impl IntoView {
    let store = use_app_store();

    let remove_favorite = move |id: u32| {
        if prompt::confirm("Remove this story from your favorites?") {
            store_toggle_favorite(&store, id);
        }
    };

    view! {
        <div class="screen library-screen">
            <h1>"My Library"</h1>

            {move || {
                let favorites = store_favorites(&store);
                if favorites.is_empty() {
                    view! {
                        <EmptyState icon="❤" message="No favorites yet. Tap the heart on any story to keep it here." />
                    }.into_any()
                } else {
                    view! {
                        <div class="book-list">
                            <For
                                each=move || store_favorites(&store)
                                key=|book| book.id
                                children=move |book| {
                                    let id = book.id;
                                    view! {
                                        <div class="library-row">
                                            <BookCard book=book />
                                            <button
                                                class="remove-btn"
                                                on:click=move |_| remove_favorite(id)
                                            >
                                                "Remove"
                                            </button>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
