//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The book
//! collection is seeded from the mock catalog; swapping in a real data
//! source later only touches these helpers.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog;
use crate::models::Book;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The full book catalog; `is_favorite` is the only field that mutates
    pub books: Vec<Book>,
    /// Display name of the signed-in reader (mock)
    pub profile_name: String,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            books: catalog::seed_books(),
            profile_name: "Robin".to_string(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Look up a book by id
pub fn store_find_book(store: &AppStore, book_id: u32) -> Option<Book> {
    store.books().read().iter().find(|b| b.id == book_id).cloned()
}

/// Flip `is_favorite` on the matching book; returns the new value
pub fn toggle_favorite(books: &mut [Book], book_id: u32) -> Option<bool> {
    books.iter_mut().find(|b| b.id == book_id).map(|book| {
        book.is_favorite = !book.is_favorite;
        book.is_favorite
    })
}

/// Flip a book's favorite flag in the store; returns the new value
pub fn store_toggle_favorite(store: &AppStore, book_id: u32) -> Option<bool> {
    toggle_favorite(&mut store.books().write(), book_id)
}

/// All favorited books, in catalog order
pub fn store_favorites(store: &AppStore) -> Vec<Book> {
    store
        .books()
        .read()
        .iter()
        .filter(|b| b.is_favorite)
        .cloned()
        .collect()
}
