//! Book Card Component
//!
//! Compact catalog card; tapping it opens the book's detail screen.

use leptos::prelude::*;
use serde_json::json;

use crate::context::use_app_context;
use crate::models::Book;
use crate::navigation::{params_with, Screen};

#[component]
pub fn BookCard(book: Book) -> impl IntoView {
    let ctx = use_app_context();
    let book_id = book.id;

    view! {
        <div
            class="book-card"
            on:click=move |_| ctx.navigate(Screen::BookDetail, params_with("book_id", json!(book_id)))
        >
            <img class="book-cover" src=book.image.clone() alt=book.title.clone() />
            <div class="book-card-body">
                <h3 class="book-title">{book.title.clone()}</h3>
                <p class="book-author">{book.author.clone()}</p>
                <div class="book-meta">
                    <span class="book-rating">{format!("★ {:.1}", book.rating)}</span>
                    <span class="book-duration">{format!("{} min", book.duration_minutes)}</span>
                    <span class="book-category">{book.category.label()}</span>
                    <span class="book-ages">{format!("ages {}", book.age_range)}</span>
                </div>
            </div>
            {book.is_favorite.then(|| view! { <span class="favorite-badge">"❤"</span> })}
        </div>
    }
}
