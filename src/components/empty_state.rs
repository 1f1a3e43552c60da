//! Empty State Component
//!
//! Placeholder shown when a list has nothing to display.

use leptos::prelude::*;

#[component]
pub fn EmptyState(
    #[prop(into)] icon: String,
    #[prop(into)] message: String,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state-icon">{icon}</div>
            <p class="empty-state-message">{message}</p>
        </div>
    }
}
