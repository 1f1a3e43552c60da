//! Profile Screen
//!
//! Mock reader profile and stats; logout clears navigation history back to
//! the login screen.

use leptos::prelude::*;

use crate::components::prompt;
use crate::context::use_app_context;
use crate::navigation::Screen;
use crate::store::{store_favorites, use_app_store, AppStateStoreFields};

#[component]
pub fn ProfileScreen() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let logout = move |_| {
        if prompt::confirm("Log out?") {
            ctx.reset(Screen::Login);
        }
    };

    view! {
        <div class="screen profile-screen">
            <h1>"Profile"</h1>

            <div class="profile-card">
                <div class="profile-avatar">"🦊"</div>
                <h2>{move || store.profile_name().get()}</h2>
                <p class="profile-plan">"Little Listener plan"</p>
            </div>

            <div class="profile-stats">
                <div class="stat">
                    <span class="stat-value">{move || store.books().read().len()}</span>
                    <span class="stat-label">"stories in catalog"</span>
                </div>
                <div class="stat">
                    <span class="stat-value">{move || store_favorites(&store).len()}</span>
                    <span class="stat-label">"favorites"</span>
                </div>
                <div class="stat">
                    <span class="stat-value">"12"</span>
                    <span class="stat-label">"nights in a row"</span>
                </div>
            </div>

            <button class="logout-btn" on:click=logout>"Log Out"</button>
        </div>
    }
}
