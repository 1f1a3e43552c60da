//! Storytime App
//!
//! Root component: seeds the store, provides the navigation context, and
//! dispatches the active screen. The bottom nav shows on the main tabs only.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    BookDetailScreen, BookReaderScreen, BottomNav, DashboardScreen, LibraryScreen, LoginScreen,
    ProfileScreen, SignupScreen, StatusScreen, StoriesScreen, TransitionScreen,
};
use crate::context::AppContext;
use crate::navigation::{Params, Screen};
use crate::store::{AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::new());
    let ctx = AppContext::new();

    provide_context(store);
    provide_context(ctx);

    // Deep link: "#ScreenName" in the URL selects the initial screen.
    // Unknown names are rejected loudly, never silently ignored.
    if let Some(window) = web_sys::window() {
        if let Ok(hash) = window.location().hash() {
            if let Some(name) = hash.strip_prefix('#').filter(|name| !name.is_empty()) {
                if let Err(err) = ctx.navigate_named(name, Params::new()) {
                    web_sys::console::error_1(&format!("[NAV] {}", err).into());
                }
            }
        }
    }

    // Navigation trace, mirrors what the platform router would log
    Effect::new(move |_| {
        let entry = ctx.current_entry();
        web_sys::console::log_1(
            &format!("[NAV] screen={} params={:?}", entry.screen.name(), entry.params).into(),
        );
    });

    let show_bottom_nav = move || {
        matches!(
            ctx.current_screen(),
            Screen::Dashboard | Screen::Stories | Screen::Library | Screen::Status | Screen::Profile
        )
    };

    view! {
        <div class="app-shell">
            <div class="screen-host">
                {move || match ctx.current_screen() {
                    Screen::Login => view! { <LoginScreen /> }.into_any(),
                    Screen::Signup => view! { <SignupScreen /> }.into_any(),
                    Screen::Dashboard => view! { <DashboardScreen /> }.into_any(),
                    Screen::Stories => view! { <StoriesScreen /> }.into_any(),
                    Screen::BookDetail => view! { <BookDetailScreen /> }.into_any(),
                    Screen::BookReader => view! { <BookReaderScreen /> }.into_any(),
                    Screen::Library => view! { <LibraryScreen /> }.into_any(),
                    Screen::Profile => view! { <ProfileScreen /> }.into_any(),
                    Screen::Status => view! { <StatusScreen /> }.into_any(),
                    Screen::Transition => view! { <TransitionScreen /> }.into_any(),
                }}
            </div>

            {move || show_bottom_nav().then(|| view! { <BottomNav /> })}
        </div>
    }
}
