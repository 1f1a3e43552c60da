//! Bottom Navigation Bar
//!
//! Tab row shown on the main screens; highlights the active screen.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::navigation::{Params, Screen};

/// (screen, icon, label) per tab, in display order
const TABS: &[(Screen, &str, &str)] = &[
    (Screen::Dashboard, "🏠", "Home"),
    (Screen::Stories, "📚", "Stories"),
    (Screen::Library, "❤", "Library"),
    (Screen::Status, "⏱", "Status"),
    (Screen::Profile, "👤", "Profile"),
];

#[component]
pub fn BottomNav() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="bottom-nav">
            {TABS.iter().map(|(screen, icon, label)| {
                let screen = *screen;
                view! {
                    <button
                        class=move || if ctx.current_screen() == screen { "nav-item active" } else { "nav-item" }
                        on:click=move |_| {
                            if ctx.current_screen() != screen {
                                ctx.navigate(screen, Params::new());
                            }
                        }
                    >
                        <div class="nav-icon">{*icon}</div>
                        <div class="nav-label">{*label}</div>
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
