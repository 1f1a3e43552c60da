//! Transition Screen
//!
//! Splash shown while "loading" the library; auto-advances to the
//! dashboard. The timer is cancelled if the user leaves early.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::navigation::{Params, Screen};

const SPLASH_MS: u32 = 1800;

#[component]
pub fn TransitionScreen() -> impl IntoView {
    let ctx = use_app_context();

    let advance = StoredValue::new_local(None::<Timeout>);
    advance.set_value(Some(Timeout::new(SPLASH_MS, move || {
        ctx.navigate(Screen::Dashboard, Params::new());
    })));
    on_cleanup(move || advance.set_value(None));

    view! {
        <div class="screen transition-screen">
            <div class="splash-art">"📖"</div>
            <p class="splash-text">"Opening the library..."</p>
            <div class="pulsing-dots">
                <span class="dot"></span>
                <span class="dot"></span>
                <span class="dot"></span>
            </div>
        </div>
    }
}
