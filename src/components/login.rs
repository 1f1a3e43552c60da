//! Login Screen
//!
//! Email/password form with a simulated sign-in round trip. Validation
//! surfaces the first failing rule as a single alert.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::components::prompt;
use crate::context::use_app_context;
use crate::navigation::{Params, Screen};
use crate::validate::validate_login;

/// Simulated network round trip
const SUBMIT_DELAY_MS: u32 = 1500;

#[component]
pub fn LoginScreen() -> impl IntoView {
    let ctx = use_app_context();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (remember_me, set_remember_me) = signal(false);
    let (submitting, set_submitting) = signal(false);

    // Pending sign-in timer; dropped (cancelled) if the screen unmounts
    let pending = StoredValue::new_local(None::<Timeout>);
    on_cleanup(move || pending.set_value(None));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        if let Err(err) = validate_login(&email.get(), &password.get()) {
            prompt::alert(&err.to_string());
            return;
        }
        set_submitting.set(true);
        let handle = Timeout::new(SUBMIT_DELAY_MS, move || {
            set_submitting.set(false);
            prompt::alert("Welcome back! You are signed in.");
        });
        pending.set_value(Some(handle));
    };

    view! {
        <div class="screen login-screen">
            <h1 class="app-title">"Storytime"</h1>
            <p class="app-tagline">"Stories for little listeners"</p>

            <form class="auth-form" on:submit=on_submit>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <label class="remember-me">
                    <input
                        type="checkbox"
                        prop:checked=move || remember_me.get()
                        on:change=move |ev| set_remember_me.set(event_target_checked(&ev))
                    />
                    "Remember me"
                </label>
                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>

            <div class="auth-links">
                <button class="link-btn" on:click=move |_| ctx.navigate(Screen::Signup, Params::new())>
                    "No account yet? Sign Up"
                </button>
                <button class="link-btn" on:click=move |_| ctx.navigate(Screen::Transition, Params::new())>
                    "Browse the library"
                </button>
            </div>
        </div>
    }
}
