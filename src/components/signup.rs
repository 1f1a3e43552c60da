//! Signup Screen
//!
//! Registration form. Fields are checked in order (name, email, password,
//! confirmation, terms); success returns the user to the login screen.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::components::prompt;
use crate::context::use_app_context;
use crate::navigation::{Params, Screen};
use crate::validate::validate_signup;

const SUBMIT_DELAY_MS: u32 = 1500;

#[component]
pub fn SignupScreen() -> impl IntoView {
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (accept_terms, set_accept_terms) = signal(false);
    let (submitting, set_submitting) = signal(false);

    let pending = StoredValue::new_local(None::<Timeout>);
    on_cleanup(move || pending.set_value(None));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let result = validate_signup(
            &name.get(),
            &email.get(),
            &password.get(),
            &confirm_password.get(),
            accept_terms.get(),
        );
        if let Err(err) = result {
            prompt::alert(&err.to_string());
            return;
        }
        set_submitting.set(true);
        let handle = Timeout::new(SUBMIT_DELAY_MS, move || {
            set_submitting.set(false);
            prompt::alert("Account created! Please sign in.");
            ctx.navigate(Screen::Login, Params::new());
        });
        pending.set_value(Some(handle));
    };

    view! {
        <div class="screen signup-screen">
            <h1 class="app-title">"Create Account"</h1>

            <form class="auth-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
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
                <input
                    type="password"
                    placeholder="Confirm password"
                    prop:value=move || confirm_password.get()
                    on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                />
                <label class="accept-terms">
                    <input
                        type="checkbox"
                        prop:checked=move || accept_terms.get()
                        on:change=move |ev| set_accept_terms.set(event_target_checked(&ev))
                    />
                    "I accept the terms of use"
                </label>
                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating account..." } else { "Sign Up" }}
                </button>
            </form>

            <button class="link-btn" on:click=move |_| ctx.go_back()>
                "Back to Sign In"
            </button>
        </div>
    }
}
