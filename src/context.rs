//! Application Context
//!
//! The navigator behind a signal, provided via Leptos Context API.
//! Screens navigate through these helpers and re-render off
//! `current_screen()`.

use leptos::prelude::*;

use crate::navigation::{NavEntry, NavError, Navigator, Params, Screen};

/// App-wide navigation handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    nav: RwSignal<Navigator>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            nav: RwSignal::new(Navigator::new(Screen::Login)),
        }
    }

    /// The active screen (tracked; drives the App dispatch)
    pub fn current_screen(&self) -> Screen {
        self.nav.with(|nav| nav.current().screen)
    }

    /// Snapshot of the active entry, params included
    pub fn current_entry(&self) -> NavEntry {
        self.nav.with(|nav| nav.current().clone())
    }

    pub fn navigate(&self, screen: Screen, params: Params) {
        self.nav.update(|nav| nav.navigate(screen, params));
    }

    /// Navigate by screen name (deep links); unknown names fail loudly
    pub fn navigate_named(&self, name: &str, params: Params) -> Result<(), NavError> {
        let mut result = Ok(());
        self.nav.update(|nav| result = nav.navigate_named(name, params));
        result
    }

    pub fn go_back(&self) {
        self.nav.update(|nav| {
            nav.go_back();
        });
    }

    pub fn set_params(&self, partial: Params) {
        self.nav.update(|nav| nav.set_params(partial));
    }

    /// Logout path: drop all history, back to the start screen
    pub fn reset(&self, screen: Screen) {
        self.nav.update(|nav| nav.reset(screen));
    }
}

/// Get the navigation context (provided in `App`)
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
