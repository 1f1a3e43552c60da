//! Screen Navigation
//!
//! Named screens plus a history stack of (screen, params) entries.
//! Params travel as a string-keyed bag of JSON values; screens read the
//! top entry only.

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Parameter bag attached to a navigation entry
pub type Params = HashMap<String, Value>;

/// The closed set of screens in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Signup,
    Dashboard,
    Stories,
    BookDetail,
    BookReader,
    Library,
    Profile,
    Status,
    Transition,
}

impl Screen {
    pub const ALL: &'static [Screen] = &[
        Screen::Login,
        Screen::Signup,
        Screen::Dashboard,
        Screen::Stories,
        Screen::BookDetail,
        Screen::BookReader,
        Screen::Library,
        Screen::Profile,
        Screen::Status,
        Screen::Transition,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Screen::Login => "Login",
            Screen::Signup => "Signup",
            Screen::Dashboard => "Dashboard",
            Screen::Stories => "Stories",
            Screen::BookDetail => "BookDetail",
            Screen::BookReader => "BookReader",
            Screen::Library => "Library",
            Screen::Profile => "Profile",
            Screen::Status => "Status",
            Screen::Transition => "Transition",
        }
    }

    /// Resolve a screen by name. Unknown names are an error, not a no-op.
    pub fn from_name(name: &str) -> Result<Screen, NavError> {
        Screen::ALL
            .iter()
            .copied()
            .find(|s| s.name() == name)
            .ok_or_else(|| NavError::UnknownScreen(name.to_string()))
    }
}

/// Navigation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    UnknownScreen(String),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::UnknownScreen(name) => write!(f, "unknown screen: {}", name),
        }
    }
}

/// One point in navigation history
#[derive(Debug, Clone, PartialEq)]
pub struct NavEntry {
    pub screen: Screen,
    pub params: Params,
}

/// History stack with the active entry on top.
///
/// The stack is never empty: `new` seeds it with the start screen and
/// `go_back` refuses to pop the last entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    stack: Vec<NavEntry>,
}

impl Navigator {
    pub fn new(start: Screen) -> Self {
        Self {
            stack: vec![NavEntry {
                screen: start,
                params: Params::new(),
            }],
        }
    }

    /// The active entry (screen + params)
    pub fn current(&self) -> &NavEntry {
        self.stack.last().expect("navigation stack is never empty")
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Push a new entry for `screen`, carrying `params`
    pub fn navigate(&mut self, screen: Screen, params: Params) {
        self.stack.push(NavEntry { screen, params });
    }

    /// Push by screen name; unknown names fail loudly
    pub fn navigate_named(&mut self, name: &str, params: Params) -> Result<(), NavError> {
        let screen = Screen::from_name(name)?;
        self.navigate(screen, params);
        Ok(())
    }

    /// Pop the top entry. Returns false (and stays put) at the root.
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Merge fields into the current entry's params without pushing history
    pub fn set_params(&mut self, partial: Params) {
        let top = self.stack.last_mut().expect("navigation stack is never empty");
        top.params.extend(partial);
    }

    /// Drop all history and start over at `screen` (logout path)
    pub fn reset(&mut self, screen: Screen) {
        self.stack.clear();
        self.stack.push(NavEntry {
            screen,
            params: Params::new(),
        });
    }
}

/// Single-pair param bag, the common case for card taps
pub fn params_with(key: &str, value: Value) -> Params {
    let mut params = Params::new();
    params.insert(key.to_string(), value);
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn starts_at_the_start_screen_with_empty_params() {
        let nav = Navigator::new(Screen::Login);
        assert_eq!(nav.current().screen, Screen::Login);
        assert!(nav.current().params.is_empty());
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn navigate_carries_params() {
        let mut nav = Navigator::new(Screen::Login);
        nav.navigate(Screen::Stories, params_with("category", json!("fantasy")));
        assert_eq!(nav.current().screen, Screen::Stories);
        assert_eq!(
            nav.current().params.get("category").and_then(Value::as_str),
            Some("fantasy")
        );
    }

    #[test]
    fn go_back_restores_previous_entry_and_params() {
        let mut nav = Navigator::new(Screen::Login);
        nav.navigate(Screen::Stories, params_with("category", json!("fantasy")));
        nav.navigate(Screen::BookDetail, params_with("book_id", json!(3)));

        assert!(nav.go_back());
        assert_eq!(nav.current().screen, Screen::Stories);
        assert_eq!(
            nav.current().params.get("category").and_then(Value::as_str),
            Some("fantasy")
        );
    }

    #[test]
    fn go_back_is_a_no_op_at_the_root() {
        let mut nav = Navigator::new(Screen::Login);
        assert!(!nav.go_back());
        assert_eq!(nav.current().screen, Screen::Login);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn navigate_named_rejects_unknown_screens() {
        let mut nav = Navigator::new(Screen::Login);
        let err = nav.navigate_named("Settings", Params::new()).unwrap_err();
        assert_eq!(err, NavError::UnknownScreen("Settings".to_string()));
        // The stack is untouched on failure
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current().screen, Screen::Login);
    }

    #[test]
    fn navigate_named_resolves_every_registered_screen() {
        for screen in Screen::ALL {
            let mut nav = Navigator::new(Screen::Login);
            nav.navigate_named(screen.name(), Params::new()).unwrap();
            assert_eq!(nav.current().screen, *screen);
        }
    }

    #[test]
    fn set_params_merges_without_pushing_history() {
        let mut nav = Navigator::new(Screen::Login);
        nav.navigate(Screen::BookReader, params_with("book_id", json!(2)));
        nav.set_params(params_with("page", json!(4)));

        assert_eq!(nav.depth(), 2);
        assert_eq!(
            nav.current().params.get("book_id").and_then(Value::as_u64),
            Some(2)
        );
        assert_eq!(
            nav.current().params.get("page").and_then(Value::as_u64),
            Some(4)
        );
    }

    #[test]
    fn set_params_overwrites_existing_keys() {
        let mut nav = Navigator::new(Screen::BookReader);
        nav.set_params(params_with("page", json!(1)));
        nav.set_params(params_with("page", json!(2)));
        assert_eq!(
            nav.current().params.get("page").and_then(Value::as_u64),
            Some(2)
        );
    }

    #[test]
    fn reset_clears_history() {
        let mut nav = Navigator::new(Screen::Login);
        nav.navigate(Screen::Dashboard, Params::new());
        nav.navigate(Screen::Profile, Params::new());

        nav.reset(Screen::Login);
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current().screen, Screen::Login);
        assert!(!nav.go_back());
    }
}
