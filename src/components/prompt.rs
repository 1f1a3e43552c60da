//! Alert / Confirm Prompts
//!
//! Thin wrappers over the platform prompt facility. Fire-and-forget for
//! alerts; confirm returns the user's choice.

/// Surface a single message (validation errors, success notices)
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Ask a yes/no question; defaults to "no" if the window is unavailable
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
