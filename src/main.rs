//! Storytime Frontend Entry Point

mod app;
mod catalog;
mod components;
mod context;
mod models;
mod navigation;
mod reader;
mod search;
mod store;
mod validate;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
