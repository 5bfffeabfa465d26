//! Joke List Frontend Entry Point

mod acquire;
mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod jokes;
mod models;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init(log::LevelFilter::Debug) {
        web_sys::console::error_1(&format!("logger already set: {}", e).into());
    }
    mount_to_body(App);
}
