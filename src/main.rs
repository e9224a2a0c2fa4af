//! Axio Frontend Entry Point

mod app;
mod charts;
mod commands;
mod components;
mod config;
mod context;
mod conversation;
mod dataset;
mod error;
mod format;
mod markdown;
mod models;
mod panel;
mod reveal;
mod store;
mod ticker;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    // Only fails when a logger is already installed
    let _ = console_log::init_with_level(level);
    log::info!("[APP] Starting Axio");
    mount_to_body(App);
}
