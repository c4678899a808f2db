//! GoRestaurant Frontend Entry Point

mod app;
mod cache;
mod commands;
mod components;
mod config;
mod context;
mod loader;
mod menu;
mod modal;
mod models;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    _ = console_log::init_with_level(config.log_level);

    mount_to_body(move || view! { <App config=config /> });
}
