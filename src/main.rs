//! Labelmaker Frontend Entry Point

mod api;
mod config;
mod context;
mod crud;
mod draft;
mod error;
mod filter;
mod markup;
mod models;
mod page;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_window();
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::default()
            .set_max_level(config.log_level)
            .build(),
    );
    tracing::info!("Starting labelmaker UI");

    mount_to_body(move || view! { <App config=config.clone()/> });
}
