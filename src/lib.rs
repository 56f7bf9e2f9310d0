//! MirrorX web client.
//!
//! The session store, route guard and verification flow under [`features`]
//! are plain Rust and run on any target; the Leptos application (`app`,
//! `components`, `routes`) is only built for `wasm32`.

#[cfg(target_arch = "wasm32")]
mod app;
#[path = "lib/mod.rs"]
pub mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
pub mod features;
#[cfg(target_arch = "wasm32")]
mod routes;

/// Installs the panic hook and logging, then mounts the application on `<body>`.
#[cfg(target_arch = "wasm32")]
pub fn start() {
    console_error_panic_hook::set_once();
    let config = app_lib::config::AppConfig::load();
    app_lib::logging::init(&config.log_filter);
    tracing::info!(commit = app_lib::GIT_COMMIT_HASH, "starting MirrorX web");
    leptos::mount::mount_to_body(app::App);
}
