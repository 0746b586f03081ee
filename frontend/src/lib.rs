use web_sys::console;

mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        console::warn_1(&"Logger already initialized".into());
    }
    console::log_1(&"Starting Check-In Admin Frontend (wasm)".into());

    // Resolve runtime config early; the identity fetch awaits the same cached value.
    leptos::spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
    });

    router::mount_app();
}
