//! Browser host bootstrap and the desktop shell's embedded-webview bundle.
//!
//! Built with default features this crate is the stand-alone browser
//! (client-side) host. The `desktop-webview` feature re-targets the same
//! bundle for the native shell: the form-factor strategy swaps to the webview
//! probe and the render-mode settings are forced to the static shell before
//! any component mounts.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod probe;
mod strategy;
mod web_app;

pub use probe::{BrowserFormFactor, WebViewFormFactor};
pub use strategy::{
    form_factor_service, render_mode_settings, selected_host_strategy, FormFactorAdapter,
    HostStrategy,
};
pub use web_app::BrowserApp;

/// Runs the one-shot bootstrap sequence and mounts the shared application.
///
/// Order matters: render settings and the form-factor capability are
/// constructed for the selected strategy first, then provided as context
/// inside the render root, so no component can observe a pre-override state.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    use std::rc::Rc;

    console_error_panic_hook::set_once();

    let settings = strategy::render_mode_settings();
    let form_factor = Rc::new(strategy::form_factor_service());
    leptos::mount_to_body(move || {
        shared_ui::provide_host_context(settings, form_factor);
        leptos::view! { <BrowserApp /> }
    })
}
