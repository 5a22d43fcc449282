//! Native desktop/mobile shell bootstrap for the shared webview bundle.
//!
//! The shell stays intentionally thin: the embedded bundle is `host_browser`
//! built with the `desktop-webview` feature, which forces static render modes
//! and binds the webview form-factor probe before anything mounts. No host
//! commands are exposed to the webview.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Starts the shell process and hands control to the webview runtime.
///
/// Does not return until process shutdown; a runtime startup failure is fatal.
pub fn run() {
    tauri::Builder::default()
        .run(tauri::generate_context!())
        .expect("host_desktop failed to run the shell runtime");
}
