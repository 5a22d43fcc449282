//! Binary entrypoint for the browser-hosted bundle.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    host_browser::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary targets the browser/webview workflow. Build `browser_app` for wasm32 with the `csr` feature (see `cargo xtask build-web`)."
    );
}
