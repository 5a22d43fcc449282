//! Application chrome shared by every host.

use leptos::*;

use crate::context::use_render_settings;

#[component]
/// Page chrome: header navigation, content slot, and a footer render-mode line.
pub fn AppShell(children: Children) -> impl IntoView {
    let settings = use_render_settings();
    let mode_label = if settings.any_interactive() {
        "interactive"
    } else {
        "static"
    };

    view! {
        <div class="app-shell">
            <header class="app-header">
                <span class="app-title">"Crossview"</span>
                <nav class="app-nav">
                    <a href="/">"Home"</a>
                    <a href="/counter">"Counter"</a>
                    <a href="/device">"Device"</a>
                </nav>
            </header>
            <main class="app-content">{children()}</main>
            <footer class="app-footer">
                <span class="render-mode-label">{format!("render mode: {mode_label}")}</span>
            </footer>
        </div>
    }
}
