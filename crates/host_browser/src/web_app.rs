//! Routed application shell for the browser/webview bundle.

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use shared_ui::{AppShell, CounterPage, DevicePage, HomePage};

#[component]
/// Client-side router around the shared pages.
pub fn BrowserApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Crossview" />
        <Meta name="description" content="Multi-host shared UI scaffolding." />

        <Router>
            <AppShell>
                <Routes>
                    <Route path="" view=HomePage />
                    <Route path="/counter" view=CounterPage />
                    <Route path="/device" view=DevicePage />
                </Routes>
            </AppShell>
        </Router>
    }
}
