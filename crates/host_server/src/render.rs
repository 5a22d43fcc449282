//! Server-side rendering of the shared pages into full HTML documents.

use std::rc::Rc;
use std::sync::Arc;

use host_contract::{FixedFormFactorService, RenderModeToken};
use leptos::*;
use shared_ui::{
    provide_host_context, AppShell, CounterPage, DevicePage, ErrorPage, HomePage,
};

use crate::app::App;

/// Identifier for a server-rendered shared page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Landing page.
    Home,
    /// Counter page.
    Counter,
    /// Device/form-factor page.
    Device,
    /// Error page.
    Error,
}

impl Page {
    /// Document title for the page.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Counter => "Counter",
            Self::Device => "Device",
            Self::Error => "Error",
        }
    }
}

/// Renders one shared page to a complete HTML document.
///
/// The host context is provided inside the render root so the component tree
/// observes this process's settings and capability, exactly as the browser
/// hosts do at mount time. When the page render mode is non-interactive the
/// client boot script is omitted and the document is fully static.
pub fn render_page(app: &Arc<App>, page: Page) -> String {
    let settings = app.render_settings;
    let descriptor = app.form_factor.form_factor();
    let include_wasm = app.global_render_mode.is_interactive()
        && settings
            .resolve(RenderModeToken::InteractiveWebAssembly)
            .is_some();

    let body = leptos::ssr::render_to_string(move || {
        provide_host_context(
            settings,
            Rc::new(FixedFormFactorService::new(descriptor)),
        );
        match page {
            Page::Home => view! { <AppShell><HomePage /></AppShell> }.into_view(),
            Page::Counter => view! { <AppShell><CounterPage /></AppShell> }.into_view(),
            Page::Device => view! { <AppShell><DevicePage /></AppShell> }.into_view(),
            Page::Error => view! { <AppShell><ErrorPage /></AppShell> }.into_view(),
        }
    })
    .to_string();

    document(page.title(), &body, include_wasm)
}

fn document(title: &str, body: &str, include_wasm: bool) -> String {
    let client_boot = if include_wasm {
        concat!(
            "<script type=\"module\">",
            "import init from \"/pkg/browser_app.js\"; init();",
            "</script>"
        )
    } else {
        ""
    };
    format!(
        "<!DOCTYPE html>\
         <html lang=\"en\">\
         <head>\
         <meta charset=\"utf-8\"/>\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\
         <title>{title}</title>\
         <link rel=\"stylesheet\" href=\"/assets/app.css\"/>\
         </head>\
         <body>{body}{client_boot}</body>\
         </html>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Interactivity, ServerConfig};

    fn app_with(interactivity: Interactivity) -> Arc<App> {
        let mut config = ServerConfig::from_env().expect("config");
        config.interactivity = interactivity;
        Arc::new(App::new(config))
    }

    #[test]
    fn pages_render_as_complete_documents() {
        let app = app_with(Interactivity::ServerOnly);
        let html = render_page(&app, Page::Home);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Home</title>"));
        assert!(html.contains("Hello, world!"));
    }

    #[test]
    fn server_only_documents_omit_the_client_boot_script() {
        let app = app_with(Interactivity::ServerOnly);
        let html = render_page(&app, Page::Counter);
        assert!(!html.contains("/pkg/browser_app.js"));
    }

    #[test]
    fn wasm_composition_includes_the_client_boot_script() {
        let app = app_with(Interactivity::ServerAndWasm);
        let html = render_page(&app, Page::Counter);
        assert!(html.contains("/pkg/browser_app.js"));
    }

    #[test]
    fn device_page_reports_the_server_form_factor() {
        let app = app_with(Interactivity::ServerOnly);
        let html = render_page(&app, Page::Device);
        assert!(html.contains("server"));
        assert!(html.contains(std::env::consts::OS));
    }
}
