//! Compile-time host-strategy selection for the shared browser/webview bundle.

use host_contract::{FormFactorDescriptor, FormFactorService, RenderModeSettings};

use crate::probe::{BrowserFormFactor, WebViewFormFactor};

/// Compile-time selected composition strategy for this bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Stand-alone browser (client-side) host.
    Browser,
    /// Embedded webview inside the native desktop/mobile shell.
    DesktopWebView,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::DesktopWebView => "desktop-webview",
        }
    }
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "desktop-webview")]
    {
        HostStrategy::DesktopWebView
    }

    #[cfg(not(feature = "desktop-webview"))]
    {
        HostStrategy::Browser
    }
}

/// Builds the render-mode settings for the selected strategy.
///
/// The embedded webview forces the static shell (every channel disabled); the
/// stand-alone browser host keeps the framework defaults.
pub const fn render_mode_settings() -> RenderModeSettings {
    match selected_host_strategy() {
        HostStrategy::Browser => RenderModeSettings::all_interactive(),
        HostStrategy::DesktopWebView => RenderModeSettings::static_shell(),
    }
}

/// Adapter enum erasing the strategy-selected probe behind [`FormFactorService`].
#[derive(Debug, Clone, Copy)]
pub enum FormFactorAdapter {
    /// Stand-alone browser probe.
    Browser(BrowserFormFactor),
    /// Embedded-webview probe.
    DesktopWebView(WebViewFormFactor),
}

impl FormFactorService for FormFactorAdapter {
    fn form_factor(&self) -> FormFactorDescriptor {
        match self {
            Self::Browser(probe) => probe.form_factor(),
            Self::DesktopWebView(probe) => probe.form_factor(),
        }
    }
}

/// Builds the form-factor adapter for the compile-time selected strategy.
pub fn form_factor_service() -> FormFactorAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => FormFactorAdapter::Browser(BrowserFormFactor),
        HostStrategy::DesktopWebView => FormFactorAdapter::DesktopWebView(WebViewFormFactor),
    }
}

#[cfg(test)]
mod tests {
    use host_contract::FormFactorKind;
    use pretty_assertions::assert_eq;

    use super::*;

    #[cfg(not(feature = "desktop-webview"))]
    #[test]
    fn browser_strategy_keeps_defaults_and_browser_probe() {
        assert_eq!(selected_host_strategy(), HostStrategy::Browser);
        assert_eq!(render_mode_settings(), RenderModeSettings::default());
        assert_eq!(
            form_factor_service().form_factor().kind,
            FormFactorKind::Browser
        );
    }

    #[cfg(feature = "desktop-webview")]
    #[test]
    fn webview_strategy_forces_the_static_shell() {
        assert_eq!(selected_host_strategy(), HostStrategy::DesktopWebView);
        assert_eq!(render_mode_settings(), RenderModeSettings::static_shell());
        assert_eq!(render_mode_settings().interactive_server, None);
        assert_eq!(render_mode_settings().interactive_auto, None);
        assert_eq!(render_mode_settings().interactive_webassembly, None);
        assert_ne!(
            form_factor_service().form_factor().kind,
            FormFactorKind::Browser
        );
    }
}
