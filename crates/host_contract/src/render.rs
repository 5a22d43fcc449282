//! Render-mode configuration constructed once per host bootstrap.
//!
//! Hosts build a [`RenderModeSettings`] value during their one-shot bootstrap
//! sequence and inject it into the component tree by context. There is no
//! process-global holder: because the value is constructed before any
//! component mounts and never mutated afterwards, every reader observes the
//! same configuration for the process lifetime.

use serde::{Deserialize, Serialize};

/// Interactivity channel token understood by the rendering runtime.
///
/// Shared components treat tokens as opaque: they test for presence through
/// [`RenderModeSettings::resolve`] and never interpret a variant beyond that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderModeToken {
    /// Server-push interactivity over a persistent connection.
    InteractiveServer,
    /// Runtime-selected choice between server and in-browser interactivity.
    InteractiveAuto,
    /// In-browser (wasm) interactivity.
    InteractiveWebAssembly,
}

impl RenderModeToken {
    /// Returns a stable string token for diagnostics and logging.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InteractiveServer => "interactive-server",
            Self::InteractiveAuto => "interactive-auto",
            Self::InteractiveWebAssembly => "interactive-webassembly",
        }
    }
}

/// Per-host render-mode configuration for the shared component library.
///
/// A populated slot enables that interactivity channel; a `None` slot forces
/// components referencing it to render statically. Value semantics keep the
/// override idempotent: applying [`RenderModeSettings::static_shell`] twice is
/// indistinguishable from applying it once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderModeSettings {
    /// Server-push interactivity channel.
    pub interactive_server: Option<RenderModeToken>,
    /// Automatic server-or-browser interactivity channel.
    pub interactive_auto: Option<RenderModeToken>,
    /// In-browser (wasm) interactivity channel.
    pub interactive_webassembly: Option<RenderModeToken>,
}

impl Default for RenderModeSettings {
    fn default() -> Self {
        Self::all_interactive()
    }
}

impl RenderModeSettings {
    /// Framework-default configuration: every channel enabled.
    pub const fn all_interactive() -> Self {
        Self {
            interactive_server: Some(RenderModeToken::InteractiveServer),
            interactive_auto: Some(RenderModeToken::InteractiveAuto),
            interactive_webassembly: Some(RenderModeToken::InteractiveWebAssembly),
        }
    }

    /// Static-shell override used by the embedded-webview composition: every
    /// channel disabled so components render non-interactively.
    pub const fn static_shell() -> Self {
        Self {
            interactive_server: None,
            interactive_auto: None,
            interactive_webassembly: None,
        }
    }

    /// Server-only configuration: the server-push channel enabled, in-browser
    /// channels disabled.
    pub const fn server_only() -> Self {
        Self {
            interactive_server: Some(RenderModeToken::InteractiveServer),
            interactive_auto: None,
            interactive_webassembly: None,
        }
    }

    /// Returns the configured token for a requested channel, or `None` when
    /// that channel is disabled on this host.
    pub const fn resolve(self, requested: RenderModeToken) -> Option<RenderModeToken> {
        match requested {
            RenderModeToken::InteractiveServer => self.interactive_server,
            RenderModeToken::InteractiveAuto => self.interactive_auto,
            RenderModeToken::InteractiveWebAssembly => self.interactive_webassembly,
        }
    }

    /// Returns whether any interactivity channel is enabled.
    pub const fn any_interactive(self) -> bool {
        self.interactive_server.is_some()
            || self.interactive_auto.is_some()
            || self.interactive_webassembly.is_some()
    }
}

/// Single-token render-mode selection used by the server host.
///
/// The server bootstrap constructs this once (typically
/// [`GlobalRenderMode::interactive_server`]) and carries it in the shared
/// application state; server-rendered pages read it to pick their render mode
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GlobalRenderMode(Option<RenderModeToken>);

impl GlobalRenderMode {
    /// Unset render mode: pages fall back to static rendering.
    pub const fn unset() -> Self {
        Self(None)
    }

    /// Server-push interactive render mode.
    pub const fn interactive_server() -> Self {
        Self(Some(RenderModeToken::InteractiveServer))
    }

    /// Returns the selected token, if any.
    pub const fn token(self) -> Option<RenderModeToken> {
        self.0
    }

    /// Returns whether an interactive render mode is selected.
    pub const fn is_interactive(self) -> bool {
        self.0.is_some()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_enable_every_channel() {
        let settings = RenderModeSettings::default();
        assert_eq!(
            settings.interactive_server,
            Some(RenderModeToken::InteractiveServer)
        );
        assert_eq!(
            settings.interactive_auto,
            Some(RenderModeToken::InteractiveAuto)
        );
        assert_eq!(
            settings.interactive_webassembly,
            Some(RenderModeToken::InteractiveWebAssembly)
        );
        assert!(settings.any_interactive());
    }

    #[test]
    fn static_shell_disables_every_channel() {
        let settings = RenderModeSettings::static_shell();
        assert_eq!(settings.interactive_server, None);
        assert_eq!(settings.interactive_auto, None);
        assert_eq!(settings.interactive_webassembly, None);
        assert!(!settings.any_interactive());
    }

    #[test]
    fn static_shell_is_idempotent() {
        // Re-applying the override must be indistinguishable from applying it once.
        let once = RenderModeSettings::static_shell();
        let twice = RenderModeSettings::static_shell();
        assert_eq!(once, twice);

        let mut settings = RenderModeSettings::default();
        settings = RenderModeSettings::static_shell();
        assert_eq!(settings, once);
        settings = RenderModeSettings::static_shell();
        assert_eq!(settings, once);
    }

    #[test]
    fn resolve_maps_each_channel_to_its_slot() {
        let settings = RenderModeSettings::server_only();
        assert_eq!(
            settings.resolve(RenderModeToken::InteractiveServer),
            Some(RenderModeToken::InteractiveServer)
        );
        assert_eq!(settings.resolve(RenderModeToken::InteractiveAuto), None);
        assert_eq!(
            settings.resolve(RenderModeToken::InteractiveWebAssembly),
            None
        );
    }

    #[test]
    fn global_render_mode_defaults_to_unset() {
        assert_eq!(GlobalRenderMode::default(), GlobalRenderMode::unset());
        assert!(!GlobalRenderMode::default().is_interactive());
        assert_eq!(
            GlobalRenderMode::interactive_server().token(),
            Some(RenderModeToken::InteractiveServer)
        );
    }
}
