//! Process-wide application state assembled during bootstrap.

use std::sync::Arc;

use host_contract::{
    FormFactorDescriptor, FormFactorKind, FormFactorService, GlobalRenderMode, RenderModeSettings,
};
use rand::{distributions::Alphanumeric, Rng};

use crate::config::ServerConfig;

/// Server-side form-factor capability implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerFormFactor;

impl FormFactorService for ServerFormFactor {
    fn form_factor(&self) -> FormFactorDescriptor {
        FormFactorDescriptor::new(FormFactorKind::Server, std::env::consts::OS)
    }
}

/// Process-scoped anti-forgery token for the double-submit guard.
#[derive(Debug, Clone)]
pub struct AntiforgeryState {
    /// Token value compared against the request header echo.
    pub token: String,
}

impl AntiforgeryState {
    /// Generates a fresh random token.
    pub fn generate() -> Self {
        let token = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();
        Self { token }
    }
}

/// Application state shared across all handlers.
pub struct App {
    /// Loaded server configuration.
    pub config: ServerConfig,
    /// Single-token render mode read by server-rendered pages.
    pub global_render_mode: GlobalRenderMode,
    /// Render-mode settings injected into the shared component tree.
    pub render_settings: RenderModeSettings,
    /// Bound platform capability (one implementation per process).
    pub form_factor: Arc<dyn FormFactorService + Send + Sync>,
    /// Anti-forgery token state.
    pub antiforgery: AntiforgeryState,
}

impl App {
    /// Assembles the application state from loaded configuration.
    ///
    /// Runs once per process, before the router is built, so every render
    /// observes the same settings.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            global_render_mode: GlobalRenderMode::interactive_server(),
            render_settings: config.interactivity.render_settings(),
            form_factor: Arc::new(ServerFormFactor),
            antiforgery: AntiforgeryState::generate(),
            config,
        }
    }
}
