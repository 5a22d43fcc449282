//! Environment-derived server configuration.

use std::net::IpAddr;
use std::path::PathBuf;

use host_contract::RenderModeSettings;
use thiserror::Error;

/// Deployment environment controlling diagnostics and redirect behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Local development: verbose diagnostics, no redirect, plain 404s.
    Development,
    /// Production: error page for failures, forwarded-proto HTTPS redirect.
    Production,
}

impl Environment {
    /// Returns whether this is the development environment.
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }

    /// Returns a stable string token for logging.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

/// Interactivity channels the server composition enables.
///
/// The two historical server bootstrap variants collapse into this value:
/// server-push only, or server-push plus the in-browser (wasm) channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interactivity {
    /// Server-push interactivity only.
    ServerOnly,
    /// Server-push plus in-browser (wasm) interactivity.
    ServerAndWasm,
}

impl Interactivity {
    /// Returns a stable string token for logging.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ServerOnly => "server",
            Self::ServerAndWasm => "server+wasm",
        }
    }

    /// Render-mode settings matching this composition.
    pub const fn render_settings(self) -> RenderModeSettings {
        match self {
            Self::ServerOnly => RenderModeSettings::server_only(),
            Self::ServerAndWasm => RenderModeSettings::all_interactive(),
        }
    }
}

/// Typed server configuration loaded once during bootstrap.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address.
    pub host: IpAddr,
    /// Bind port.
    pub port: u16,
    /// Deployment environment.
    pub environment: Environment,
    /// Enabled interactivity channels.
    pub interactivity: Interactivity,
    /// Directory served under `/assets`.
    pub static_dir: PathBuf,
    /// Staged wasm bundle directory served under `/pkg` when enabled.
    pub wasm_dir: PathBuf,
}

/// Configuration parsing failures; fatal during bootstrap.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held a value the typed field rejects.
    #[error("invalid value for {name}: {value:?}")]
    Invalid {
        /// Environment variable name.
        name: &'static str,
        /// Rejected raw value.
        value: String,
    },
}

impl ServerConfig {
    /// Loads configuration from the process environment with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when a set variable fails to parse; unset variables
    /// fall back to their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match lookup("APP_HOST") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "APP_HOST",
                value: raw,
            })?,
            None => IpAddr::from([127, 0, 0, 1]),
        };
        let port = match lookup("APP_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "APP_PORT",
                value: raw,
            })?,
            None => 8080,
        };
        let environment = match lookup("APP_ENVIRONMENT").as_deref() {
            None | Some("development") => Environment::Development,
            Some("production") => Environment::Production,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "APP_ENVIRONMENT",
                    value: other.to_string(),
                })
            }
        };
        let interactivity = match lookup("APP_INTERACTIVITY").as_deref() {
            None | Some("server") => Interactivity::ServerOnly,
            Some("server+wasm") => Interactivity::ServerAndWasm,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "APP_INTERACTIVITY",
                    value: other.to_string(),
                })
            }
        };
        let static_dir = lookup("APP_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("crates/host_server/assets"));
        let wasm_dir = lookup("APP_WASM_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("crates/host_browser/dist/pkg"));

        Ok(Self {
            host,
            port,
            environment,
            interactivity,
            static_dir,
            wasm_dir,
        })
    }
}
