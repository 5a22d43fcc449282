//! Server host entrypoint: linear one-shot bootstrap, then the serve loop.
//!
//! Bootstrap order mirrors the other hosts: load configuration, construct the
//! render-mode state, bind the platform capability, assemble the router, then
//! hand control to the serve loop. Any failure before serving is fatal.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod config;
mod middleware;
mod render;
mod routes;

use app::App;
use config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "host_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(
        environment = config.environment.as_str(),
        interactivity = config.interactivity.as_str(),
        "starting server host"
    );

    let app = Arc::new(App::new(config));
    let addr = SocketAddr::new(app.config.host, app.config.port);
    let router = routes::router(app.clone());

    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
