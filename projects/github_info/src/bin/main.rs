use axum::serve;
use projects_github_info::{
    config::{Config, ConfigError},
    router,
    state::AppState,
};
use thiserror::Error;
use tracing::{error, info, warn};
use utils_trace::tracing_init;

#[derive(Debug, Error)]
pub enum MainError {
    #[error("TracingInit: {source}")]
    TracingInit {
        #[source]
        source: utils_trace::TracingInitError,
    },
    #[error("Config: {source}")]
    Config {
        #[source]
        source: ConfigError,
    },
    #[error("HttpClientBuild: {source}")]
    HttpClientBuild {
        #[source]
        source: reqwest::Error,
    },
    #[error("TcpListenerBind: {source}")]
    TcpListenerBind {
        #[source]
        source: std::io::Error,
    },
    #[error("Serve: {source}")]
    Serve {
        #[source]
        source: std::io::Error,
    },
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
    let dotenv = dotenvy::dotenv();

    tracing_init("info").map_err(|source| MainError::TracingInit { source })?;

    if let Err(err) = dotenv {
        if !err.not_found() {
            warn!("Ignoring unreadable .env file: {err}");
        }
    }

    let config = Config::from_env().map_err(|source| MainError::Config { source })?;
    if config.github_token.is_none() {
        warn!("GITHUB_TOKEN is not set, contribution lookups will be rejected by GitHub");
    }
    info!(?config, "Loaded configuration");

    let addr = config.bind_addr;
    let state = AppState::new(config).map_err(|source| MainError::HttpClientBuild { source })?;
    let app = router::app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| MainError::TcpListenerBind { source })?;

    info!("Server running on addr: {}", addr);

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|source| MainError::Serve { source })?;

    info!("Server shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {err}");
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl+C, shutting down");
}
