// Framework bootstrap for the leaderboard service.

use crate::frameworks::config;
use crate::interface_adapters::routes::app;
use crate::interface_adapters::state::{AppState, JsonFileLeaderboardStore};

use std::io::Result;
use std::net::SocketAddr;
use std::path::PathBuf;

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener, store_path: PathBuf) -> Result<()> {
    let address = listener.local_addr()?;
    let store = JsonFileLeaderboardStore::new(store_path);

    let created = store.ensure_exists().await.inspect_err(|e| {
        tracing::error!(path = %store.path().display(), error = %e, "failed to prepare leaderboard file");
    })?;
    if created {
        tracing::info!(path = %store.path().display(), "created empty leaderboard file");
    }

    let app = app(AppState { store });

    tracing::info!(%address, "listening");

    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::from(([0, 0, 0, 0], config::http_port()));

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, config::store_path()).await
}
