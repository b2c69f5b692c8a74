// Framework bootstrap for the game server runtime.

use crate::frameworks::config;
use crate::interface_adapters::clients::leaderboard::LeaderboardClient;
use crate::interface_adapters::http::health_handler;
use crate::interface_adapters::net::ws_handler;
use crate::interface_adapters::state::{AppState, SessionSettings};

use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::time::Duration;
use std::{io::Result, sync::Arc};

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

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ws", get(ws_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

pub async fn run(listener: tokio::net::TcpListener) -> Result<()> {
    let state = build_state(
        config::leaderboard_service_url(),
        config::leaderboard_timeout(),
    )?;
    serve(listener, state).await
}

// Serves the router with a prepared state.
pub async fn serve(listener: tokio::net::TcpListener, state: Arc<AppState>) -> Result<()> {
    let address = listener.local_addr()?;
    let app = router(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::from(([127, 0, 0, 1], config::http_port()));

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener).await
}

pub fn build_state(leaderboard_url: String, leaderboard_timeout: Duration) -> Result<Arc<AppState>> {
    let leaderboard = LeaderboardClient::new(leaderboard_url.clone(), leaderboard_timeout)
        .map_err(|e| std::io::Error::other(format!("failed to initialize leaderboard client: {e}")))?;
    tracing::debug!(
        leaderboard_url = %leaderboard_url,
        leaderboard_timeout_ms = leaderboard_timeout.as_millis(),
        "leaderboard client configured"
    );

    Ok(Arc::new(AppState {
        leaderboard: Arc::new(leaderboard),
        session_settings: SessionSettings {
            input_channel_capacity: config::INPUT_CHANNEL_CAPACITY,
            frame_broadcast_capacity: config::FRAME_BROADCAST_CAPACITY,
            tick_interval: config::TICK_INTERVAL,
        },
    }))
}
