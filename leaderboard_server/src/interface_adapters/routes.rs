use crate::interface_adapters::handlers::{fetch_leaderboard, health, submit_score, update_score};
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/leaderboard",
            get(fetch_leaderboard).post(submit_score),
        )
        .route("/api/leaderboard/update", post(update_score))
        .route("/health", get(health))
        .with_state(state)
}
