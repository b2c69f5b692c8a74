use crate::domain::errors::LeaderboardError;
use crate::interface_adapters::protocol::{
    ErrorResponse, HealthResponse, LeaderboardResponse, ScoreRequest, SubmitScoreResponse,
    UpdateScoreResponse,
};
use crate::interface_adapters::state::{AppState, SystemClock};
use crate::use_cases::fetch_leaderboard::FetchLeaderboardUseCase;
use crate::use_cases::submit_score::SubmitScoreUseCase;
use crate::use_cases::update_score::UpdateScoreUseCase;
use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use tracing::{debug, info, warn};

type ErrorReply = (StatusCode, Json<ErrorResponse>);

// Handler for reading the top of the leaderboard.
pub async fn fetch_leaderboard(
    State(state): State<AppState>,
) -> Result<Json<LeaderboardResponse>, ErrorReply> {
    let use_case = FetchLeaderboardUseCase {
        store: state.store.clone(),
    };

    let leaderboard = use_case
        .execute()
        .await
        .map_err(|err| map_leaderboard_error(err, LeaderboardErrorContext::Fetch))?;

    Ok(Json(LeaderboardResponse {
        success: true,
        leaderboard,
    }))
}

// Handler for submitting a finished game's score.
pub async fn submit_score(
    State(state): State<AppState>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<SubmitScoreResponse>, ErrorReply> {
    let Json(payload) = payload.map_err(reject_body)?;
    let use_case = SubmitScoreUseCase {
        clock: SystemClock,
        store: state.store.clone(),
    };

    let result = use_case
        .execute(payload)
        .await
        .map_err(|err| map_leaderboard_error(err, LeaderboardErrorContext::Submit))?;
    info!(position = ?result.player_position, "score submitted");

    Ok(Json(SubmitScoreResponse {
        success: true,
        message: "Score submitted successfully",
        player_position: result.player_position,
        leaderboard: result.leaderboard,
    }))
}

// Handler for in-game score updates.
pub async fn update_score(
    State(state): State<AppState>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<UpdateScoreResponse>, ErrorReply> {
    let Json(payload) = payload.map_err(reject_body)?;
    let use_case = UpdateScoreUseCase {
        clock: SystemClock,
        store: state.store.clone(),
    };

    let outcome = use_case
        .execute(payload)
        .await
        .map_err(|err| map_leaderboard_error(err, LeaderboardErrorContext::Update))?;
    debug!(?outcome, "score update applied");

    Ok(Json(UpdateScoreResponse { success: true }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> ErrorReply {
    (
        status,
        Json(ErrorResponse {
            success: false,
            error: message.to_string(),
        }),
    )
}

// Malformed bodies are invalid input like any other bad field.
fn reject_body(rejection: JsonRejection) -> ErrorReply {
    debug!(error = %rejection, "rejected request body");
    error_response(StatusCode::BAD_REQUEST, INVALID_INPUT_MESSAGE)
}

// Score and wave are counts, so fractions and negatives are rejected too.
const INVALID_INPUT_MESSAGE: &str = "Invalid input: playerName (string), score (non-negative integer), and wave (non-negative integer) required";

// Maps domain errors to HTTP responses by endpoint context.
enum LeaderboardErrorContext {
    Fetch,
    Submit,
    Update,
}

fn map_leaderboard_error(err: LeaderboardError, context: LeaderboardErrorContext) -> ErrorReply {
    match err {
        LeaderboardError::InvalidInput => {
            error_response(StatusCode::BAD_REQUEST, INVALID_INPUT_MESSAGE)
        }
        LeaderboardError::EmptyName => {
            error_response(StatusCode::BAD_REQUEST, "Player name cannot be empty")
        }
        LeaderboardError::StorageFailure => {
            let message = match context {
                LeaderboardErrorContext::Fetch => "Failed to load leaderboard",
                LeaderboardErrorContext::Submit => "Failed to submit score",
                LeaderboardErrorContext::Update => "Failed to update score",
            };
            warn!(%message, "leaderboard storage failure");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
        }
    }
}
