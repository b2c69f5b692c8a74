use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::domain::entities::LeaderboardEntry;

// Request payload for submitting or updating a score. Fields stay loose so
// missing or mistyped values are reported as invalid input, not as a rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    #[serde(default)]
    pub player_name: Option<String>,
    #[serde(default)]
    pub score: Option<Number>,
    #[serde(default)]
    pub wave: Option<Number>,
}

// Response payload for fetching the leaderboard.
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub success: bool,
    pub leaderboard: Vec<LeaderboardEntry>,
}

// Response payload for a submitted score.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitScoreResponse {
    pub success: bool,
    pub message: &'static str,
    pub player_position: Option<u32>,
    pub leaderboard: Vec<LeaderboardEntry>,
}

// Response payload for an in-game update.
#[derive(Debug, Serialize)]
pub struct UpdateScoreResponse {
    pub success: bool,
}

// Error envelope shared by every route.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
