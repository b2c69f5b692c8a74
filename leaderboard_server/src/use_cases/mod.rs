pub mod fetch_leaderboard;
pub mod submit_score;
pub mod update_score;

#[cfg(test)]
pub(crate) mod test_support;

use crate::domain::errors::LeaderboardError;
use crate::domain::ranking::sanitize_name;
use crate::interface_adapters::protocol::ScoreRequest;

// Score payload after validation, shared by submit and update.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSubmission {
    pub player_name: String,
    pub score: u64,
    pub wave: u32,
}

// Score and wave must be non-negative integers; the name must survive trimming.
pub(crate) fn validate_score_request(
    payload: &ScoreRequest,
) -> Result<ScoreSubmission, LeaderboardError> {
    let raw_name = payload
        .player_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or(LeaderboardError::InvalidInput)?;
    let score = payload
        .score
        .as_ref()
        .and_then(|n| n.as_u64())
        .ok_or(LeaderboardError::InvalidInput)?;
    let wave = payload
        .wave
        .as_ref()
        .and_then(|n| n.as_u64())
        .and_then(|n| u32::try_from(n).ok())
        .ok_or(LeaderboardError::InvalidInput)?;

    let player_name = sanitize_name(raw_name).ok_or(LeaderboardError::EmptyName)?;

    Ok(ScoreSubmission {
        player_name,
        score,
        wave,
    })
}
