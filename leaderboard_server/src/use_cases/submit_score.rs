use uuid::Uuid;

use super::validate_score_request;
use crate::domain::entities::LeaderboardEntry;
use crate::domain::errors::LeaderboardError;
use crate::domain::ports::{Clock, LeaderboardStore};
use crate::domain::ranking::{LEADERBOARD_SIZE, position_of, top_n};
use crate::interface_adapters::protocol::ScoreRequest;

// Result returned by the submit use case.
pub struct SubmitScoreResult {
    pub leaderboard: Vec<LeaderboardEntry>,
    // 1-based rank of the new entry when it made the top list.
    pub player_position: Option<u32>,
}

// Submit use case: appends a new entry for every finished game.
pub struct SubmitScoreUseCase<C, S> {
    pub clock: C,
    pub store: S,
}

impl<C, S> SubmitScoreUseCase<C, S>
where
    C: Clock,
    S: LeaderboardStore,
{
    pub async fn execute(&self, payload: ScoreRequest) -> Result<SubmitScoreResult, LeaderboardError> {
        let submission = validate_score_request(&payload)?;

        let mut entries = self
            .store
            .load()
            .await
            .map_err(|_| LeaderboardError::StorageFailure)?;

        let id = Uuid::new_v4().to_string();
        entries.push(LeaderboardEntry {
            player_name: submission.player_name,
            score: submission.score,
            wave: submission.wave,
            timestamp: self.clock.now_epoch_millis(),
            id: id.clone(),
        });

        self.store
            .save(&entries)
            .await
            .map_err(|_| LeaderboardError::StorageFailure)?;

        let leaderboard = top_n(entries, LEADERBOARD_SIZE);
        let player_position = position_of(&leaderboard, &id);

        Ok(SubmitScoreResult {
            leaderboard,
            player_position,
        })
    }
}
