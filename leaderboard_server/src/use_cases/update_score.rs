use uuid::Uuid;

use super::validate_score_request;
use crate::domain::entities::LeaderboardEntry;
use crate::domain::errors::LeaderboardError;
use crate::domain::ports::{Clock, LeaderboardStore};
use crate::interface_adapters::protocol::ScoreRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    // The player's latest entry got the higher score.
    Raised,
    // The stored score was already at least as high.
    Unchanged,
    // No entry existed for the player yet.
    Inserted,
}

// In-game progress update keyed by the sanitized player name.
pub struct UpdateScoreUseCase<C, S> {
    pub clock: C,
    pub store: S,
}

impl<C, S> UpdateScoreUseCase<C, S>
where
    C: Clock,
    S: LeaderboardStore,
{
    pub async fn execute(&self, payload: ScoreRequest) -> Result<UpdateOutcome, LeaderboardError> {
        let submission = validate_score_request(&payload)?;

        let mut entries = self
            .store
            .load()
            .await
            .map_err(|_| LeaderboardError::StorageFailure)?;
        let now = self.clock.now_epoch_millis();

        let outcome = match most_recent_index(&entries, &submission.player_name) {
            Some(index) => {
                let entry = &mut entries[index];
                if submission.score <= entry.score {
                    return Ok(UpdateOutcome::Unchanged);
                }
                entry.score = submission.score;
                entry.wave = submission.wave;
                entry.timestamp = now;
                UpdateOutcome::Raised
            }
            None => {
                entries.push(LeaderboardEntry {
                    player_name: submission.player_name,
                    score: submission.score,
                    wave: submission.wave,
                    timestamp: now,
                    id: Uuid::new_v4().to_string(),
                });
                UpdateOutcome::Inserted
            }
        };

        self.store
            .save(&entries)
            .await
            .map_err(|_| LeaderboardError::StorageFailure)?;

        Ok(outcome)
    }
}

// Latest timestamp wins; on a tie the later stored entry does.
fn most_recent_index(entries: &[LeaderboardEntry], player_name: &str) -> Option<usize> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.player_name == player_name)
        .max_by_key(|(_, entry)| entry.timestamp)
        .map(|(index, _)| index)
}
