use crate::domain::entities::LeaderboardEntry;
use crate::domain::errors::LeaderboardError;
use crate::domain::ports::LeaderboardStore;
use crate::domain::ranking::{LEADERBOARD_SIZE, top_n};

// Fetch use case: the current top entries.
pub struct FetchLeaderboardUseCase<S> {
    pub store: S,
}

impl<S> FetchLeaderboardUseCase<S>
where
    S: LeaderboardStore,
{
    pub async fn execute(&self) -> Result<Vec<LeaderboardEntry>, LeaderboardError> {
        let entries = self
            .store
            .load()
            .await
            .map_err(|_| LeaderboardError::StorageFailure)?;

        Ok(top_n(entries, LEADERBOARD_SIZE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{FailureFlags, RecordingStore, test_entry};

    #[tokio::test]
    async fn when_store_has_many_entries_then_returns_top_ten_descending() {
        let entries = (0..14).map(|i| test_entry("Pilot", i * 7 % 23, i)).collect();
        let use_case = FetchLeaderboardUseCase {
            store: RecordingStore::new().with_entries(entries),
        };

        let top = use_case.execute().await.expect("expected fetch to succeed");

        assert_eq!(top.len(), 10);
        assert!(top.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[tokio::test]
    async fn when_store_is_empty_then_returns_empty_list() {
        let use_case = FetchLeaderboardUseCase {
            store: RecordingStore::new(),
        };

        let top = use_case.execute().await.expect("expected fetch to succeed");

        assert!(top.is_empty());
    }

    #[tokio::test]
    async fn when_store_load_fails_then_returns_storage_failure() {
        let use_case = FetchLeaderboardUseCase {
            store: RecordingStore::new().with_failures(FailureFlags {
                load: true,
                ..FailureFlags::default()
            }),
        };

        let result = use_case.execute().await;

        assert!(matches!(result, Err(LeaderboardError::StorageFailure)));
    }
}
