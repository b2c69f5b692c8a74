use async_trait::async_trait;

use crate::domain::entities::LeaderboardEntry;

// Port for the persisted entry list; every write replaces the whole list.
#[async_trait]
pub trait LeaderboardStore: Send + Sync {
    async fn load(&self) -> Result<Vec<LeaderboardEntry>, String>;
    async fn save(&self, entries: &[LeaderboardEntry]) -> Result<(), String>;
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now_epoch_millis(&self) -> u64;
}
