use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::entities::LeaderboardEntry;
use crate::domain::ports::{Clock, LeaderboardStore};

// Application state shared by the handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: JsonFileLeaderboardStore,
}

// Leaderboard persisted as a pretty-printed JSON array in a single file.
// Every write rewrites the whole file; concurrent writers are not coordinated.
#[derive(Clone, Debug)]
pub struct JsonFileLeaderboardStore {
    path: Arc<PathBuf>,
}

impl JsonFileLeaderboardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    // Creates the file with an empty list when it does not exist yet.
    pub async fn ensure_exists(&self) -> std::io::Result<bool> {
        if tokio::fs::try_exists(self.path.as_path()).await? {
            return Ok(false);
        }
        tokio::fs::write(self.path.as_path(), "[]").await?;
        Ok(true)
    }
}

#[async_trait]
impl LeaderboardStore for JsonFileLeaderboardStore {
    async fn load(&self) -> Result<Vec<LeaderboardEntry>, String> {
        let data = match tokio::fs::read_to_string(self.path.as_path()).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(format!("failed to read leaderboard file: {e}")),
        };

        serde_json::from_str(&data).map_err(|e| format!("failed to parse leaderboard file: {e}"))
    }

    async fn save(&self, entries: &[LeaderboardEntry]) -> Result<(), String> {
        let data = serde_json::to_string_pretty(entries)
            .map_err(|e| format!("failed to serialize leaderboard: {e}"))?;
        tokio::fs::write(self.path.as_path(), data)
            .await
            .map_err(|e| format!("failed to write leaderboard file: {e}"))
    }
}

// System clock adapter used by leaderboard use cases.
#[derive(Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}
