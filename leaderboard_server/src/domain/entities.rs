use serde::{Deserialize, Serialize};

// One persisted leaderboard row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub player_name: String,
    pub score: u64,
    pub wave: u32,
    // Epoch milliseconds of the submission or last update.
    pub timestamp: u64,
    pub id: String,
}
