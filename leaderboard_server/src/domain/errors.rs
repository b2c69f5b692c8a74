// Domain-level errors for leaderboard workflows.
#[derive(Debug)]
pub enum LeaderboardError {
    InvalidInput,
    EmptyName,
    StorageFailure,
}
