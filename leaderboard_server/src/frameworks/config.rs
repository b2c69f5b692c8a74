use std::{env, path::PathBuf};

pub fn http_port() -> u16 {
    env::var("LEADERBOARD_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3001)
}

// Path of the JSON file backing the leaderboard.
pub fn store_path() -> PathBuf {
    env::var("LEADERBOARD_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("leaderboard.json"))
}
