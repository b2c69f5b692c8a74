use std::{env, time::Duration};

// Runtime/server constants (not gameplay tuning).

pub fn http_port() -> u16 {
    env::var("GAME_SERVER_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000)
}

pub fn leaderboard_service_url() -> String {
    env::var("LEADERBOARD_SERVICE_URL").unwrap_or_else(|_| "http://127.0.0.1:3001".to_string())
}

pub fn leaderboard_timeout() -> Duration {
    let millis = env::var("LEADERBOARD_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(1500);
    Duration::from_millis(millis)
}

pub const INPUT_CHANNEL_CAPACITY: usize = 256;
pub const FRAME_BROADCAST_CAPACITY: usize = 16;

pub const TICK_INTERVAL: Duration = Duration::from_millis(1000 / 60);
