use crate::interface_adapters::clients::leaderboard::LeaderboardClient;
use std::{sync::Arc, time::Duration};

// Per-connection session sizing, shared by every socket.
#[derive(Debug, Clone, Copy)]
pub struct SessionSettings {
    pub input_channel_capacity: usize,
    pub frame_broadcast_capacity: usize,
    pub tick_interval: Duration,
}

#[derive(Clone)]
pub struct AppState {
    // Leaderboard service used on join, on new waves and at game over.
    pub leaderboard: Arc<LeaderboardClient>,
    pub session_settings: SessionSettings,
}
