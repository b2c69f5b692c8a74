// Outbound HTTP clients for companion services.

pub mod leaderboard;
