#[tokio::main]
async fn main() -> std::io::Result<()> {
    leaderboard_server::run_with_config().await
}
