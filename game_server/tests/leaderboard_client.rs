use game_server::interface_adapters::clients::leaderboard::{
    LeaderboardClient, LeaderboardClientError,
};
use std::path::PathBuf;
use std::time::Duration;

struct Leaderboard {
    client: LeaderboardClient,
    store_path: PathBuf,
}

impl Drop for Leaderboard {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.store_path);
    }
}

// A fresh leaderboard service with its own file, inside the current test runtime.
async fn start_leaderboard() -> Leaderboard {
    let store_path = std::env::temp_dir().join(format!(
        "game-server-client-{}.json",
        uuid::Uuid::new_v4()
    ));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");

    let path = store_path.clone();
    tokio::spawn(async move {
        leaderboard_server::run(listener, path)
            .await
            .expect("leaderboard server failed");
    });

    let client = LeaderboardClient::new(format!("http://{addr}"), Duration::from_secs(2))
        .expect("client builds");
    Leaderboard { client, store_path }
}

#[tokio::test]
async fn when_leaderboard_is_empty_then_fetch_returns_no_entries() {
    let leaderboard = start_leaderboard().await;

    let entries = leaderboard.client.fetch_top().await.expect("fetch succeeds");

    assert!(entries.is_empty());
}

#[tokio::test]
async fn when_score_is_submitted_then_outcome_carries_rank_and_board() {
    let leaderboard = start_leaderboard().await;
    leaderboard
        .client
        .submit_score("Bo", 90, 5)
        .await
        .expect("first submit");

    let outcome = leaderboard
        .client
        .submit_score("Ann", 42, 3)
        .await
        .expect("second submit");

    assert_eq!(outcome.player_position, Some(2));
    let names: Vec<&str> = outcome
        .leaderboard
        .iter()
        .map(|e| e.player_name.as_str())
        .collect();
    assert_eq!(names, vec!["Bo", "Ann"]);
    assert!(outcome.leaderboard.iter().all(|e| !e.id.is_empty()));

    let fetched = leaderboard.client.fetch_top().await.expect("fetch succeeds");
    assert_eq!(fetched.len(), 2);
}

#[tokio::test]
async fn when_wave_update_is_sent_then_the_higher_score_is_kept() {
    let leaderboard = start_leaderboard().await;

    leaderboard
        .client
        .update_score("Ann", 10, 2)
        .await
        .expect("insert update");
    leaderboard
        .client
        .update_score("Ann", 4, 3)
        .await
        .expect("lower update");
    leaderboard
        .client
        .update_score("Ann", 25, 4)
        .await
        .expect("higher update");

    let entries = leaderboard.client.fetch_top().await.expect("fetch succeeds");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].score, 25);
    assert_eq!(entries[0].wave, 4);
}

#[tokio::test]
async fn when_service_rejects_the_name_then_error_is_rejected_with_reason() {
    let leaderboard = start_leaderboard().await;

    let err = leaderboard
        .client
        .submit_score("   ", 1, 1)
        .await
        .expect_err("blank name is rejected");

    match err {
        LeaderboardClientError::Rejected(reason) => {
            assert_eq!(reason, "Player name cannot be empty");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn when_service_is_down_then_error_is_upstream_unavailable() {
    let client = LeaderboardClient::new("http://127.0.0.1:9", Duration::from_millis(500))
        .expect("client builds");

    let err = client.fetch_top().await.expect_err("nothing is listening");

    assert!(matches!(err, LeaderboardClientError::UpstreamUnavailable));
}
