// One-time game server bootstrap shared by the integration tests in this binary.
// A real leaderboard service runs next to it, seeded with one entry.
use std::{
    sync::{Arc, OnceLock},
    time::Duration,
};

pub const SEED_PLAYER: &str = "Seed";
pub const SEED_SCORE: u64 = 77;

static SERVER_ADDR: OnceLock<String> = OnceLock::new();
static SERVER_READY: OnceLock<()> = OnceLock::new();

// Ensure the test server is running and return its `host:port`.
pub fn ensure_server() -> &'static str {
    SERVER_READY.get_or_init(|| {
        let published_addr = Arc::new(OnceLock::<String>::new());
        let published_addr_thread = Arc::clone(&published_addr);
        // Spawn an OS thread so the servers outlive individual `#[tokio::test]` runtimes.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                let leaderboard_url = start_leaderboard().await;

                // Ephemeral port avoids collisions with a locally running game server.
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                let addr = listener.local_addr().expect("get local addr");
                let state = game_server::build_state(leaderboard_url, Duration::from_secs(2))
                    .expect("build game server state");
                let _ = published_addr_thread.set(addr.to_string());
                game_server::serve(listener, state)
                    .await
                    .expect("server failed");
            });
        });
        wait_for_readiness(published_addr);
    });

    SERVER_ADDR
        .get()
        .expect("server addr should be initialized")
        .as_str()
}

async fn start_leaderboard() -> String {
    let store_path = std::env::temp_dir().join(format!(
        "game-server-it-leaderboard-{}.json",
        uuid::Uuid::new_v4()
    ));
    let seed = serde_json::json!([{
        "playerName": SEED_PLAYER,
        "score": SEED_SCORE,
        "wave": 4,
        "timestamp": 1,
        "id": "seed-entry"
    }]);
    std::fs::write(&store_path, seed.to_string()).expect("seed leaderboard file");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind leaderboard test port");
    let addr = listener.local_addr().expect("get leaderboard addr");
    tokio::spawn(async move {
        leaderboard_server::run(listener, store_path)
            .await
            .expect("leaderboard server failed");
    });
    format!("http://{addr}")
}

fn wait_for_readiness(published_addr: Arc<OnceLock<String>>) {
    let addr = loop {
        if let Some(addr) = published_addr.get() {
            break addr.clone();
        }
        std::thread::sleep(Duration::from_millis(10));
    };

    let _ = SERVER_ADDR.set(addr.clone());

    // Retry for a short period to avoid racing server bind/accept.
    for _ in 0..100 {
        if std::net::TcpStream::connect(&addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    panic!("server did not become ready in time");
}
