// Per-test leaderboard server bootstrap; each server gets its own file.
use std::path::PathBuf;

pub struct TestServer {
    pub base_url: String,
    pub store_path: PathBuf,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.store_path);
    }
}

// Start a server on an ephemeral port inside the current test runtime.
pub async fn spawn_server() -> TestServer {
    let store_path =
        std::env::temp_dir().join(format!("leaderboard-it-{}.json", uuid::Uuid::new_v4()));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");

    let path = store_path.clone();
    tokio::spawn(async move {
        leaderboard_server::run(listener, path)
            .await
            .expect("server failed");
    });

    // The file is created before serving starts.
    for _ in 0..100 {
        if store_path.exists() {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }

    TestServer {
        base_url: format!("http://{addr}"),
        store_path,
    }
}
