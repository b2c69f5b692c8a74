use serde::{Deserialize, Serialize};
use std::time::Duration;

// Entry as returned by the leaderboard service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub player_name: String,
    pub score: u64,
    pub wave: u32,
    #[serde(default)]
    pub timestamp: u64,
    #[serde(default)]
    pub id: String,
}

#[derive(Debug, Clone, Default)]
pub struct SubmitOutcome {
    pub leaderboard: Vec<LeaderboardEntry>,
    pub player_position: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreRequest<'a> {
    player_name: &'a str,
    score: u64,
    wave: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LeaderboardResponse {
    #[serde(default)]
    leaderboard: Vec<LeaderboardEntry>,
    #[serde(default)]
    player_position: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug)]
pub enum LeaderboardClientError {
    // The service answered 4xx with a reason.
    Rejected(String),
    UpstreamUnavailable,
}

// Thin reqwest client for the leaderboard service.
#[derive(Clone)]
pub struct LeaderboardClient {
    http: reqwest::Client,
    base_url: String,
}

impl LeaderboardClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub async fn fetch_top(&self) -> Result<Vec<LeaderboardEntry>, LeaderboardClientError> {
        let url = format!("{}/api/leaderboard", self.base_url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|_| LeaderboardClientError::UpstreamUnavailable)?;

        let body = read_body(response).await?;
        Ok(body.leaderboard)
    }

    pub async fn submit_score(
        &self,
        player_name: &str,
        score: u64,
        wave: u32,
    ) -> Result<SubmitOutcome, LeaderboardClientError> {
        let url = format!("{}/api/leaderboard", self.base_url);
        let response = self
            .http
            .post(url)
            .json(&ScoreRequest {
                player_name,
                score,
                wave,
            })
            .send()
            .await
            .map_err(|_| LeaderboardClientError::UpstreamUnavailable)?;

        let body = read_body(response).await?;
        Ok(SubmitOutcome {
            leaderboard: body.leaderboard,
            player_position: body.player_position,
        })
    }

    /// In-game progress update; the service keeps the higher score.
    pub async fn update_score(
        &self,
        player_name: &str,
        score: u64,
        wave: u32,
    ) -> Result<(), LeaderboardClientError> {
        let url = format!("{}/api/leaderboard/update", self.base_url);
        let response = self
            .http
            .post(url)
            .json(&ScoreRequest {
                player_name,
                score,
                wave,
            })
            .send()
            .await
            .map_err(|_| LeaderboardClientError::UpstreamUnavailable)?;

        read_body(response).await.map(|_| ())
    }
}

async fn read_body(response: reqwest::Response) -> Result<LeaderboardResponse, LeaderboardClientError> {
    let status = response.status();
    if status.is_success() {
        return response
            .json::<LeaderboardResponse>()
            .await
            .map_err(|_| LeaderboardClientError::UpstreamUnavailable);
    }

    if status.is_client_error() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| LeaderboardClientError::UpstreamUnavailable)?;
        return Err(LeaderboardClientError::Rejected(error.error));
    }

    Err(LeaderboardClientError::UpstreamUnavailable)
}
