//! Thin HTTP client over the leaderboard API.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use standings::{ErrorBody, HealthReport, LeaderboardPage, SearchResults, SimulateReport, endpoints};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{action}: {status}{}", detail_suffix(.detail))]
    Status {
        action: &'static str,
        status: StatusCode,
        detail: Option<String>,
    },
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(" ({d})")).unwrap_or_default()
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { http: reqwest::Client::new(), base_url: base_url.trim_end_matches('/').to_owned() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/leaderboard?page=&size=`
    pub async fn leaderboard(&self, page: u64, page_size: u64) -> Result<LeaderboardPage, ClientError> {
        let response = self
            .http
            .get(self.url(endpoints::LEADERBOARD))
            .query(&[("page", page), ("size", page_size)])
            .send()
            .await?;
        decode(response, "Failed to fetch leaderboard").await
    }

    /// `GET /api/search?username=`
    pub async fn search(&self, username: &str) -> Result<SearchResults, ClientError> {
        let response = self
            .http
            .get(self.url(endpoints::SEARCH))
            .query(&[("username", username)])
            .send()
            .await?;
        decode(response, "Failed to search users").await
    }

    /// `POST /api/simulate-update`
    pub async fn simulate_update(&self) -> Result<SimulateReport, ClientError> {
        let response = self.http.post(self.url(endpoints::SIMULATE_UPDATE)).send().await?;
        decode(response, "Failed to simulate update").await
    }

    /// `GET /api/health`
    pub async fn health(&self) -> Result<HealthReport, ClientError> {
        let response = self.http.get(self.url(endpoints::HEALTH)).send().await?;
        decode(response, "Health check failed").await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

async fn decode<T: DeserializeOwned>(response: Response, action: &'static str) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let detail = response.json::<ErrorBody>().await.ok().map(|b| b.error);
        tracing::debug!(action, status = status.as_u16(), ?detail, "request rejected");
        return Err(ClientError::Status { action, status, detail });
    }
    Ok(response.json::<T>().await?)
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
