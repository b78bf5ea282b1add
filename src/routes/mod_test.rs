use super::*;
use standings::{HealthReport, LeaderboardPage, SearchResults, SimulateReport};

use crate::state::test_helpers;

/// Serve the app on an ephemeral port and return its base URL.
async fn spawn_app(state: AppState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind should succeed");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app(state)).await.expect("server failed");
    });
    format!("http://{addr}")
}

#[test]
fn api_error_statuses() {
    assert_eq!(ApiError::BadRequest("nope").into_response().status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        ApiError::Internal("boom".into()).into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn leaderboard_over_http() {
    let base = spawn_app(test_helpers::test_app_state()).await;
    let page: LeaderboardPage = reqwest::get(format!("{base}/api/leaderboard?page=1&size=3"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(page.page_size, 3);
    assert_eq!(page.total_users, 6);
    assert_eq!(page.users.len(), 3);
    assert_eq!(page.users[0].username, "priya");
}

#[tokio::test]
async fn leaderboard_wire_fields_are_camel_case() {
    let base = spawn_app(test_helpers::test_app_state()).await;
    let body: serde_json::Value = reqwest::get(format!("{base}/api/leaderboard?size=1"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["totalUsers"], 6);
    assert_eq!(body["pageSize"], 1);
    assert_eq!(body["users"][0]["globalRank"], 1);
    assert_eq!(body["users"][0]["rating"], 4000);
}

#[tokio::test]
async fn malformed_paging_falls_back_to_defaults() {
    let base = spawn_app(test_helpers::test_app_state()).await;
    let page: LeaderboardPage = reqwest::get(format!("{base}/api/leaderboard?page=x&size=-1"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(page.page, 1);
    assert_eq!(page.page_size, 100);
}

#[tokio::test]
async fn search_over_http_encodes_username() {
    let base = spawn_app(test_helpers::test_app_state()).await;
    let client = reqwest::Client::new();
    let results: SearchResults = client
        .get(format!("{base}/api/search"))
        .query(&[("username", "rahul_")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(results.count, 2);
}

#[tokio::test]
async fn search_without_username_is_bad_request() {
    let base = spawn_app(test_helpers::test_app_state()).await;
    let response = reqwest::get(format!("{base}/api/search")).await.unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(body.error, "username query parameter is required");
}

#[tokio::test]
async fn simulate_requires_post() {
    let base = spawn_app(test_helpers::test_app_state()).await;
    let client = reqwest::Client::new();

    let get = client.get(format!("{base}/api/simulate-update")).send().await.unwrap();
    assert_eq!(get.status().as_u16(), 405);

    let report: SimulateReport = client
        .post(format!("{base}/api/simulate-update"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(report.users_updated, 6);
}

#[tokio::test]
async fn health_reports_roster_size() {
    let base = spawn_app(test_helpers::test_app_state()).await;
    let health: HealthReport = reqwest::get(format!("{base}/api/health")).await.unwrap().json().await.unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.total_users, 6);
    assert!(health.timestamp.contains('T'));
}

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let base = spawn_app(test_helpers::test_app_state()).await;
    let client = reqwest::Client::new();
    let response = client
        .request(reqwest::Method::OPTIONS, format!("{base}/api/simulate-update"))
        .header("Origin", "http://localhost:8081")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
