use super::*;
use serde_json::json;

#[test]
fn clamp_rating_bounds() {
    assert_eq!(clamp_rating(-20), MIN_RATING);
    assert_eq!(clamp_rating(99), MIN_RATING);
    assert_eq!(clamp_rating(100), 100);
    assert_eq!(clamp_rating(2750), 2750);
    assert_eq!(clamp_rating(5000), 5000);
    assert_eq!(clamp_rating(i64::MAX), MAX_RATING);
}

#[test]
fn ranked_user_uses_camel_case_rank() {
    let user = User { id: 7, username: "priya_iyer".into(), rating: 3100 };
    let value = serde_json::to_value(RankedUser::new(&user, 12)).unwrap();
    assert_eq!(value, json!({ "globalRank": 12, "id": 7, "username": "priya_iyer", "rating": 3100 }));
}

#[test]
fn leaderboard_page_parses_server_shape() {
    let raw = json!({
        "users": [{ "globalRank": 1, "id": 3, "username": "rahul", "rating": 4999 }],
        "totalUsers": 10000,
        "page": 1,
        "pageSize": 50
    });
    let page: LeaderboardPage = serde_json::from_value(raw).unwrap();
    assert_eq!(page.total_users, 10_000);
    assert_eq!(page.page_size, 50);
    assert_eq!(page.users[0].global_rank, 1);
}

#[test]
fn health_and_simulate_field_names() {
    let health = HealthReport { status: "healthy".into(), total_users: 3, timestamp: "t".into() };
    let value = serde_json::to_value(&health).unwrap();
    assert!(value.get("totalUsers").is_some());

    let report = SimulateReport { message: "ok".into(), users_updated: 12 };
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value.get("usersUpdated"), Some(&json!(12)));
}
