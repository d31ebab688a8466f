mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_analytics_counts_redirects() {
    let app = common::create_test_app();
    let server = common::test_server(&app);

    let created = server
        .post("/api/create")
        .json(&json!({ "url": "https://www.wikipedia.org" }))
        .await
        .json::<serde_json::Value>();
    let short_id = common::short_id_of(created["short_url"].as_str().unwrap());

    let before = server
        .get(&format!("/api/analytics/{}", short_id))
        .await
        .json::<serde_json::Value>();
    assert_eq!(before["original_url"], "https://www.wikipedia.org/");
    assert_eq!(before["clicks"], 0);
    assert!(before["created_at"].is_string());

    server
        .get(&format!("/{}", short_id))
        .await
        .assert_status(StatusCode::TEMPORARY_REDIRECT);

    let after = common::wait_for_clicks(&server, &short_id, 1).await;
    assert_eq!(after["clicks"], 1);
    assert_eq!(after["original_url"], "https://www.wikipedia.org/");
}

#[tokio::test]
async fn test_analytics_counts_every_redirect() {
    let app = common::create_test_app();
    common::insert_link(&app.repository, "hot123", "https://example.com/").await;
    let server = common::test_server(&app);

    for _ in 0..25 {
        server
            .get("/hot123")
            .await
            .assert_status(StatusCode::TEMPORARY_REDIRECT);
    }

    let json = common::wait_for_clicks(&server, "hot123", 25).await;
    assert_eq!(json["clicks"], 25);
}

#[tokio::test]
async fn test_analytics_counts_are_per_link() {
    let app = common::create_test_app();
    common::insert_link(&app.repository, "first1", "https://one.example/").await;
    common::insert_link(&app.repository, "secnd2", "https://two.example/").await;
    let server = common::test_server(&app);

    for _ in 0..3 {
        server.get("/first1").await;
    }
    server.get("/secnd2").await;

    let first = common::wait_for_clicks(&server, "first1", 3).await;
    let second = common::wait_for_clicks(&server, "secnd2", 1).await;

    assert_eq!(first["clicks"], 3);
    assert_eq!(second["clicks"], 1);
}

#[tokio::test]
async fn test_analytics_not_found() {
    let app = common::create_test_app();
    let server = common::test_server(&app);

    let response = server.get("/api/analytics/nope42").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["short_id"], "nope42");
}

#[tokio::test]
async fn test_analytics_does_not_count_as_click() {
    let app = common::create_test_app();
    common::insert_link(&app.repository, "quiet1", "https://example.com/").await;
    let server = common::test_server(&app);

    for _ in 0..3 {
        server.get("/api/analytics/quiet1").await.assert_status_ok();
    }

    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    let json = server
        .get("/api/analytics/quiet1")
        .await
        .json::<serde_json::Value>();
    assert_eq!(json["clicks"], 0);
}
