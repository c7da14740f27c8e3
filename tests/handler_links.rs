mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;

#[tokio::test]
async fn test_banner() {
    let server = TestServer::new(common::create_test_app()).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();
    response.assert_text("Hello shortener...");
}

#[tokio::test]
async fn test_list_urls_empty() {
    let server = TestServer::new(common::create_test_app()).unwrap();

    let response = server.get("/urls").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!([]));
}

#[tokio::test]
async fn test_list_urls_returns_all_records() {
    let server = TestServer::new(common::create_test_app()).unwrap();

    for (alias, url) in [("one", "https://example.com/1"), ("two", "https://example.com/2")] {
        server
            .post("/shorten")
            .json(&json!({ "originalUrl": url, "alias": alias }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let response = server.get("/urls").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);

    let aliases: Vec<&str> = items.iter().map(|i| i["alias"].as_str().unwrap()).collect();
    assert!(aliases.contains(&"one"));
    assert!(aliases.contains(&"two"));
}

#[tokio::test]
async fn test_info_projects_metadata() {
    let server = TestServer::new(common::create_test_app()).unwrap();

    server
        .post("/shorten")
        .json(&json!({ "originalUrl": "https://example.com", "alias": "meta" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.get("/info/meta").await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["originalUrl"], "https://example.com");
    assert_eq!(body["clickCount"], 0);
    assert!(body["createdAt"].is_string());
    // Projection only: no alias or shortUrl fields here.
    assert!(body.get("alias").is_none());
}

#[tokio::test]
async fn test_info_unknown_alias_not_found() {
    let server = TestServer::new(common::create_test_app()).unwrap();

    server.get("/info/missing").await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_removes_link() {
    let server = TestServer::new(common::create_test_app()).unwrap();

    server
        .post("/shorten")
        .json(&json!({ "originalUrl": "https://example.com", "alias": "doomed" }))
        .await
        .assert_status(StatusCode::CREATED);

    server
        .delete("/delete/doomed")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server.get("/info/doomed").await.assert_status_not_found();
    server.get("/doomed").await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_unknown_alias_not_found() {
    let server = TestServer::new(common::create_test_app()).unwrap();

    server.delete("/delete/missing").await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_cascades_click_events() {
    use snaplink::domain::repositories::{ClickRepository, LinkRepository};

    let (state, repository) = common::create_test_state();
    let server = TestServer::new(snaplink::api::routes::routes().with_state(state)).unwrap();

    server
        .post("/shorten")
        .json(&json!({ "originalUrl": "https://example.com", "alias": "tracked" }))
        .await
        .assert_status(StatusCode::CREATED);

    server
        .get("/tracked")
        .add_header("x-forwarded-for", "1.1.1.1")
        .await
        .assert_status(StatusCode::FOUND);

    let link_id = repository
        .find_by_alias("tracked")
        .await
        .unwrap()
        .unwrap()
        .id;
    assert_eq!(repository.find_recent(link_id, 5).await.unwrap().len(), 1);

    server
        .delete("/delete/tracked")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    // No click events for the deleted link remain queryable.
    assert!(repository.find_recent(link_id, 5).await.unwrap().is_empty());
    assert!(repository.find_by_alias("tracked").await.unwrap().is_none());
}
