//! Static endpoints: `GET /health` and `GET /api/rooms`.

mod common;

use axum_test::TestServer;

#[tokio::test]
async fn health_reports_ok() {
    let server = TestServer::new(common::test_app()).unwrap();

    let resp = server.get("/health").await;

    resp.assert_status_ok();
    resp.assert_json(&serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn rooms_is_always_empty() {
    let server = TestServer::new(common::test_app()).unwrap();

    let resp = server.get("/api/rooms").await;
    resp.assert_status_ok();
    resp.assert_json(&serde_json::json!({ "rooms": [] }));

    // Issuing tokens does not register rooms.
    server
        .post("/api/token")
        .json(&serde_json::json!({ "roomName": "standup", "participantName": "alice" }))
        .await
        .assert_status_ok();

    let resp = server.get("/api/rooms").await;
    resp.assert_json(&serde_json::json!({ "rooms": [] }));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let server = TestServer::new(common::test_app()).unwrap();

    server.get("/api/nope").await.assert_status_not_found();
}

#[tokio::test]
async fn token_route_only_accepts_post() {
    let server = TestServer::new(common::test_app()).unwrap();

    server
        .get("/api/token")
        .await
        .assert_status(http::StatusCode::METHOD_NOT_ALLOWED);
}
