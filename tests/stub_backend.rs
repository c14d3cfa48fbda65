//! End-to-end calls over real HTTP against an in-process stub backend.

#![cfg(feature = "native")]

use std::collections::HashMap;

use axum::Router;
use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::get;
use serde_json::{Value, json};
use ssap_client::{ApiClient, ApiError, ClientConfig};

async fn handle_post(headers: HeaderMap, body: String) -> (StatusCode, String) {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if !content_type.starts_with("text/plain") {
        return (StatusCode::UNSUPPORTED_MEDIA_TYPE, String::new());
    }
    let Ok(request) = serde_json::from_str::<Value>(&body) else {
        return (StatusCode::BAD_REQUEST, String::new());
    };
    let reply = match request["action"].as_str() {
        Some("addLike" | "removeLike") => json!({
            "success": true,
            "data": { "ok": true, "proposalId": request["proposalId"], "userId": request["userId"] }
        }),
        Some("addProposal") => json!({ "success": true, "data": { "id": "p42", "title": request["title"] } }),
        _ => json!({ "success": false, "message": "unknown action" }),
    };
    (StatusCode::OK, reply.to_string())
}

async fn handle_get(Query(params): Query<HashMap<String, String>>) -> String {
    match params.get("action").map(String::as_str) {
        Some("getProposals") => json!({
            "success": true,
            "data": [{ "id": "p1", "title": "Benches" }]
        })
        .to_string(),
        _ => json!({ "success": false, "message": "no sheet" }).to_string(),
    }
}

async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/exec", get(handle_get).post(handle_post))
        .route("/broken", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }))
        .route("/html", get(|| async { "<html>login</html>" }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(url: String) -> ApiClient {
    ApiClient::native(ClientConfig::new(url)).unwrap()
}

#[tokio::test]
async fn add_like_round_trips_as_text_plain() {
    let base = spawn_backend().await;
    let data = client(format!("{base}/exec"))
        .add_reaction("p1", "u1")
        .await
        .unwrap();
    assert_eq!(data, json!({ "ok": true, "proposalId": "p1", "userId": "u1" }));
}

#[tokio::test]
async fn submit_proposal_reaches_backend() {
    let base = spawn_backend().await;
    let proposal = ssap_client::net::types::Proposal::new().with_field("title", "Bike racks");
    let data = client(format!("{base}/exec"))
        .submit_proposal(&proposal)
        .await
        .unwrap();
    assert_eq!(data, json!({ "id": "p42", "title": "Bike racks" }));
}

#[tokio::test]
async fn list_proposals_uses_query_action() {
    let base = spawn_backend().await;
    let proposals = client(format!("{base}/exec")).list_proposals().await.unwrap();
    assert_eq!(proposals.len(), 1);
    assert_eq!(proposals[0].id(), Some("p1"));
}

#[tokio::test]
async fn backend_failure_message_is_surfaced() {
    let base = spawn_backend().await;
    let err = client(format!("{base}/exec")).get("getSheets").await.unwrap_err();
    assert_eq!(err.to_string(), "no sheet");
}

#[tokio::test]
async fn server_error_status_is_transport_error() {
    let base = spawn_backend().await;
    let err = client(format!("{base}/broken")).get("getProposals").await.unwrap_err();
    assert!(matches!(err, ApiError::Transport { status: 500, .. }));
}

#[tokio::test]
async fn html_body_is_malformed_response() {
    let base = spawn_backend().await;
    let err = client(format!("{base}/html")).get("getProposals").await.unwrap_err();
    assert!(matches!(err, ApiError::MalformedResponse(_)));
}

#[tokio::test]
async fn unreachable_endpoint_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(format!("http://{addr}/exec")).add_reaction("p1", "u1").await.unwrap_err();
    assert!(matches!(err, ApiError::Network { .. }));
    assert!(err.user_message().contains(&addr.to_string()));
}
