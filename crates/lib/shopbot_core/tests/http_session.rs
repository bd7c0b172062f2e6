//! Integration tests: drive `ChatSession` over real HTTP against a mock server.

use std::time::Duration;

use serde_json::json;
use shopbot_core::client::{ApiError, ChatApi, HttpChatApi};
use shopbot_core::config::ClientConfig;
use shopbot_core::models::{ChatRequest, Role};
use shopbot_core::session::{ChatSession, GENERIC_FALLBACK, SessionOptions, SubmitOutcome};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper: create an HTTP client pointing at a mock server.
fn api_for(server: &MockServer) -> HttpChatApi {
    let config = ClientConfig::new(&server.uri()).expect("mock server URI");
    HttpChatApi::new(config).expect("build client")
}

#[tokio::test]
async fn chat_round_trip_sends_json_and_records_log() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "message": "Tell me about Kiwi" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "response": "Kiwi costs $2.49" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut session = ChatSession::new(api_for(&server), SessionOptions::logging_variant());
    let outcome = session.submit("Tell me about Kiwi").await;

    assert_eq!(outcome, SubmitOutcome::Replied);
    assert_eq!(session.transcript().len(), 2);
    assert_eq!(session.transcript()[1].role, Role::Assistant);
    assert_eq!(session.transcript()[1].content, "Kiwi costs $2.49");
    assert!(!session.is_loading());

    assert_eq!(session.logs().len(), 1);
    let entry = &session.logs()[0];
    assert_eq!(entry.request.body["message"], "Tell me about Kiwi");
    assert_eq!(entry.response.status, 200);
}

#[tokio::test]
async fn server_error_yields_fallback_without_log() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({ "detail": "Error generating response: quota" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut session = ChatSession::new(api_for(&server), SessionOptions::logging_variant());
    let outcome = session.submit("Do you have any electronics?").await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(session.transcript()[1].content, GENERIC_FALLBACK);
    assert!(session.logs().is_empty());
    assert!(!session.is_loading());
}

#[tokio::test]
async fn server_error_is_logged_when_failed_logging_enabled() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "detail": "Message cannot be empty"
        })))
        .mount(&server)
        .await;

    let options = SessionOptions::logging_variant().with_failed_response_logging(true);
    let mut session = ChatSession::new(api_for(&server), options);
    session.submit("?").await;

    assert_eq!(session.logs().len(), 1);
    assert_eq!(session.logs()[0].response.status, 400);
    assert_eq!(
        session.logs()[0].response.data["detail"],
        "Message cannot be empty"
    );
}

#[tokio::test]
async fn non_json_body_yields_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
        .mount(&server)
        .await;

    let mut session = ChatSession::new(api_for(&server), SessionOptions::logging_variant());
    assert_eq!(session.submit("hello").await, SubmitOutcome::Failed);
    assert_eq!(session.transcript()[1].content, GENERIC_FALLBACK);
}

#[tokio::test]
async fn unreachable_server_yields_backend_fallback() {
    // Reserve a free port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let api = HttpChatApi::new(ClientConfig::new(&uri).unwrap()).unwrap();

    let mut session = ChatSession::new(api, SessionOptions::greeting_variant(&uri));
    let outcome = session.submit("What's the price of mascara?").await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(session.transcript().len(), 3);
    let reply = &session.transcript()[2].content;
    assert!(reply.starts_with("Sorry, I encountered an error."));
    assert!(reply.ends_with(&uri));
    assert!(!session.is_loading());
}

#[tokio::test]
async fn configured_timeout_turns_a_hung_request_into_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "response": "late" }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig::new(&server.uri())
        .unwrap()
        .with_timeout(Some(Duration::from_millis(200)));
    let api = HttpChatApi::new(config).unwrap();

    let err = api
        .post_chat(&ChatRequest {
            message: "slow".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Timeout(_)), "got: {err:?}");

    let mut session = ChatSession::new(api, SessionOptions::logging_variant());
    assert_eq!(session.submit("slow").await, SubmitOutcome::Failed);
    assert!(!session.is_loading());
}

#[tokio::test]
async fn list_products_parses_catalog() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [{
                "id": 1,
                "title": "Kiwi",
                "description": "Nutrient-rich fruit",
                "category": "groceries",
                "price": 2.49,
                "rating": 4.93,
                "stock": 99,
                "tags": ["fruits"],
                "warrantyInformation": "6 months warranty",
                "shippingInformation": "Ships overnight",
                "availabilityStatus": "In Stock"
            }],
            "total": 194,
            "skip": 0,
            "limit": 194
        })))
        .expect(1)
        .mount(&server)
        .await;

    let listing = api_for(&server).list_products().await.unwrap();
    assert_eq!(listing.total, 194);
    assert_eq!(listing.products[0].title, "Kiwi");
    assert_eq!(
        listing.products[0].shipping_information.as_deref(),
        Some("Ships overnight")
    );
}

#[tokio::test]
async fn list_products_reports_server_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "detail": "Error fetching products: upstream down"
        })))
        .mount(&server)
        .await;

    let err = api_for(&server).list_products().await.unwrap_err();
    assert_eq!(err.status(), Some(500));
}
