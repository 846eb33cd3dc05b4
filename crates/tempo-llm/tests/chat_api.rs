//! Gateway tests against a local mock of a chat-completions endpoint.

use std::time::{Duration, Instant};

use mockito::{Matcher, Server, ServerGuard};
use pretty_assertions::assert_eq;
use serde_json::json;
use tempo_config::LlmConfig;
use tempo_llm::{ChatClient, LlmError};

fn client_for(server: &ServerGuard) -> ChatClient {
    ChatClient::new(&LlmConfig {
        api_key: "sk-test".into(),
        model: "test-model".into(),
        base_url: format!("{}/v1", server.url()),
        timeout_secs: 5,
        ..Default::default()
    })
    .expect("client builds")
}

fn completion(content: serde_json::Value) -> String {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{ "index": 0, "message": { "role": "assistant", "content": content } }]
    })
    .to_string()
}

#[tokio::test]
async fn classify_sends_bounded_request_and_returns_answer() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .match_body(Matcher::PartialJson(json!({
            "model": "test-model",
            "max_tokens": 50,
            "messages": [
                { "role": "system", "content": tempo_config::DEFAULT_SYSTEM_PROMPT },
                { "role": "user", "content": "Classify: standup" }
            ]
        })))
        .with_status(200)
        .with_body(completion(json!("Work")))
        .create_async()
        .await;

    let answer = client_for(&server).classify("Classify: standup").await;

    mock.assert_async().await;
    assert_eq!(answer.as_deref(), Some("Work"));
}

#[tokio::test]
async fn classify_strips_reasoning_markup() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body(completion(json!(
            "<think>\nThe record mentions reading a paper.\n</think>\n\nStudy"
        )))
        .create_async()
        .await;

    let answer = client_for(&server).classify("prompt").await;
    assert_eq!(answer.as_deref(), Some("Study"));
}

#[tokio::test]
async fn classify_error_status_is_none() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(500)
        .with_body(r#"{"error":{"message":"boom"}}"#)
        .create_async()
        .await;

    assert!(client_for(&server).classify("prompt").await.is_none());
}

#[tokio::test]
async fn classify_empty_choices_or_null_content_is_none() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body(r#"{"choices": []}"#)
        .create_async()
        .await;
    assert!(client_for(&server).classify("prompt").await.is_none());

    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body(completion(serde_json::Value::Null))
        .create_async()
        .await;
    assert!(client_for(&server).classify("prompt").await.is_none());
}

#[tokio::test]
async fn classify_malformed_body_is_none() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    assert!(client_for(&server).classify("prompt").await.is_none());
}

#[tokio::test]
async fn classify_times_out_instead_of_hanging() {
    // Accept the connection but never answer.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let holder = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(60)).await;
        drop(socket);
    });

    let client = ChatClient::new(&LlmConfig {
        api_key: "sk-test".into(),
        base_url: format!("http://{addr}/v1"),
        timeout_secs: 1,
        ..Default::default()
    })
    .unwrap();

    let started = Instant::now();
    assert!(client.classify("prompt").await.is_none());
    assert!(started.elapsed() < Duration::from_secs(10));
    holder.abort();
}

#[tokio::test]
async fn test_connection_reports_reply_or_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .match_body(Matcher::PartialJson(json!({ "max_tokens": 10 })))
        .with_status(200)
        .with_body(completion(json!("OK")))
        .create_async()
        .await;
    assert_eq!(client_for(&server).test_connection().await.unwrap(), "OK");

    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(401)
        .with_body("invalid api key")
        .create_async()
        .await;
    let err = client_for(&server).test_connection().await.unwrap_err();
    assert!(matches!(err, LlmError::Api { status: 401, .. }));
}
