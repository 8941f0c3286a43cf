use std::time::Duration;

use plg_llm::{OpenAiClient, Oracle, OracleError};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> OpenAiClient {
    OpenAiClient::new("sk-test", server.uri(), "gpt-test", Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn sends_single_user_message_and_reads_first_choice() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-test",
            "messages": [{ "role": "user", "content": "Where next?" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                { "message": { "role": "assistant", "content": "Somewhere warm" } },
                { "message": { "role": "assistant", "content": "ignored" } }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let completion = client(&server).complete("Where next?").await.unwrap();
    assert_eq!(completion.content.as_deref(), Some("Somewhere warm"));
}

#[tokio::test]
async fn null_content_is_an_empty_completion() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": null } }]
        })))
        .mount(&server)
        .await;

    let completion = client(&server).complete("hi").await.unwrap();
    assert_eq!(completion.content, None);
}

#[tokio::test]
async fn error_status_maps_to_api_error_with_provider_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "message": "Incorrect API key provided" }
        })))
        .mount(&server)
        .await;

    match client(&server).complete("hi").await {
        Err(OracleError::Api { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "Incorrect API key provided");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_status_without_json_body_still_reports_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    match client(&server).complete("hi").await {
        Err(OracleError::Api { status, message }) => {
            assert_eq!(status, 502);
            assert_eq!(message, "HTTP 502");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_choices_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    assert!(matches!(
        client(&server).complete("hi").await,
        Err(OracleError::Decode(_))
    ));
}

#[tokio::test]
async fn non_json_success_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    assert!(matches!(
        client(&server).complete("hi").await,
        Err(OracleError::Decode(_))
    ));
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "ok" } }]
        })))
        .mount(&server)
        .await;

    let client = OpenAiClient::new(
        "sk-test",
        format!("{}/", server.uri()),
        "gpt-test",
        Duration::from_secs(5),
    )
    .unwrap();
    let completion = client.complete("hi").await.unwrap();
    assert_eq!(completion.content.as_deref(), Some("ok"));
}
