//! Integration tests for `GeminiClient` using wiremock HTTP mocks.

use quotecard_gemini::{GeminiClient, GeminiError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> GeminiClient {
    GeminiClient::with_base_url("test-key", "gemini-test", 30, base_url)
        .expect("client construction should not fail")
}

fn envelope(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
}

const QUOTE_JSON: &str = r#"{"quote": "The unexamined life is not worth living.", "author": "Socrates", "context": "From Plato's Apology."}"#;

#[tokio::test]
async fn generate_quote_parses_raw_json_output() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-test:generateContent"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(QUOTE_JSON)))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let quote = client.generate_quote(None).await.expect("should parse quote");

    assert_eq!(quote.text, "The unexamined life is not worth living.");
    assert_eq!(quote.author, "Socrates");
    assert_eq!(quote.context, "From Plato's Apology.");
}

#[tokio::test]
async fn generate_quote_strips_markdown_fences() {
    let server = MockServer::start().await;

    let fenced = format!("```json\n{QUOTE_JSON}\n```");
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-test:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(&fenced)))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let quote = client
        .generate_quote(None)
        .await
        .expect("fenced output should parse like raw output");

    assert_eq!(quote.author, "Socrates");
}

#[tokio::test]
async fn generate_quote_missing_author_is_schema_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-test:generateContent"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(r#"{"quote": "something profound"}"#)),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.generate_quote(None).await.unwrap_err();
    assert!(
        matches!(err, GeminiError::MissingField("author")),
        "expected MissingField(author), got: {err:?}"
    );
}

#[tokio::test]
async fn generate_quote_non_json_output_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-test:generateContent"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope("Here is a quote for you!")),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.generate_quote(None).await.unwrap_err();
    assert!(
        matches!(err, GeminiError::Parse { .. }),
        "expected Parse, got: {err:?}"
    );
}

#[tokio::test]
async fn generate_quote_empty_candidates_is_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-test:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.generate_quote(None).await.unwrap_err();
    assert!(
        matches!(err, GeminiError::EmptyResponse),
        "expected EmptyResponse, got: {err:?}"
    );
}

#[tokio::test]
async fn generate_quote_server_error_carries_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-test:generateContent"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal failure"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.generate_quote(None).await.unwrap_err();
    match err {
        GeminiError::Api { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "internal failure");
        }
        other => panic!("expected Api, got: {other:?}"),
    }
}

#[tokio::test]
async fn generate_quote_sends_topic_in_prompt() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-test:generateContent"))
        .and(wiremock::matchers::body_string_contains("from Epictetus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(QUOTE_JSON)))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    client
        .generate_quote(Some("Epictetus"))
        .await
        .expect("mock should match a prompt naming the philosopher");
}
