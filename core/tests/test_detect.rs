//! Integration tests for the classifier client against an in-process mock
//! of the Watson EmotionPredict endpoint.
//!
//! Each test binds its own mock server to 127.0.0.1:0; no external service
//! is ever contacted.

use axum::extract::Json;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use emotion::classify::ClassifyError;
use emotion::config::ClientConfig;
use emotion::{format, ClassificationResult, Emotion, EmotionClient};
use std::time::Duration;

const PREDICT_PATH: &str = "/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict";

/// Serve `router` on an ephemeral port and return the endpoint URL.
async fn spawn_mock(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock listener");
    let addr = listener.local_addr().expect("mock local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve mock");
    });
    format!("http://{addr}{PREDICT_PATH}")
}

fn client_for(endpoint: String, timeout: Duration) -> EmotionClient {
    EmotionClient::new(ClientConfig {
        endpoint,
        timeout,
        ..ClientConfig::default()
    })
    .expect("build client")
}

/// Deterministic mock: validates the request shape, then returns a joyful
/// prediction.
async fn happy_prediction(
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    if headers.get("grpc-metadata-mm-model-id").is_none() {
        return (StatusCode::BAD_REQUEST, "missing model header").into_response();
    }
    let text = body["raw_document"]["text"].as_str().unwrap_or_default();
    if text.is_empty() {
        return (StatusCode::BAD_REQUEST, "missing text").into_response();
    }
    Json(serde_json::json!({
        "emotionPredictions": [
            {
                "emotion": {
                    "anger": 0.02,
                    "disgust": 0.01,
                    "fear": 0.02,
                    "joy": 0.9,
                    "sadness": 0.05
                }
            }
        ],
        "producerId": {"name": "Ensemble Aggregated Emotion Workflow", "version": "0.0.1"}
    }))
    .into_response()
}

#[tokio::test]
async fn test_successful_classification() {
    let endpoint = spawn_mock(Router::new().route(PREDICT_PATH, post(happy_prediction))).await;
    let client = client_for(endpoint, Duration::from_secs(5));

    let result = client.detect("I am so happy today!").await;
    match &result {
        ClassificationResult::Success {
            scores,
            dominant_emotion,
        } => {
            assert_eq!(*dominant_emotion, Emotion::Joy);
            assert_eq!(scores.joy, Some(0.9));
            assert_eq!(scores.anger, Some(0.02));
        }
        ClassificationResult::Failure { reason } => panic!("unexpected failure: {reason}"),
    }

    let rendered = format::render(&result).expect("render success");
    assert!(rendered.contains("'joy': 0.9"));
    assert!(rendered.contains("The dominant emotion is joy"));
}

#[tokio::test]
async fn test_classification_is_idempotent() {
    let endpoint = spawn_mock(Router::new().route(PREDICT_PATH, post(happy_prediction))).await;
    let client = client_for(endpoint, Duration::from_secs(5));

    let first = client.detect("I am so happy today!").await;
    let second = client.detect("I am so happy today!").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_malformed_reply_missing_predictions() {
    let endpoint = spawn_mock(Router::new().route(
        PREDICT_PATH,
        post(|| async { Json(serde_json::json!({"documentCharCount": 20})) }),
    ))
    .await;
    let client = client_for(endpoint, Duration::from_secs(5));

    match client.detect("some text").await {
        ClassificationResult::Failure {
            reason: ClassifyError::MalformedResponse(_),
        } => {}
        other => panic!("expected malformed-response failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_prediction_list() {
    let endpoint = spawn_mock(Router::new().route(
        PREDICT_PATH,
        post(|| async { Json(serde_json::json!({"emotionPredictions": []})) }),
    ))
    .await;
    let client = client_for(endpoint, Duration::from_secs(5));

    match client.detect("some text").await {
        ClassificationResult::Failure {
            reason: ClassifyError::MalformedResponse(_),
        } => {}
        other => panic!("expected malformed-response failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_status() {
    let endpoint = spawn_mock(Router::new().route(
        PREDICT_PATH,
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    ))
    .await;
    let client = client_for(endpoint, Duration::from_secs(5));

    match client.detect("some text").await {
        ClassificationResult::Failure {
            reason: ClassifyError::Status(500),
        } => {}
        other => panic!("expected status failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_timeout_yields_failure_not_panic() {
    let endpoint = spawn_mock(Router::new().route(
        PREDICT_PATH,
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(serde_json::json!({"emotionPredictions": []}))
        }),
    ))
    .await;
    let client = client_for(endpoint, Duration::from_millis(100));

    match client.detect("some text").await {
        ClassificationResult::Failure {
            reason: ClassifyError::Timeout,
        } => {}
        other => panic!("expected timeout failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_input_never_contacts_service() {
    // A mock that would fail any request it receives: the empty-input check
    // must short-circuit before the network.
    let endpoint = spawn_mock(Router::new().route(
        PREDICT_PATH,
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "should not be called") }),
    ))
    .await;
    let client = client_for(endpoint, Duration::from_secs(5));

    match client.detect("   \n ").await {
        ClassificationResult::Failure {
            reason: ClassifyError::EmptyInput,
        } => {}
        other => panic!("expected empty-input failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_failure_renders_invalid_input_message() {
    let endpoint = spawn_mock(Router::new().route(
        PREDICT_PATH,
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
    ))
    .await;
    let client = client_for(endpoint, Duration::from_secs(5));

    let result = client.detect("some text").await;
    let err = format::render(&result).expect_err("failure result");
    assert_eq!(err.user_message(), "Invalid text! Please try again.");
}
