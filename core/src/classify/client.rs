//! Client for the remote Watson NLP EmotionPredict service.
//!
//! The client is deliberately total: [`EmotionClient::detect`] always returns
//! a [`ClassificationResult`], collapsing transport and parse failures into
//! [`ClassificationResult::Failure`] rather than propagating them. The
//! failure reason is kept for logging.

use super::{ClassificationResult, ClassifyError, EmotionScores};
use crate::config::ClientConfig;
use serde::{Deserialize, Serialize};

/// Header selecting the model on the Watson runtime.
const MODEL_ID_HEADER: &str = "grpc-metadata-mm-model-id";

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    raw_document: RawDocument<'a>,
}

#[derive(Debug, Serialize)]
struct RawDocument<'a> {
    text: &'a str,
}

/// Success reply: a list of predictions, each wrapping an emotion object.
/// Only the first prediction is used.
#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(rename = "emotionPredictions")]
    emotion_predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    emotion: EmotionScores,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Adapter around the remote classification service.
///
/// Construct once with a [`ClientConfig`] and share between requests; the
/// client holds no per-request state.
#[derive(Debug, Clone)]
pub struct EmotionClient {
    http: reqwest::Client,
    endpoint: String,
    model_id: String,
}

impl EmotionClient {
    /// Build a client with the configured endpoint, model and timeout.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint,
            model_id: config.model_id,
        })
    }

    /// Classify `text`, returning a failure result instead of an error on
    /// any problem with the remote call.
    ///
    /// Empty or whitespace-only input short-circuits without contacting the
    /// service. The input text itself is never logged.
    pub async fn detect(&self, text: &str) -> ClassificationResult {
        match self.predict(text).await {
            Ok(result) => result,
            Err(reason) => {
                log::warn!(
                    "[emotion_client] classification failed for input of {} chars: {reason}",
                    text.chars().count()
                );
                ClassificationResult::failure(reason)
            }
        }
    }

    async fn predict(&self, text: &str) -> Result<ClassificationResult, ClassifyError> {
        if text.trim().is_empty() {
            return Err(ClassifyError::EmptyInput);
        }

        let request = PredictRequest {
            raw_document: RawDocument { text },
        };

        let response = self
            .http
            .post(&self.endpoint)
            .header(MODEL_ID_HEADER, self.model_id.as_str())
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassifyError::Status(status.as_u16()));
        }

        let reply: PredictResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ClassifyError::Timeout
            } else {
                ClassifyError::MalformedResponse(e.to_string())
            }
        })?;

        let prediction = reply
            .emotion_predictions
            .first()
            .ok_or_else(|| ClassifyError::MalformedResponse("empty prediction list".to_owned()))?;

        ClassificationResult::from_scores(prediction.emotion)
            .ok_or_else(|| ClassifyError::MalformedResponse("prediction has no scores".to_owned()))
    }
}

fn transport_error(err: reqwest::Error) -> ClassifyError {
    if err.is_timeout() {
        ClassifyError::Timeout
    } else {
        ClassifyError::Transport(err.to_string())
    }
}
