//! Rendering of classification results into the user-facing reply.
//!
//! The rendered string contract is fixed: callers of the service parse or
//! display it as-is, so the wording must not drift. Failures map onto two
//! user-visible messages while the underlying reason stays available to
//! callers of [`render`] for logging.

use crate::classify::{ClassificationResult, ClassifyError};
use thiserror::Error;

/// Why a result could not be rendered as a summary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    /// The classification itself failed; covers empty input, transport
    /// failures and malformed replies alike.
    #[error("classification failed: {0}")]
    Classification(ClassifyError),
    /// A success result that violates its own invariant. Should not happen
    /// with results built through the client; guarded anyway.
    #[error("invalid result shape: {0}")]
    InvalidShape(String),
}

impl FormatError {
    /// The fixed string shown to the caller for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Classification(_) => "Invalid text! Please try again.",
            Self::InvalidShape(_) => "Invalid response format from emotion predictor",
        }
    }
}

/// Render a result as the summary string, or report why it cannot be.
///
/// Scores appear in canonical order; an absent score renders as `None`
/// rather than failing.
pub fn render(result: &ClassificationResult) -> Result<String, FormatError> {
    match result {
        ClassificationResult::Failure { reason } => {
            Err(FormatError::Classification(reason.clone()))
        }
        ClassificationResult::Success {
            scores,
            dominant_emotion,
        } => {
            if scores.dominant() != Some(*dominant_emotion) {
                return Err(FormatError::InvalidShape(format!(
                    "dominant emotion '{dominant_emotion}' does not match the scores"
                )));
            }
            Ok(format!(
                "Your statement is considered 'anger': {}, 'disgust': {}, 'fear': {}, \
                 'joy': {} and 'sadness': {}. The dominant emotion is {}",
                score_text(scores.anger),
                score_text(scores.disgust),
                score_text(scores.fear),
                score_text(scores.joy),
                score_text(scores.sadness),
                dominant_emotion
            ))
        }
    }
}

fn score_text(score: Option<f64>) -> String {
    score.map_or_else(|| "None".to_owned(), |s| s.to_string())
}
