//! Emotion score types and dominant-emotion computation.

pub mod client;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Emotion labels
// ---------------------------------------------------------------------------

/// The five emotion categories tracked by the aggregated workflow model.
///
/// Declaration order is the canonical order. It determines both the order
/// fields appear in rendered output and which emotion wins a score tie
/// (the earliest one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anger,
    Disgust,
    Fear,
    Joy,
    Sadness,
}

impl Emotion {
    /// All emotions in canonical order.
    pub const ALL: [Emotion; 5] = [
        Emotion::Anger,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Joy,
        Emotion::Sadness,
    ];

    /// Lowercase label as it appears in the remote model's reply.
    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Scores
// ---------------------------------------------------------------------------

/// One score per emotion, as returned by the remote model.
///
/// Fields are optional: the model is expected to populate all five, but a
/// reply that omits some must not break downstream handling.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmotionScores {
    pub anger: Option<f64>,
    pub disgust: Option<f64>,
    pub fear: Option<f64>,
    pub joy: Option<f64>,
    pub sadness: Option<f64>,
}

impl EmotionScores {
    /// Score for a single emotion.
    pub fn get(&self, emotion: Emotion) -> Option<f64> {
        match emotion {
            Emotion::Anger => self.anger,
            Emotion::Disgust => self.disgust,
            Emotion::Fear => self.fear,
            Emotion::Joy => self.joy,
            Emotion::Sadness => self.sadness,
        }
    }

    /// The populated emotion with the greatest score, or `None` when every
    /// field is absent.
    ///
    /// Ties break to the emotion that comes first in canonical order: the
    /// comparison is strict, so a later equal score never replaces an
    /// earlier one.
    pub fn dominant(&self) -> Option<Emotion> {
        let mut best: Option<(Emotion, f64)> = None;
        for emotion in Emotion::ALL {
            let Some(score) = self.get(emotion) else {
                continue;
            };
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((emotion, score)),
            }
        }
        best.map(|(emotion, _)| emotion)
    }
}

// ---------------------------------------------------------------------------
// Classification outcome
// ---------------------------------------------------------------------------

/// Why a classification produced no scores.
///
/// Callers see a single collapsed "invalid input" message for all of these;
/// the distinction exists for logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("input text is empty")]
    EmptyInput,
    #[error("classifier request timed out")]
    Timeout,
    #[error("classifier request failed: {0}")]
    Transport(String),
    #[error("classifier returned status {0}")]
    Status(u16),
    #[error("malformed classifier response: {0}")]
    MalformedResponse(String),
}

/// Outcome of one classification call.
///
/// `Success` always carries a dominant emotion consistent with its scores;
/// every failure mode ends up in `Failure` with the reason preserved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ClassificationResult {
    Success {
        #[serde(flatten)]
        scores: EmotionScores,
        dominant_emotion: Emotion,
    },
    Failure {
        #[serde(skip)]
        reason: ClassifyError,
    },
}

impl ClassificationResult {
    /// Build a success result from raw scores, computing the dominant
    /// emotion. Returns `None` when no field is populated.
    pub fn from_scores(scores: EmotionScores) -> Option<Self> {
        scores.dominant().map(|dominant_emotion| Self::Success {
            scores,
            dominant_emotion,
        })
    }

    pub fn failure(reason: ClassifyError) -> Self {
        Self::Failure { reason }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
