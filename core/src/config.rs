//! Configuration for the classifier client and the HTTP server.
//!
//! Defaults match the original deployment; every value can be overridden
//! through `EMOTION_*` environment variables. Configuration is built once
//! and passed explicitly — there is no global state.

use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Remote endpoint of the Watson NLP EmotionPredict service.
pub const DEFAULT_ENDPOINT: &str = "https://sn-watson-emotion.labs.skills.network/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict";

/// English aggregated emotion workflow model.
pub const DEFAULT_MODEL_ID: &str = "emotion_aggregated-workflow_lang_en_stock";

/// Outbound call timeout. Without a bound the call can hang indefinitely.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default port for the HTTP server.
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
}

/// Settings for one [`crate::EmotionClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// URL of the remote classification endpoint.
    pub endpoint: String,
    /// Model selector sent in the `grpc-metadata-mm-model-id` header.
    pub model_id: String,
    /// Bound on the whole outbound call, connect through body.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            model_id: DEFAULT_MODEL_ID.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Build from the environment: `EMOTION_ENDPOINT`, `EMOTION_MODEL_ID`,
    /// `EMOTION_TIMEOUT_SECS`. Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let timeout_secs = parse_var(
            "EMOTION_TIMEOUT_SECS",
            env::var("EMOTION_TIMEOUT_SECS").ok(),
            DEFAULT_TIMEOUT_SECS,
        )?;
        Ok(Self {
            endpoint: env::var("EMOTION_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_owned()),
            model_id: env::var("EMOTION_MODEL_ID").unwrap_or_else(|_| DEFAULT_MODEL_ID.to_owned()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Settings for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub client: ClientConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            client: ClientConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Build from the environment: `EMOTION_PORT` plus everything
    /// [`ClientConfig::from_env`] reads.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_var("EMOTION_PORT", env::var("EMOTION_PORT").ok(), DEFAULT_PORT)?,
            client: ClientConfig::from_env()?,
        })
    }
}

/// Parse an optional environment value, falling back to `default` when unset.
fn parse_var<T: FromStr>(
    var: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidValue { var, value: raw }),
        None => Ok(default),
    }
}
