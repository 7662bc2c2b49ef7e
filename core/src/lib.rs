//! Emotion library - classify free text against a remote emotion model.
//!
//! This crate provides:
//! - Remote classifier client and score types (`classify`)
//! - User-facing response formatting (`format`)
//! - Client and server configuration (`config`)
//!
//! Feature flags:
//! - `cli`: Command-line interface
//! - `server`: Axum HTTP server

// Core modules (always compiled, no server dependencies)
pub mod classify;
pub mod config;
pub mod error;
pub mod format;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Server module (feature-gated)
#[cfg(feature = "server")]
pub mod server;

// Re-export commonly used types
pub use classify::client::EmotionClient;
pub use classify::{ClassificationResult, Emotion, EmotionScores};
