//! Error types for the wiremd-commonmark public API.
//!
//! Parsing is total and validation reports findings instead of
//! failing, so rendering is the only fallible surface of the crate.
use thiserror::Error;

/// Errors surfaced by the renderer dispatcher.
#[derive(Debug, Error)]
pub enum RenderError {
  /// The JSON format failed to serialize the document tree.
  #[error("JSON serialization error: {0}")]
  Serialize(#[from] serde_json::Error),

  /// A format name outside the closed enumeration.
  #[error("unknown render format: {0}")]
  UnknownFormat(String),

  /// A style name outside the closed enumeration.
  #[error("unknown style: {0}")]
  UnknownStyle(String),
}
