use std::io;

use thiserror::Error;

/// Top-level error type for the wiremd binary.
#[derive(Debug, Error)]
pub enum WiremdError {
  #[error("Configuration error: {0}")]
  Config(String),

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("Render error: {0}")]
  Render(#[from] wiremd_commonmark::RenderError),

  #[error("Serde error: {0}")]
  Serde(#[from] serde_json::Error),

  #[error("TOML error: {0}")]
  Toml(#[from] toml::de::Error),

  #[error("TOML serialize error: {0}")]
  TomlSer(#[from] toml::ser::Error),

  #[error("Watch error: {0}")]
  Watch(#[from] notify::Error),
}
