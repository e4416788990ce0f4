//! Type definitions for the wireframe processor.
use serde::{Deserialize, Serialize};

/// Options for configuring a parse run.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ParseOptions {
  /// Attach source line spans to the nodes that carry a position slot.
  #[serde(default)]
  pub track_position: bool,

  /// Run the structural validator after parsing and log any findings
  /// as warnings. Findings never fail the parse.
  #[serde(default)]
  pub validate_on_parse: bool,
}

/// Main wireframe-markdown processor.
///
/// Stateless apart from its options: each [`parse`](Self::parse) call
/// builds and returns a fresh, independently owned tree, so a single
/// processor may be shared across threads freely.
#[derive(Debug, Clone, Default)]
pub struct WiremdProcessor {
  pub(crate) options: ParseOptions,
}

impl WiremdProcessor {
  /// Create a processor with the given options.
  #[must_use]
  pub const fn new(options: ParseOptions) -> Self {
    Self { options }
  }

  /// Access the processor options.
  #[must_use]
  pub const fn options(&self) -> &ParseOptions {
    &self.options
  }
}
