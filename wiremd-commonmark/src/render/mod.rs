//! Renderer dispatcher: document tree in, output string out.
//!
//! Formats are a closed enumeration. The markup, component and
//! utility-markup renderers share node-type dispatch and differ only
//! in token emission; the JSON format bypasses dispatch entirely and
//! serializes the tree verbatim, making it the canonical form for
//! round-tripping and diffing. Rendering is a pure function of
//! (tree, options) with no state and no node visited twice.
mod component;
mod markup;
mod theme;
mod utility;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{ast::DocumentNode, error::RenderError};

/// Output formats understood by [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderFormat {
  /// Static HTML markup with an embedded theme stylesheet.
  Markup,
  /// Canonical JSON serialization of the document tree.
  Json,
  /// Component-tree serialization (JSX-like).
  Component,
  /// HTML markup styled with utility classes instead of a stylesheet.
  UtilityMarkup,
}

impl fmt::Display for RenderFormat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Self::Markup => "markup",
      Self::Json => "json",
      Self::Component => "component",
      Self::UtilityMarkup => "utility-markup",
    };
    f.write_str(name)
  }
}

impl FromStr for RenderFormat {
  type Err = RenderError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "markup" => Ok(Self::Markup),
      "json" => Ok(Self::Json),
      "component" => Ok(Self::Component),
      "utility-markup" => Ok(Self::UtilityMarkup),
      other => Err(RenderError::UnknownFormat(other.to_string())),
    }
  }
}

/// Visual themes for the markup-producing formats.
///
/// A style selects only the theme payload; the emitted element shape
/// is identical across styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
  /// Hand-drawn look.
  #[default]
  Sketch,
  /// Minimal, production-adjacent look.
  Clean,
  /// Classic gray-box wireframe look.
  Wireframe,
  /// No theme payload at all.
  None,
}

impl fmt::Display for Style {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Self::Sketch => "sketch",
      Self::Clean => "clean",
      Self::Wireframe => "wireframe",
      Self::None => "none",
    };
    f.write_str(name)
  }
}

impl FromStr for Style {
  type Err = RenderError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "sketch" => Ok(Self::Sketch),
      "clean" => Ok(Self::Clean),
      "wireframe" => Ok(Self::Wireframe),
      "none" => Ok(Self::None),
      other => Err(RenderError::UnknownStyle(other.to_string())),
    }
  }
}

/// Shared rendering context.
#[derive(Debug, Clone)]
pub struct RenderOptions {
  /// Output format to produce.
  pub format: RenderFormat,

  /// Theme selection for markup-producing formats.
  pub style: Style,

  /// Prefix for every emitted class name (markup format).
  pub class_prefix: String,

  /// Pretty-print the JSON format (2-space indent).
  pub pretty: bool,
}

impl Default for RenderOptions {
  fn default() -> Self {
    Self {
      format:       RenderFormat::Markup,
      style:        Style::default(),
      class_prefix: "wf-".to_string(),
      pretty:       false,
    }
  }
}

impl RenderOptions {
  /// Options for a given format with the defaults for everything else.
  #[must_use]
  pub fn for_format(format: RenderFormat) -> Self {
    Self {
      format,
      ..Self::default()
    }
  }
}

/// Render a document tree to the requested output format.
pub fn render(
  doc: &DocumentNode,
  options: &RenderOptions,
) -> Result<String, RenderError> {
  match options.format {
    RenderFormat::Json => {
      let json = if options.pretty {
        serde_json::to_string_pretty(doc)?
      } else {
        serde_json::to_string(doc)?
      };
      Ok(json)
    },
    RenderFormat::Markup => Ok(markup::render_document(doc, options)),
    RenderFormat::Component => Ok(component::render_document(doc, options)),
    RenderFormat::UtilityMarkup => Ok(utility::render_document(doc, options)),
  }
}
