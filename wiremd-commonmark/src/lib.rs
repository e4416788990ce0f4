//! # wiremd-commonmark - Markdown-flavored wireframe parsing
//!
//! Parses wireframe-markdown, a Markdown superset for sketching user
//! interfaces in plain text, into a typed document tree and renders
//! that tree to several output formats. Built on `comrak` with
//! AST-based recognition of interactive directives (`[Button]`,
//! `[_____]`, `[[nav|items]]`, `:icon:`, `::: container` fences) and
//! graceful degradation for anything malformed.
//!
//! ## Quick Start
//!
//! ```rust
//! use wiremd_commonmark::{
//!   ParseOptions, RenderFormat, RenderOptions, parse, render, validate,
//! };
//!
//! let doc = parse("# Login\n\n[Email ____]\n\n[Submit]*", &ParseOptions::default());
//! assert!(validate(&doc).is_empty());
//!
//! let html = render(&doc, &RenderOptions::for_format(RenderFormat::Markup))
//!   .expect("markup rendering is infallible");
//! assert!(html.contains("<button"));
//! ```
//!
//! ## Pipeline
//!
//! - **Fence isolation** so `:::` container lines survive CommonMark
//!   paragraph merging
//! - **Inline recognition** for bracket units, nav containers and icon
//!   shorthand
//! - **Block assembly** for nested containers with orphan-fence
//!   flattening
//! - **Tree transforms** for checkbox/radio lists, select option
//!   attachment and heading-triggered grid grouping
//!
//! Parsing is total: any text input yields a document tree. Structural
//! problems in hand-written or foreign JSON documents are reported by
//! [`validate_value`] as ordered findings rather than errors.
mod ast;
mod attrs;
mod error;
pub mod processor;
pub mod render;
mod utils;
mod validate;

pub use crate::{
  ast::{DOCUMENT_VERSION, DocumentNode, PropValue, Props, Span, WiremdNode},
  error::RenderError,
  processor::{ParseOptions, WiremdProcessor},
  render::{RenderFormat, RenderOptions, Style, render},
  validate::{Finding, PathSegment, validate, validate_value},
};

/// Parse wireframe-markdown source into a document tree.
///
/// Convenience wrapper over [`WiremdProcessor`] for one-shot use.
#[must_use]
pub fn parse(source: &str, options: &ParseOptions) -> DocumentNode {
  WiremdProcessor::new(*options).parse(source)
}
