//! Markdown-to-wireframe processing pipeline.
//!
//! Source text flows through fence isolation, CommonMark parsing,
//! inline directive recognition and the block/grid transforms, ending
//! in a [`crate::ast::DocumentNode`]. Every stage degrades gracefully:
//! unrecognized syntax stays literal text, never an error.
mod blocks;
mod core;
mod inline;
mod types;

pub use self::types::{ParseOptions, WiremdProcessor};
