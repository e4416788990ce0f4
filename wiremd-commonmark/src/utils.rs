//! Small shared helpers.
use regex::Regex;

/// Regex that can never match anything.
///
/// Fallback for the static directive patterns so a (theoretically)
/// failed compile degrades to "no directives recognized" instead of a
/// panic.
pub(crate) fn never_matching_regex() -> Regex {
  #[allow(
    clippy::expect_used,
    reason = "This pattern is guaranteed to be valid"
  )]
  Regex::new(r"[^\s\S]").expect("regex pattern [^\\s\\S] should always compile")
}

/// Compile a static pattern, logging and degrading on failure.
pub(crate) fn static_regex(pattern: &str) -> Regex {
  Regex::new(pattern).unwrap_or_else(|e| {
    log::error!("Failed to compile static regex {pattern:?}: {e}");
    never_matching_regex()
  })
}
