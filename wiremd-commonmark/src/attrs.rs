//! Attribute mini-parser for trailing `{...}` suffixes.
//!
//! A suffix like `{.primary type:email required}` attaches classes,
//! key/value properties and boolean flags to the directive it follows.
//! Tokenization is whitespace-separated and every token is independent;
//! unrecognized token shapes are ignored so malformed suffixes degrade
//! instead of erroring.
use log::trace;

use crate::ast::Props;

/// True for plain identifiers: letters, digits, hyphen, underscore,
/// starting with a letter or underscore.
pub(crate) fn is_identifier(s: &str) -> bool {
  let mut chars = s.chars();
  chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
    && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Parse the interior of a `{...}` suffix into a property bag.
///
/// Token forms, in arbitrary order and repetition:
/// - `.word` appends `word` to `classes` (duplicates kept)
/// - `key:value` sets a string property
/// - a bare identifier sets a boolean `true` flag (`required` included)
///
/// Anything else is dropped.
#[must_use]
pub fn parse_attrs(input: &str) -> Props {
  let mut props = Props::new();

  for token in input.split_whitespace() {
    if let Some(class) = token.strip_prefix('.') {
      if !class.is_empty() {
        props.classes.push(class.to_string());
      }
      continue;
    }

    if let Some((key, value)) = token.split_once(':') {
      if is_identifier(key) {
        props.set(key, value);
      } else {
        trace!("ignoring malformed attribute token: {token}");
      }
      continue;
    }

    if is_identifier(token) {
      props.set(token, true);
    } else {
      trace!("ignoring malformed attribute token: {token}");
    }
  }

  props
}

/// Split a trailing `{...}` suffix off `text`.
///
/// Returns the body (suffix removed, right-trimmed) and the suffix
/// interior. When the text carries no suffix, or the braces are
/// unbalanced, the original text is returned whole so the caller can
/// keep it literal.
#[must_use]
pub fn split_attr_suffix(text: &str) -> (&str, Option<&str>) {
  let trimmed = text.trim_end();
  if !trimmed.ends_with('}') {
    return (text, None);
  }

  let Some(open) = trimmed.rfind('{') else {
    // Closing brace with no opener; leave it literal.
    return (text, None);
  };

  let interior = &trimmed[open + 1..trimmed.len() - 1];
  if interior.contains('{') || interior.contains('}') {
    return (text, None);
  }

  (trimmed[..open].trim_end(), Some(interior))
}

/// Parse a trailing suffix directly into a property bag.
///
/// Convenience for callers that do not need the raw interior.
#[must_use]
pub fn take_attr_suffix(text: &str) -> (&str, Props) {
  let (body, interior) = split_attr_suffix(text);
  (body, interior.map_or_else(Props::new, parse_attrs))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, reason = "Fine in tests")]
mod tests {
  use super::*;
  use crate::ast::PropValue;

  #[test]
  fn classes_keys_and_flags_parse_independently() {
    let props = parse_attrs(".primary type:email required");
    assert_eq!(props.classes, vec!["primary"]);
    assert_eq!(props.get_str("type"), Some("email"));
    assert!(props.flag("required"));
  }

  #[test]
  fn token_order_is_irrelevant() {
    let props = parse_attrs("required .primary type:email");
    assert_eq!(props.classes, vec!["primary"]);
    assert_eq!(props.get_str("type"), Some("email"));
    assert!(props.flag("required"));
  }

  #[test]
  fn duplicate_classes_are_kept_in_order() {
    let props = parse_attrs(".a .b .a");
    assert_eq!(props.classes, vec!["a", "b", "a"]);
  }

  #[test]
  fn malformed_tokens_are_ignored() {
    let props = parse_attrs(". :nokey 1bad key:ok");
    assert!(props.classes.is_empty());
    assert_eq!(props.attrs.len(), 1);
    assert_eq!(props.get_str("key"), Some("ok"));
  }

  #[test]
  fn bare_word_becomes_boolean_flag() {
    let props = parse_attrs("disabled");
    assert_eq!(props.get("disabled"), Some(&PropValue::Bool(true)));
  }

  #[test]
  fn suffix_splits_off_the_body() {
    let (body, interior) = split_attr_suffix("[Submit]{.primary}");
    assert_eq!(body, "[Submit]");
    assert_eq!(interior, Some(".primary"));
  }

  #[test]
  fn unbalanced_suffix_stays_literal() {
    let (body, interior) = split_attr_suffix("text }");
    assert_eq!(body, "text }");
    assert_eq!(interior, None);

    let (body, interior) = split_attr_suffix("text {a {b}}");
    assert_eq!(body, "text {a {b}}");
    assert_eq!(interior, None);
  }

  #[test]
  fn no_suffix_returns_text_unchanged() {
    let (body, interior) = split_attr_suffix("plain text");
    assert_eq!(body, "plain text");
    assert_eq!(interior, None);
  }
}
