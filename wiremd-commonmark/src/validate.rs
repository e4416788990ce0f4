//! Structural validator for wireframe document trees.
//!
//! Validation runs over the canonical JSON form so documents from any
//! producer (a fresh parse, a JSON file, foreign tooling) can be
//! checked. Violations are collected into an ordered findings list;
//! nothing here ever panics or returns an error.
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ast::DocumentNode;

/// One step of a finding's path from the document root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
  /// Object key, e.g. `children`.
  Key(String),
  /// Sequence index.
  Index(usize),
}

impl std::fmt::Display for PathSegment {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Key(key) => write!(f, "{key}"),
      Self::Index(index) => write!(f, "{index}"),
    }
  }
}

/// A single structural violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
  /// Human-readable description of the violation.
  pub message: String,

  /// Path from the root to the offending node.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub path: Vec<PathSegment>,

  /// Stable machine-readable code.
  pub code: String,
}

impl Finding {
  fn new(message: impl Into<String>, path: &[PathSegment], code: &str) -> Self {
    Self {
      message: message.into(),
      path:    path.to_vec(),
      code:    code.to_string(),
    }
  }

  /// Dotted path string for log and CLI output, `$` for the root.
  #[must_use]
  pub fn path_display(&self) -> String {
    if self.path.is_empty() {
      return "$".to_string();
    }
    let mut out = String::from("$");
    for segment in &self.path {
      out.push('.');
      out.push_str(&segment.to_string());
    }
    out
  }
}

/// Validate a typed document by serializing it to its canonical JSON
/// form first.
#[must_use]
pub fn validate(doc: &DocumentNode) -> Vec<Finding> {
  match serde_json::to_value(doc) {
    Ok(value) => validate_value(&value),
    Err(e) => {
      // Serialization of the typed tree cannot realistically fail;
      // surface it as a finding rather than an error to keep the
      // contract total.
      vec![Finding::new(
        format!("document failed to serialize: {e}"),
        &[],
        "INVALID_ROOT_TYPE",
      )]
    },
  }
}

/// Validate an untyped JSON document.
///
/// Checks, evaluated top-down and independently:
/// - root `type` must be the literal `"document"` (`INVALID_ROOT_TYPE`)
/// - `meta` must be present (`MISSING_META`)
/// - `children` must be an ordered sequence (`INVALID_CHILDREN`)
/// - every descendant node must carry a non-empty `type`
///   (`MISSING_NODE_TYPE`)
///
/// Recursion enters any object carrying a `children` field, so
/// containers, lists and future variants are covered uniformly.
#[must_use]
pub fn validate_value(doc: &Value) -> Vec<Finding> {
  let mut findings = Vec::new();
  let mut path = Vec::new();

  let root_type = doc.get("type").and_then(Value::as_str);
  if root_type != Some("document") {
    findings.push(Finding::new(
      format!("root type must be \"document\", found {root_type:?}"),
      &path,
      "INVALID_ROOT_TYPE",
    ));
  }

  if doc.get("meta").is_none() {
    findings.push(Finding::new(
      "document meta mapping is missing",
      &path,
      "MISSING_META",
    ));
  }

  match doc.get("children") {
    Some(Value::Array(children)) => {
      path.push(PathSegment::Key("children".to_string()));
      for (index, child) in children.iter().enumerate() {
        path.push(PathSegment::Index(index));
        validate_node(child, &mut path, &mut findings);
        path.pop();
      }
    },
    Some(_) => {
      findings.push(Finding::new(
        "document children must be an ordered sequence",
        &path,
        "INVALID_CHILDREN",
      ));
    },
    None => {
      findings.push(Finding::new(
        "document children sequence is missing",
        &path,
        "INVALID_CHILDREN",
      ));
    },
  }

  findings
}

fn validate_node(
  node: &Value,
  path: &mut Vec<PathSegment>,
  findings: &mut Vec<Finding>,
) {
  let has_type = node
    .get("type")
    .and_then(Value::as_str)
    .is_some_and(|t| !t.is_empty());
  if !has_type {
    findings.push(Finding::new(
      "node is missing a type field",
      path,
      "MISSING_NODE_TYPE",
    ));
  }

  if let Some(Value::Array(children)) = node.get("children") {
    path.push(PathSegment::Key("children".to_string()));
    for (index, child) in children.iter().enumerate() {
      path.push(PathSegment::Index(index));
      validate_node(child, path, findings);
      path.pop();
    }
    path.pop();
  }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, reason = "Fine in tests")]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn wrong_root_type_still_descends_into_children() {
    let doc = json!({
      "type": "page",
      "meta": {},
      "children": [{ "content": "typeless" }],
    });
    let findings = validate_value(&doc);
    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0].code, "INVALID_ROOT_TYPE");
    assert_eq!(findings[1].code, "MISSING_NODE_TYPE");
  }

  #[test]
  fn non_sequence_children_stop_descent() {
    let doc = json!({
      "type": "document",
      "meta": {},
      "children": "nope",
    });
    let findings = validate_value(&doc);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].code, "INVALID_CHILDREN");
  }

  #[test]
  fn missing_meta_is_reported() {
    let doc = json!({ "type": "document", "children": [] });
    let findings = validate_value(&doc);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].code, "MISSING_META");
  }

  #[test]
  fn path_identifies_a_deeply_nested_offender() {
    let doc = json!({
      "type": "document",
      "meta": {},
      "children": [{
        "type": "container",
        "containerType": "card",
        "children": [{
          "type": "container",
          "containerType": "section",
          "children": [{ "label": "typeless" }],
        }],
      }],
    });
    let findings = validate_value(&doc);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].code, "MISSING_NODE_TYPE");
    assert!(findings[0].path.len() >= 3);
    assert_eq!(findings[0].path_display(), "$.children.0.children.0.children.0");
  }
}
