//! Typed document tree produced by the wiremd parser.
//!
//! The node family is closed: every wireframe element the syntax can
//! express is a variant of [`WiremdNode`], discriminated by a `type`
//! field in the JSON form. Adding a variant is a single-point change
//! that every renderer must then handle exhaustively.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Document format version carried by every [`DocumentNode`].
///
/// The JSON output is the canonical interchange form and must stay
/// stable for a given version value.
pub const DOCUMENT_VERSION: &str = "0.1";

/// Source span for a node, in 1-based source lines.
///
/// Attached only when position tracking is requested; purely metadata,
/// never consulted by the renderers or the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Span {
  /// First source line the node was parsed from.
  pub start_line: usize,
  /// Last source line the node was parsed from.
  pub end_line:   usize,
}

/// A single property value inside a [`Props`] bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
  /// Boolean flag, e.g. a bare `required` token.
  Bool(bool),
  /// Numeric value, e.g. grid column counts.
  Int(i64),
  /// Everything else; `key:value` tokens always parse to strings.
  Str(String),
}

impl PropValue {
  /// String payload, if this value is a string.
  #[must_use]
  pub fn as_str(&self) -> Option<&str> {
    match self {
      Self::Str(s) => Some(s),
      Self::Bool(_) | Self::Int(_) => None,
    }
  }

  /// Boolean payload, if this value is a boolean.
  #[must_use]
  pub const fn as_bool(&self) -> Option<bool> {
    match self {
      Self::Bool(b) => Some(*b),
      Self::Int(_) | Self::Str(_) => None,
    }
  }

  /// Integer payload, if this value is an integer.
  #[must_use]
  pub const fn as_int(&self) -> Option<i64> {
    match self {
      Self::Int(i) => Some(*i),
      Self::Bool(_) | Self::Str(_) => None,
    }
  }
}

impl From<&str> for PropValue {
  fn from(s: &str) -> Self {
    Self::Str(s.to_string())
  }
}

impl From<String> for PropValue {
  fn from(s: String) -> Self {
    Self::Str(s)
  }
}

impl From<bool> for PropValue {
  fn from(b: bool) -> Self {
    Self::Bool(b)
  }
}

impl From<i64> for PropValue {
  fn from(i: i64) -> Self {
    Self::Int(i)
  }
}

/// Structured property bag attached to directive-bearing nodes.
///
/// `classes` preserves order and duplicates; all other attributes live
/// in an insertion-ordered map so the JSON form is stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Props {
  /// CSS-like classes collected from `.word` tokens, in source order.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub classes: Vec<String>,

  /// Remaining key/value and boolean-flag attributes.
  #[serde(flatten)]
  pub attrs: IndexMap<String, PropValue>,
}

impl Props {
  /// Empty bag.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// True when the bag carries neither classes nor attributes.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.classes.is_empty() && self.attrs.is_empty()
  }

  /// Set an attribute, replacing any previous value for the key.
  pub fn set(&mut self, key: &str, value: impl Into<PropValue>) {
    self.attrs.insert(key.to_string(), value.into());
  }

  /// Set an attribute only if the key is not already present.
  ///
  /// Shape-inferred defaults use this so that explicit `{...}` keys
  /// always win.
  pub fn set_default(&mut self, key: &str, value: impl Into<PropValue>) {
    if !self.attrs.contains_key(key) {
      self.attrs.insert(key.to_string(), value.into());
    }
  }

  /// Look up an attribute value.
  #[must_use]
  pub fn get(&self, key: &str) -> Option<&PropValue> {
    self.attrs.get(key)
  }

  /// Look up a string attribute.
  #[must_use]
  pub fn get_str(&self, key: &str) -> Option<&str> {
    self.attrs.get(key).and_then(PropValue::as_str)
  }

  /// True when the key is a boolean flag set to `true`.
  #[must_use]
  pub fn flag(&self, key: &str) -> bool {
    self.attrs.get(key).and_then(PropValue::as_bool) == Some(true)
  }

  /// Merge another bag into this one. Classes append in order;
  /// attributes from `other` replace same-keyed entries here.
  pub fn merge(&mut self, other: Self) {
    self.classes.extend(other.classes);
    for (key, value) in other.attrs {
      self.attrs.insert(key, value);
    }
  }
}

/// A node of the wireframe document tree.
///
/// Containers, lists and inline containers own their children by
/// composition; the tree is strictly hierarchical with no sharing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum WiremdNode {
  /// Section heading, levels 1-6.
  Heading {
    level:    u8,
    content:  String,
    #[serde(default, skip_serializing_if = "Props::is_empty")]
    props:    Props,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position: Option<Span>,
  },

  /// Plain prose. May still carry unrecognized directive remnants as
  /// literal text.
  Paragraph {
    content:  String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position: Option<Span>,
  },

  /// Plain inline fragment inside an inline container.
  Text { content: String },

  /// Push button; `props.variant` is `"primary"` when marked with `*`.
  Button {
    content:  String,
    #[serde(default, skip_serializing_if = "Props::is_empty")]
    props:    Props,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position: Option<Span>,
  },

  /// Form input; `props.type` is shape-inferred (`text`, `password`)
  /// unless overridden via an attribute suffix.
  Input {
    #[serde(default, skip_serializing_if = "Props::is_empty")]
    props:    Props,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position: Option<Span>,
  },

  /// Checkbox list item, from `[ ]` / `[x]` markers.
  Checkbox { label: String, checked: bool },

  /// Radio list item, from `( )` / `(•)` / `(x)` markers.
  Radio { label: String, selected: bool },

  /// Named icon, from `:name:`; `props.name` carries the identifier.
  Icon {
    #[serde(default, skip_serializing_if = "Props::is_empty")]
    props: Props,
  },

  /// Image pass-through from markdown.
  Image {
    src:      String,
    alt:      String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position: Option<Span>,
  },

  /// List of checkbox / radio / plain items.
  List {
    children: Vec<WiremdNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position: Option<Span>,
  },

  /// Plain list item (matched neither checkbox nor radio markers).
  ListItem { content: String },

  /// Named block container from `::: name {attrs}` fences.
  Container {
    container_type: String,
    #[serde(default, skip_serializing_if = "Props::is_empty")]
    props:          Props,
    children:       Vec<WiremdNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position:       Option<Span>,
  },

  /// Inline container (nav) from `[[ a | b | c ]]`.
  InlineContainer {
    items:      Vec<WiremdNode>,
    raw:        String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    attributes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position:   Option<Span>,
  },

  /// Select / dropdown trigger from `[Label ___v]`; a following plain
  /// list supplies the options.
  Select {
    label:    String,
    options:  Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position: Option<Span>,
  },
}

impl WiremdNode {
  /// Discriminant string matching the serialized `type` field.
  #[must_use]
  pub const fn type_name(&self) -> &'static str {
    match self {
      Self::Heading { .. } => "heading",
      Self::Paragraph { .. } => "paragraph",
      Self::Text { .. } => "text",
      Self::Button { .. } => "button",
      Self::Input { .. } => "input",
      Self::Checkbox { .. } => "checkbox",
      Self::Radio { .. } => "radio",
      Self::Icon { .. } => "icon",
      Self::Image { .. } => "image",
      Self::List { .. } => "list",
      Self::ListItem { .. } => "listItem",
      Self::Container { .. } => "container",
      Self::InlineContainer { .. } => "inlineContainer",
      Self::Select { .. } => "select",
    }
  }

  /// Child sequence for variants that own one.
  #[must_use]
  pub fn children(&self) -> Option<&[WiremdNode]> {
    match self {
      Self::List { children, .. } | Self::Container { children, .. } => {
        Some(children)
      },
      Self::InlineContainer { items, .. } => Some(items),
      _ => None,
    }
  }
}

/// Root of a parsed wireframe document.
///
/// `meta` is always present, even when empty, and `children` is always
/// an ordered sequence; the validator enforces both on untyped input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentNode {
  /// Always the literal `"document"`.
  #[serde(rename = "type", default = "document_tag")]
  pub node_type: String,

  /// Document format version, currently [`DOCUMENT_VERSION`].
  pub version: String,

  /// Free-form document metadata.
  #[serde(default)]
  pub meta: IndexMap<String, serde_json::Value>,

  /// Top-level nodes, in source order.
  #[serde(default)]
  pub children: Vec<WiremdNode>,
}

fn document_tag() -> String {
  "document".to_string()
}

impl DocumentNode {
  /// Empty document with an initialized (empty) meta mapping.
  #[must_use]
  pub fn new(children: Vec<WiremdNode>) -> Self {
    Self {
      node_type: document_tag(),
      version: DOCUMENT_VERSION.to_string(),
      meta: IndexMap::new(),
      children,
    }
  }
}

impl Default for DocumentNode {
  fn default() -> Self {
    Self::new(Vec::new())
  }
}
