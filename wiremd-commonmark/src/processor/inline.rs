//! Inline directive recognizer.
//!
//! Scans flattened paragraph text for the three bracket families, in
//! precedence order: `[[ a | b ]]{attrs?}` inline containers, `:name:`
//! icons, and `[inner]{attrs?}` / `[inner]*` bracket units classified
//! by the shape of their content. Anything ambiguous or malformed is
//! left untouched as literal text; this pass never fails.
use std::sync::LazyLock;

use log::trace;
use regex::Regex;

use crate::{
  ast::{Props, Span, WiremdNode},
  attrs::parse_attrs,
  utils::static_regex,
};

static ICON_RE: LazyLock<Regex> =
  LazyLock::new(|| static_regex(r"^:([A-Za-z][A-Za-z0-9_-]*):"));

/// Optional label, an underscore run, optional trailing select marker.
static INPUT_SHAPE_RE: LazyLock<Regex> =
  LazyLock::new(|| static_regex(r"^([^_]*?)\s*_{3,}\s*(v?)$"));

static PASSWORD_SHAPE_RE: LazyLock<Regex> =
  LazyLock::new(|| static_regex(r"^\*+$"));

/// One scanned unit of paragraph text: either literal text or a
/// recognized wireframe node.
pub(crate) enum InlineUnit {
  Text(String),
  Node(WiremdNode),
}

/// Scan a run of inline text into literal and directive units.
///
/// First match wins per scanned position; unmatched characters
/// accumulate into text units.
pub(crate) fn scan_inline(text: &str) -> Vec<InlineUnit> {
  let mut units = Vec::new();
  let mut buf = String::new();
  let mut i = 0;

  while i < text.len() {
    let rest = &text[i..];

    if rest.starts_with("[[") {
      if let Some((node, consumed)) = match_inline_container(rest) {
        flush_text(&mut buf, &mut units);
        units.push(InlineUnit::Node(node));
        i += consumed;
        continue;
      }
    } else if rest.starts_with('[') {
      if let Some((node, consumed)) = match_bracket_unit(rest) {
        flush_text(&mut buf, &mut units);
        units.push(InlineUnit::Node(node));
        i += consumed;
        continue;
      }
    } else if rest.starts_with(':') {
      if let Some(caps) = ICON_RE.captures(rest) {
        flush_text(&mut buf, &mut units);
        let mut props = Props::new();
        props.set("name", &caps[1]);
        units.push(InlineUnit::Node(WiremdNode::Icon { props }));
        i += caps[0].len();
        continue;
      }
    }

    if let Some(ch) = rest.chars().next() {
      buf.push(ch);
      i += ch.len_utf8();
    } else {
      break;
    }
  }

  flush_text(&mut buf, &mut units);
  units
}

fn flush_text(buf: &mut String, units: &mut Vec<InlineUnit>) {
  if !buf.is_empty() {
    units.push(InlineUnit::Text(std::mem::take(buf)));
  }
}

/// Match `[[ a | b | c ]]{attrs?}` at the start of `rest`.
///
/// Returns the inline container node and the number of bytes consumed,
/// or `None` when the delimiters do not close on the same line.
fn match_inline_container(rest: &str) -> Option<(WiremdNode, usize)> {
  let inner_end = rest[2..].find("]]")?;
  let inner = &rest[2..2 + inner_end];
  if inner.contains('\n') {
    return None;
  }

  let mut consumed = 2 + inner_end + 2;
  let after = &rest[consumed..];
  let attributes = match take_brace_suffix(after) {
    Some((interior, extra)) => {
      consumed += extra;
      interior.to_string()
    },
    None => String::new(),
  };

  let mut items = Vec::new();
  for segment in inner.split('|') {
    let segment = segment.trim();
    if segment.is_empty() {
      continue;
    }
    for unit in scan_inline(segment) {
      match unit {
        InlineUnit::Text(text) => {
          let text = text.trim();
          if !text.is_empty() {
            items.push(WiremdNode::Text {
              content: text.to_string(),
            });
          }
        },
        InlineUnit::Node(node) => items.push(node),
      }
    }
  }

  trace!("recognized inline container with {} items", items.len());
  let node = WiremdNode::InlineContainer {
    items,
    raw: inner.trim().to_string(),
    attributes,
    position: None,
  };
  Some((node, consumed))
}

/// Match a single-line `[inner]` unit (no internal brackets) with an
/// optional `*` or `{...}` suffix.
fn match_bracket_unit(rest: &str) -> Option<(WiremdNode, usize)> {
  let mut inner_end = None;
  for (offset, ch) in rest[1..].char_indices() {
    match ch {
      ']' => {
        inner_end = Some(offset);
        break;
      },
      '[' | '\n' => return None,
      _ => {},
    }
  }

  let inner_end = inner_end?;
  let inner = rest[1..1 + inner_end].trim();
  if inner.is_empty() {
    // Empty brackets stay literal.
    return None;
  }

  let mut consumed = 1 + inner_end + 1;
  let after = &rest[consumed..];

  let mut primary = false;
  let mut attr_interior = None;
  if after.starts_with('*') {
    primary = true;
    consumed += 1;
  } else if let Some((interior, extra)) = take_brace_suffix(after) {
    attr_interior = Some(interior);
    consumed += extra;
  }

  Some((classify_bracket(inner, primary, attr_interior), consumed))
}

/// Take a `{...}` group at the start of `rest`, rejecting nested or
/// unclosed braces. Returns the interior and the bytes consumed.
fn take_brace_suffix(rest: &str) -> Option<(&str, usize)> {
  if !rest.starts_with('{') {
    return None;
  }
  for (offset, ch) in rest[1..].char_indices() {
    match ch {
      '}' => return Some((&rest[1..1 + offset], offset + 2)),
      '{' | '\n' => return None,
      _ => {},
    }
  }
  None
}

/// Classify a bracket unit by the shape of its content.
///
/// Explicit attribute keys always win over shape-inferred defaults.
fn classify_bracket(
  inner: &str,
  primary: bool,
  attr_interior: Option<&str>,
) -> WiremdNode {
  let explicit = attr_interior.map_or_else(Props::new, parse_attrs);

  if let Some(caps) = INPUT_SHAPE_RE.captures(inner) {
    let label = caps[1].trim();
    let is_select = !caps[2].is_empty();

    // An explicit type overrides the select marker, same as it
    // overrides the text default.
    if is_select && explicit.get_str("type").is_none() {
      trace!("recognized select trigger: {label:?}");
      return WiremdNode::Select {
        label:    label.to_string(),
        options:  Vec::new(),
        position: None,
      };
    }

    let mut props = explicit;
    props.set_default("type", "text");
    if !label.is_empty() {
      props.set_default("placeholder", label);
    }
    return WiremdNode::Input {
      props,
      position: None,
    };
  }

  if PASSWORD_SHAPE_RE.is_match(inner) {
    let mut props = explicit;
    props.set_default("type", "password");
    return WiremdNode::Input {
      props,
      position: None,
    };
  }

  let mut props = explicit;
  if primary {
    props.set_default("variant", "primary");
  }
  WiremdNode::Button {
    content: inner.to_string(),
    props,
    position: None,
  }
}

/// Attach a span to a node that carries a position slot.
pub(crate) fn assign_position(node: &mut WiremdNode, span: Span) {
  match node {
    WiremdNode::Heading { position, .. }
    | WiremdNode::Paragraph { position, .. }
    | WiremdNode::Button { position, .. }
    | WiremdNode::Input { position, .. }
    | WiremdNode::Image { position, .. }
    | WiremdNode::List { position, .. }
    | WiremdNode::Container { position, .. }
    | WiremdNode::InlineContainer { position, .. }
    | WiremdNode::Select { position, .. } => *position = Some(span),
    WiremdNode::Text { .. }
    | WiremdNode::Checkbox { .. }
    | WiremdNode::Radio { .. }
    | WiremdNode::Icon { .. }
    | WiremdNode::ListItem { .. } => {},
  }
}

/// Convert a paragraph's flattened text into block-level nodes.
///
/// A paragraph with no recognized directives stays a single paragraph;
/// when directives are present, interleaved prose runs surface as
/// paragraph nodes between the typed nodes.
pub(crate) fn paragraph_nodes(
  text: &str,
  span: Option<Span>,
) -> Vec<WiremdNode> {
  let units = scan_inline(text);
  let has_directives =
    units.iter().any(|u| matches!(u, InlineUnit::Node(_)));

  if !has_directives {
    let content = text.trim();
    if content.is_empty() {
      return Vec::new();
    }
    return vec![WiremdNode::Paragraph {
      content:  content.to_string(),
      position: span,
    }];
  }

  let mut nodes = Vec::new();
  for unit in units {
    match unit {
      InlineUnit::Text(text) => {
        let text = text.trim();
        if !text.is_empty() {
          nodes.push(WiremdNode::Paragraph {
            content:  text.to_string(),
            position: span,
          });
        }
      },
      InlineUnit::Node(mut node) => {
        if let Some(span) = span {
          assign_position(&mut node, span);
        }
        nodes.push(node);
      },
    }
  }
  nodes
}
