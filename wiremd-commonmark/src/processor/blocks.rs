//! Block container recognizer.
//!
//! Fenced spans (`::: name {attrs}` ... `:::`) group the enclosed
//! top-level nodes into named container nodes with arbitrary nesting.
//! A line preprocessor first isolates fence lines so the base markdown
//! parser hands each one back as its own paragraph; a stack of
//! accumulation frames then nests the containers. Unmatched fencing is
//! recoverable: orphaned opens flatten their children back into the
//! parent, orphaned closes are dropped.
use std::sync::LazyLock;

use log::warn;
use regex::Regex;

use crate::{
  ast::{Props, Span, WiremdNode},
  attrs::parse_attrs,
  utils::static_regex,
};

static FENCE_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| {
  static_regex(r"^:{3,}\s*([A-Za-z][A-Za-z0-9_-]*)\s*(?:\{([^{}]*)\})?\s*$")
});

static FENCE_CLOSE_RE: LazyLock<Regex> =
  LazyLock::new(|| static_regex(r"^:{3,}\s*$"));

/// Fence-isolated source text plus a mapping from new line numbers back
/// to the original ones (1-based), so node positions survive the
/// inserted blank lines.
pub(crate) struct PreparedSource {
  pub text:     String,
  pub line_map: Vec<usize>,
}

impl PreparedSource {
  /// Translate a line number in the prepared text back to the source.
  pub fn source_line(&self, prepared_line: usize) -> usize {
    self
      .line_map
      .get(prepared_line.saturating_sub(1))
      .copied()
      .unwrap_or(prepared_line)
  }
}

/// Surround container fence lines with blank lines so the markdown
/// parser cannot merge them into adjacent paragraphs.
///
/// Fence-looking lines inside markdown code fences are left alone.
pub(crate) fn isolate_fences(source: &str) -> PreparedSource {
  let mut out: Vec<(String, usize)> = Vec::new();
  let mut in_code_block = false;
  let mut code_fence_char = None;
  let mut code_fence_count = 0;

  for (idx, line) in source.lines().enumerate() {
    let line_no = idx + 1;
    let trimmed = line.trim_start();

    // Track markdown code fences so ::: inside them stays literal.
    if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
      if let Some(fence_char) = trimmed.chars().next() {
        let fence_count =
          trimmed.chars().take_while(|&c| c == fence_char).count();
        if fence_count >= 3 {
          if !in_code_block {
            in_code_block = true;
            code_fence_char = Some(fence_char);
            code_fence_count = fence_count;
          } else if code_fence_char == Some(fence_char)
            && fence_count >= code_fence_count
          {
            in_code_block = false;
            code_fence_char = None;
            code_fence_count = 0;
          }
        }
      }
    }

    let is_fence = !in_code_block
      && (FENCE_OPEN_RE.is_match(line.trim())
        || FENCE_CLOSE_RE.is_match(line.trim()));

    if is_fence {
      if out.last().is_some_and(|(prev, _)| !prev.is_empty()) {
        out.push((String::new(), line_no));
      }
      out.push((line.trim().to_string(), line_no));
      out.push((String::new(), line_no));
    } else {
      out.push((line.to_string(), line_no));
    }
  }

  let mut text = String::with_capacity(source.len() + 16);
  let mut line_map = Vec::with_capacity(out.len());
  for (line, orig) in out {
    text.push_str(&line);
    text.push('\n');
    line_map.push(orig);
  }

  PreparedSource { text, line_map }
}

/// Parse a fence opener, returning the container name and attributes.
pub(crate) fn parse_fence_open(line: &str) -> Option<(String, Props)> {
  let caps = FENCE_OPEN_RE.captures(line.trim())?;
  let name = caps[1].to_string();
  let props = caps
    .get(2)
    .map_or_else(Props::new, |m| parse_attrs(m.as_str()));
  Some((name, props))
}

/// True for a bare closing fence line.
pub(crate) fn is_fence_close(line: &str) -> bool {
  FENCE_CLOSE_RE.is_match(line.trim())
}

/// One event in the flattened top-level sequence.
pub(crate) enum BlockEvent {
  Open {
    name:     String,
    props:    Props,
    position: Option<Span>,
  },
  Close {
    position: Option<Span>,
  },
  Nodes(Vec<WiremdNode>),
}

struct Frame {
  name:     String,
  props:    Props,
  position: Option<Span>,
  children: Vec<WiremdNode>,
}

/// Fold the event sequence into a node sequence, nesting containers.
pub(crate) fn assemble(events: Vec<BlockEvent>) -> Vec<WiremdNode> {
  let mut root: Vec<WiremdNode> = Vec::new();
  let mut stack: Vec<Frame> = Vec::new();

  for event in events {
    match event {
      BlockEvent::Open {
        name,
        props,
        position,
      } => {
        stack.push(Frame {
          name,
          props,
          position,
          children: Vec::new(),
        });
      },
      BlockEvent::Close { position } => {
        if let Some(frame) = stack.pop() {
          let span = match (frame.position, position) {
            (Some(open), Some(close)) => {
              Some(Span {
                start_line: open.start_line,
                end_line:   close.end_line,
              })
            },
            (open, _) => open,
          };
          let container = WiremdNode::Container {
            container_type: frame.name,
            props: frame.props,
            children: frame.children,
            position: span,
          };
          push_node(&mut root, &mut stack, container);
        } else {
          warn!("closing fence without a matching opener; dropping it");
        }
      },
      BlockEvent::Nodes(nodes) => {
        for node in nodes {
          push_node(&mut root, &mut stack, node);
        }
      },
    }
  }

  // Orphaned opens: flatten their accumulated children into the parent
  // rather than dropping them.
  while let Some(frame) = stack.pop() {
    warn!("unclosed container fence '{}'; flattening contents", frame.name);
    for node in frame.children {
      push_node(&mut root, &mut stack, node);
    }
  }

  root
}

fn push_node(
  root: &mut Vec<WiremdNode>,
  stack: &mut [Frame],
  node: WiremdNode,
) {
  if let Some(frame) = stack.last_mut() {
    frame.children.push(node);
  } else {
    root.push(node);
  }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, reason = "Fine in tests")]
mod tests {
  use super::*;

  #[test]
  fn fence_lines_are_isolated_with_blank_lines() {
    let prepared = isolate_fences("::: card\ntext\n:::");
    assert_eq!(prepared.text, "::: card\n\ntext\n\n:::\n\n");
    assert_eq!(prepared.source_line(1), 1);
    assert_eq!(prepared.source_line(3), 2);
    assert_eq!(prepared.source_line(5), 3);
  }

  #[test]
  fn fences_inside_code_blocks_stay_put() {
    let source = "```\n::: card\n```\n";
    let prepared = isolate_fences(source);
    assert_eq!(prepared.text, source);
  }

  #[test]
  fn open_line_parses_name_and_attrs() {
    let (name, props) = parse_fence_open("::: hero {.wide pad:2}").unwrap();
    assert_eq!(name, "hero");
    assert_eq!(props.classes, vec!["wide"]);
    assert_eq!(props.get_str("pad"), Some("2"));
  }

  #[test]
  fn nameless_fence_is_not_an_opener() {
    assert!(parse_fence_open(":::").is_none());
    assert!(parse_fence_open("::: {.x}").is_none());
    assert!(is_fence_close(":::"));
  }

  #[test]
  fn orphaned_open_flattens_children() {
    let events = vec![
      BlockEvent::Open {
        name:     "card".to_string(),
        props:    Props::new(),
        position: None,
      },
      BlockEvent::Nodes(vec![WiremdNode::Paragraph {
        content:  "inside".to_string(),
        position: None,
      }]),
    ];
    let nodes = assemble(events);
    assert_eq!(nodes.len(), 1);
    assert!(matches!(&nodes[0], WiremdNode::Paragraph { .. }));
  }

  #[test]
  fn orphaned_close_is_dropped() {
    let events = vec![
      BlockEvent::Close { position: None },
      BlockEvent::Nodes(vec![WiremdNode::Paragraph {
        content:  "after".to_string(),
        position: None,
      }]),
    ];
    let nodes = assemble(events);
    assert_eq!(nodes.len(), 1);
  }
}
