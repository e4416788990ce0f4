//! Core implementation of the wireframe processor.
//!
//! Drives the pipeline: fence isolation, comrak parsing, inline and
//! block recognition, then the generic-to-typed transform that wraps
//! everything in a document node. No stage here has a fatal error path
//! for malformed wireframe syntax; unrecognized shapes degrade to
//! literal text.
use std::sync::LazyLock;

use comrak::{
  Arena,
  nodes::{AstNode, NodeValue},
  options::Options,
  parse_document,
};
use log::warn;
use regex::Regex;

use super::{
  blocks::{self, BlockEvent, PreparedSource},
  inline,
  types::WiremdProcessor,
};
use crate::{
  ast::{DocumentNode, Props, Span, WiremdNode},
  attrs,
  utils::static_regex,
};

static CHECKBOX_RE: LazyLock<Regex> =
  LazyLock::new(|| static_regex(r"^\[([ xX])\]\s*(.*)"));

static RADIO_RE: LazyLock<Regex> =
  LazyLock::new(|| static_regex(r"^\(([ •xX])\)\s*(.*)"));

static GRID_CLASS_RE: LazyLock<Regex> =
  LazyLock::new(|| static_regex(r"^grid-([0-9]+)$"));

impl WiremdProcessor {
  /// Parse wireframe-markdown source into a document tree.
  ///
  /// Total for core syntax: malformed directives stay literal text and
  /// malformed fencing flattens, so every input yields a document.
  #[must_use]
  pub fn parse(&self, source: &str) -> DocumentNode {
    let doc = build_document(source, self.options.track_position);

    if self.options.validate_on_parse {
      for finding in crate::validate::validate(&doc) {
        warn!("validation: {} at {}", finding.message, finding.path_display());
      }
    }

    doc
  }
}

/// Comrak options for the base markdown parse.
///
/// Deliberately plain: the tasklist extension stays off because `[x]`
/// markers are classified by the list transform, not by comrak.
fn comrak_options() -> Options<'static> {
  Options::default()
}

fn build_document(source: &str, track_position: bool) -> DocumentNode {
  let prepared = blocks::isolate_fences(source);
  let arena = Arena::new();
  let root = parse_document(&arena, &prepared.text, &comrak_options());

  let ctx = Context {
    track_position,
    prepared: &prepared,
  };

  let mut events = Vec::new();
  for child in root.children() {
    convert_block(child, &ctx, &mut events);
  }

  let mut children = blocks::assemble(events);
  attach_select_options(&mut children);
  group_grids(&mut children);

  DocumentNode::new(children)
}

struct Context<'a> {
  track_position: bool,
  prepared:       &'a PreparedSource,
}

impl Context<'_> {
  /// Node span translated back to original source lines.
  fn span<'a>(&self, node: &'a AstNode<'a>) -> Option<Span> {
    if !self.track_position {
      return None;
    }
    let pos = node.data.borrow().sourcepos;
    Some(Span {
      start_line: self.prepared.source_line(pos.start.line),
      end_line:   self.prepared.source_line(pos.end.line),
    })
  }
}

/// Convert one top-level comrak block into block events.
fn convert_block<'a>(
  node: &'a AstNode<'a>,
  ctx: &Context<'_>,
  events: &mut Vec<BlockEvent>,
) {
  let span = ctx.span(node);
  let value = node.data.borrow().value.clone();

  match value {
    NodeValue::Heading(heading) => {
      let text = collect_text(node);
      let (content, props) = attrs::take_attr_suffix(text.trim());
      events.push(BlockEvent::Nodes(vec![WiremdNode::Heading {
        level: heading.level,
        content: content.to_string(),
        props,
        position: span,
      }]));
    },

    NodeValue::Paragraph => {
      if let Some(image) = sole_image(node, span) {
        events.push(BlockEvent::Nodes(vec![image]));
        return;
      }

      let text = collect_text(node);
      let trimmed = text.trim();
      if let Some((name, props)) = blocks::parse_fence_open(trimmed) {
        events.push(BlockEvent::Open {
          name,
          props,
          position: span,
        });
      } else if blocks::is_fence_close(trimmed) {
        events.push(BlockEvent::Close { position: span });
      } else {
        events.push(BlockEvent::Nodes(inline::paragraph_nodes(&text, span)));
      }
    },

    NodeValue::List(_) => {
      events.push(BlockEvent::Nodes(vec![convert_list(node, ctx)]));
    },

    NodeValue::CodeBlock(code) => {
      let content = code.literal.trim_end();
      if !content.is_empty() {
        events.push(BlockEvent::Nodes(vec![WiremdNode::Paragraph {
          content:  content.to_string(),
          position: span,
        }]));
      }
    },

    NodeValue::HtmlBlock(html) => {
      let content = html.literal.trim();
      if !content.is_empty() {
        events.push(BlockEvent::Nodes(vec![WiremdNode::Paragraph {
          content:  content.to_string(),
          position: span,
        }]));
      }
    },

    NodeValue::ThematicBreak => {},

    // Blockquotes and anything else degrade to flattened prose so the
    // node family stays closed.
    _ => {
      let text = collect_text(node);
      let trimmed = text.trim();
      if !trimmed.is_empty() {
        events.push(BlockEvent::Nodes(vec![WiremdNode::Paragraph {
          content:  trimmed.to_string(),
          position: span,
        }]));
      }
    },
  }
}

/// Detect a paragraph that is exactly one image (plus whitespace).
fn sole_image<'a>(
  node: &'a AstNode<'a>,
  span: Option<Span>,
) -> Option<WiremdNode> {
  let mut image = None;
  for child in node.children() {
    match &child.data.borrow().value {
      NodeValue::Image(link) => {
        if image.is_some() {
          return None;
        }
        image = Some((link.url.clone(), collect_text(child)));
      },
      NodeValue::Text(text) if text.trim().is_empty() => {},
      _ => return None,
    }
  }

  image.map(|(src, alt)| {
    WiremdNode::Image {
      src,
      alt: alt.trim().to_string(),
      position: span,
    }
  })
}

/// Flatten a node's inline content to plain text.
///
/// Unresolved reference brackets survive as literal text, inline code
/// keeps its literal, soft breaks become newlines and images are
/// reconstructed as `![alt](src)` remnants.
fn collect_text<'a>(node: &'a AstNode<'a>) -> String {
  let mut out = String::new();
  collect_text_into(node, &mut out);
  out
}

fn collect_text_into<'a>(node: &'a AstNode<'a>, out: &mut String) {
  for child in node.children() {
    match &child.data.borrow().value {
      NodeValue::Text(text) => out.push_str(text),
      NodeValue::Code(code) => out.push_str(&code.literal),
      NodeValue::HtmlInline(html) => out.push_str(html),
      NodeValue::SoftBreak | NodeValue::LineBreak => out.push('\n'),
      NodeValue::Image(link) => {
        out.push_str("![");
        collect_text_into(child, out);
        out.push_str("](");
        out.push_str(&link.url);
        out.push(')');
      },
      _ => collect_text_into(child, out),
    }
  }
}

/// Convert a markdown list, sub-classifying items by their leading
/// checkbox / radio markers.
fn convert_list<'a>(node: &'a AstNode<'a>, ctx: &Context<'_>) -> WiremdNode {
  let mut children = Vec::new();

  for item in node.children() {
    let text = collect_text(item);
    let line = text.trim();

    if let Some(caps) = CHECKBOX_RE.captures(line) {
      children.push(WiremdNode::Checkbox {
        label:   caps[2].trim().to_string(),
        checked: caps[1].eq_ignore_ascii_case("x"),
      });
    } else if let Some(caps) = RADIO_RE.captures(line) {
      let marker = &caps[1];
      children.push(WiremdNode::Radio {
        label:    caps[2].trim().to_string(),
        selected: marker == "•" || marker.eq_ignore_ascii_case("x"),
      });
    } else if !line.is_empty() {
      children.push(WiremdNode::ListItem {
        content: line.to_string(),
      });
    }
  }

  WiremdNode::List {
    children,
    position: ctx.span(node),
  }
}

/// Attach a following all-plain list to a select trigger as options.
fn attach_select_options(nodes: &mut Vec<WiremdNode>) {
  let items = std::mem::take(nodes);
  let mut iter = items.into_iter().peekable();
  let mut out = Vec::new();

  while let Some(mut node) = iter.next() {
    if let WiremdNode::Container { children, .. } = &mut node {
      attach_select_options(children);
    }

    if let WiremdNode::Select { options, .. } = &mut node {
      if options.is_empty() && next_is_plain_list(iter.peek()) {
        if let Some(WiremdNode::List { children, .. }) = iter.next() {
          *options = children
            .into_iter()
            .filter_map(|item| {
              match item {
                WiremdNode::ListItem { content } => Some(content),
                _ => None,
              }
            })
            .collect();
        }
      }
    }

    out.push(node);
  }

  *nodes = out;
}

fn next_is_plain_list(next: Option<&WiremdNode>) -> bool {
  match next {
    Some(WiremdNode::List { children, .. }) => {
      children
        .iter()
        .all(|item| matches!(item, WiremdNode::ListItem { .. }))
    },
    _ => false,
  }
}

/// Grid column count from a `grid-N` class, if present.
fn grid_columns(props: &Props) -> Option<i64> {
  props.classes.iter().find_map(|class| {
    GRID_CLASS_RE
      .captures(class)
      .and_then(|caps| caps[1].parse().ok())
  })
}

/// Group sections following a `{.grid-N}` heading into a grid
/// container.
///
/// The run ends at the first heading whose level is less than or equal
/// to the triggering heading's level; each grouped section is a
/// container of type "section" holding the section heading and its
/// following non-heading siblings. The triggering heading itself stays
/// in place, followed by the grid container.
fn group_grids(nodes: &mut Vec<WiremdNode>) {
  for node in nodes.iter_mut() {
    if let WiremdNode::Container { children, .. } = node {
      group_grids(children);
    }
  }

  let items = std::mem::take(nodes);
  let mut iter = items.into_iter().peekable();
  let mut out = Vec::new();

  while let Some(node) = iter.next() {
    let trigger = match &node {
      WiremdNode::Heading { level, props, .. } => {
        grid_columns(props).map(|columns| (*level, columns))
      },
      _ => None,
    };

    out.push(node);
    let Some((trigger_level, columns)) = trigger else {
      continue;
    };

    let mut sections: Vec<WiremdNode> = Vec::new();
    let mut current: Option<(WiremdNode, Vec<WiremdNode>)> = None;

    loop {
      match iter.peek() {
        Some(WiremdNode::Heading { level, .. }) if *level <= trigger_level => {
          break;
        },
        Some(WiremdNode::Heading { .. }) => {
          if let Some((heading, body)) = current.take() {
            sections.push(section_container(heading, body));
          }
          if let Some(heading) = iter.next() {
            current = Some((heading, Vec::new()));
          }
        },
        Some(_) => {
          let Some(section) = current.as_mut() else {
            // Plain content directly after the trigger heading ends
            // the run; nothing to group.
            break;
          };
          if let Some(next) = iter.next() {
            section.1.push(next);
          }
        },
        None => break,
      }
    }

    if let Some((heading, body)) = current.take() {
      sections.push(section_container(heading, body));
    }

    if !sections.is_empty() {
      let mut props = Props::new();
      props.set("columns", columns);
      out.push(WiremdNode::Container {
        container_type: "grid".to_string(),
        props,
        children: sections,
        position: None,
      });
    }
  }

  *nodes = out;
}

fn section_container(
  heading: WiremdNode,
  body: Vec<WiremdNode>,
) -> WiremdNode {
  let position = match &heading {
    WiremdNode::Heading { position, .. } => *position,
    _ => None,
  };
  let mut children = vec![heading];
  children.extend(body);
  WiremdNode::Container {
    container_type: "section".to_string(),
    props: Props::new(),
    children,
    position,
  }
}
