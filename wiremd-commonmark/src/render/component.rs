//! Component-tree renderer.
//!
//! Serializes the document as a JSX-like element tree for handoff to
//! component-based frontends. Styles do not apply here; the format is
//! structural, not visual.
use html_escape::{encode_double_quoted_attribute, encode_text};

use super::RenderOptions;
use crate::ast::{DocumentNode, PropValue, Props, WiremdNode};

pub(super) fn render_document(
  doc: &DocumentNode,
  _options: &RenderOptions,
) -> String {
  let mut lines = vec![format!(
    "<Document version=\"{}\">",
    encode_double_quoted_attribute(&doc.version)
  )];
  for child in &doc.children {
    lines.push(render_node(child, 1));
  }
  lines.push("</Document>".to_string());
  lines.join("\n")
}

fn render_node(node: &WiremdNode, depth: usize) -> String {
  let pad = "  ".repeat(depth);

  match node {
    WiremdNode::Heading {
      level,
      content,
      props,
      ..
    } => {
      format!(
        "{pad}<Heading level=\"{level}\"{}>{}</Heading>",
        prop_attrs(props),
        encode_text(content)
      )
    },

    WiremdNode::Paragraph { content, .. } => {
      format!("{pad}<Paragraph>{}</Paragraph>", encode_text(content))
    },

    WiremdNode::Text { content } => {
      format!("{pad}<Text>{}</Text>", encode_text(content))
    },

    WiremdNode::Button { content, props, .. } => {
      format!(
        "{pad}<Button{}>{}</Button>",
        prop_attrs(props),
        encode_text(content)
      )
    },

    WiremdNode::Input { props, .. } => {
      format!("{pad}<Input{} />", prop_attrs(props))
    },

    WiremdNode::Checkbox { label, checked } => {
      format!(
        "{pad}<Checkbox checked=\"{checked}\">{}</Checkbox>",
        encode_text(label)
      )
    },

    WiremdNode::Radio { label, selected } => {
      format!(
        "{pad}<Radio selected=\"{selected}\">{}</Radio>",
        encode_text(label)
      )
    },

    WiremdNode::Icon { props } => {
      format!("{pad}<Icon{} />", prop_attrs(props))
    },

    WiremdNode::Image { src, alt, .. } => {
      format!(
        "{pad}<Image src=\"{}\" alt=\"{}\" />",
        encode_double_quoted_attribute(src),
        encode_double_quoted_attribute(alt)
      )
    },

    WiremdNode::List { children, .. } => {
      let mut lines = vec![format!("{pad}<List>")];
      for child in children {
        lines.push(render_node(child, depth + 1));
      }
      lines.push(format!("{pad}</List>"));
      lines.join("\n")
    },

    WiremdNode::ListItem { content } => {
      format!("{pad}<ListItem>{}</ListItem>", encode_text(content))
    },

    WiremdNode::Container {
      container_type,
      props,
      children,
      ..
    } => {
      let mut lines = vec![format!(
        "{pad}<Container type=\"{}\"{}>",
        encode_double_quoted_attribute(container_type),
        prop_attrs(props)
      )];
      for child in children {
        lines.push(render_node(child, depth + 1));
      }
      lines.push(format!("{pad}</Container>"));
      lines.join("\n")
    },

    WiremdNode::InlineContainer { items, .. } => {
      let mut lines = vec![format!("{pad}<Nav>")];
      for item in items {
        lines.push(render_node(item, depth + 1));
      }
      lines.push(format!("{pad}</Nav>"));
      lines.join("\n")
    },

    WiremdNode::Select { label, options, .. } => {
      let mut lines = vec![format!(
        "{pad}<Select label=\"{}\">",
        encode_double_quoted_attribute(label)
      )];
      for option in options {
        lines.push(format!(
          "{pad}  <Option>{}</Option>",
          encode_text(option)
        ));
      }
      lines.push(format!("{pad}</Select>"));
      lines.join("\n")
    },
  }
}

/// Attribute string for a props bag, leading space included when
/// non-empty. Classes collapse into a single `class` attribute.
fn prop_attrs(props: &Props) -> String {
  let mut out = String::new();
  if !props.classes.is_empty() {
    out.push_str(&format!(
      " class=\"{}\"",
      encode_double_quoted_attribute(&props.classes.join(" "))
    ));
  }
  for (key, value) in &props.attrs {
    let rendered = match value {
      PropValue::Bool(b) => b.to_string(),
      PropValue::Int(n) => n.to_string(),
      PropValue::Str(s) => encode_double_quoted_attribute(s).to_string(),
    };
    out.push_str(&format!(" {key}=\"{rendered}\""));
  }
  out
}
