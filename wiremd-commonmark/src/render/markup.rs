//! Static HTML markup renderer.
//!
//! Emits one fragment per node via structural recursion, newline
//! joined, with the selected theme stylesheet embedded at the top.
//! The element shape never varies with the style; only the stylesheet
//! payload does.
use html_escape::{encode_double_quoted_attribute, encode_text};

use super::{RenderOptions, theme};
use crate::{
  ast::{DocumentNode, Props, WiremdNode},
  attrs::parse_attrs,
};

pub(super) fn render_document(
  doc: &DocumentNode,
  options: &RenderOptions,
) -> String {
  let p = &options.class_prefix;
  let mut out = String::new();

  if let Some(css) = theme::stylesheet(options.style, p) {
    out.push_str("<style>\n");
    out.push_str(&css);
    out.push_str("</style>\n");
  }

  out.push_str(&format!("<div class=\"{p}document\">\n"));
  for child in &doc.children {
    out.push_str(&render_node(child, options, 1));
    out.push('\n');
  }
  out.push_str("</div>");
  out
}

/// Base class plus user classes from the directive's attribute suffix.
fn class_list(options: &RenderOptions, base: &str, props: &Props) -> String {
  let mut classes = format!("{}{base}", options.class_prefix);
  for class in &props.classes {
    classes.push(' ');
    classes.push_str(&encode_double_quoted_attribute(class));
  }
  classes
}

fn render_node(
  node: &WiremdNode,
  options: &RenderOptions,
  depth: usize,
) -> String {
  let p = &options.class_prefix;
  let pad = "  ".repeat(depth);

  match node {
    WiremdNode::Heading {
      level,
      content,
      props,
      ..
    } => {
      format!(
        "{pad}<h{level} class=\"{}\">{}</h{level}>",
        class_list(options, "heading", props),
        encode_text(content)
      )
    },

    WiremdNode::Paragraph { content, .. } => {
      format!("{pad}<p class=\"{p}text\">{}</p>", encode_text(content))
    },

    WiremdNode::Text { content } => {
      format!("{pad}<span class=\"{p}text\">{}</span>", encode_text(content))
    },

    WiremdNode::Button { content, props, .. } => {
      let mut classes = class_list(options, "button", props);
      if props.get_str("variant") == Some("primary") {
        classes.push_str(&format!(" {p}button-primary"));
      }
      format!(
        "{pad}<button class=\"{classes}\">{}</button>",
        encode_text(content)
      )
    },

    WiremdNode::Input { props, .. } => {
      let mut input = format!(
        "{pad}<input class=\"{}\" type=\"{}\"",
        class_list(options, "input", props),
        encode_double_quoted_attribute(props.get_str("type").unwrap_or("text"))
      );
      if let Some(placeholder) = props.get_str("placeholder") {
        input.push_str(&format!(
          " placeholder=\"{}\"",
          encode_double_quoted_attribute(placeholder)
        ));
      }
      if props.flag("required") {
        input.push_str(" required");
      }
      input.push_str(" />");
      input
    },

    WiremdNode::Checkbox { label, checked } => {
      format!("{pad}{}", checkable(p, "checkbox", label, *checked))
    },

    WiremdNode::Radio { label, selected } => {
      format!("{pad}{}", checkable(p, "radio", label, *selected))
    },

    WiremdNode::Icon { props } => {
      format!(
        "{pad}<span class=\"{p}icon\" data-icon=\"{}\" \
         aria-hidden=\"true\"></span>",
        encode_double_quoted_attribute(props.get_str("name").unwrap_or(""))
      )
    },

    WiremdNode::Image { src, alt, .. } => {
      format!(
        "{pad}<img class=\"{p}image\" src=\"{}\" alt=\"{}\" />",
        encode_double_quoted_attribute(src),
        encode_double_quoted_attribute(alt)
      )
    },

    WiremdNode::List { children, .. } => {
      let mut lines = vec![format!("{pad}<ul class=\"{p}list\">")];
      for child in children {
        lines.push(format!(
          "{pad}  <li>{}</li>",
          render_list_item(child, options)
        ));
      }
      lines.push(format!("{pad}</ul>"));
      lines.join("\n")
    },

    WiremdNode::ListItem { content } => {
      format!(
        "{pad}<span class=\"{p}list-item\">{}</span>",
        encode_text(content)
      )
    },

    WiremdNode::Container {
      container_type,
      props,
      children,
      ..
    } => {
      let mut classes = format!(
        "{p}container {p}{}",
        encode_double_quoted_attribute(container_type)
      );
      for class in &props.classes {
        classes.push(' ');
        classes.push_str(&encode_double_quoted_attribute(class));
      }
      let columns = props
        .get("columns")
        .and_then(crate::ast::PropValue::as_int)
        .map(|n| format!(" data-columns=\"{n}\""))
        .unwrap_or_default();

      let mut lines = vec![format!("{pad}<div class=\"{classes}\"{columns}>")];
      for child in children {
        lines.push(render_node(child, options, depth + 1));
      }
      lines.push(format!("{pad}</div>"));
      lines.join("\n")
    },

    WiremdNode::InlineContainer { items, attributes, .. } => {
      let mut classes = format!("{p}nav");
      for class in parse_attrs(attributes).classes {
        classes.push(' ');
        classes.push_str(&encode_double_quoted_attribute(&class));
      }
      let mut lines = vec![format!("{pad}<nav class=\"{classes}\">")];
      for item in items {
        lines.push(render_node(item, options, depth + 1));
      }
      lines.push(format!("{pad}</nav>"));
      lines.join("\n")
    },

    WiremdNode::Select { label, options: choices, .. } => {
      let mut lines = vec![format!("{pad}<label class=\"{p}select\">")];
      if !label.is_empty() {
        lines.push(format!("{pad}  <span>{}</span>", encode_text(label)));
      }
      lines.push(format!("{pad}  <select>"));
      for choice in choices {
        lines.push(format!(
          "{pad}    <option>{}</option>",
          encode_text(choice)
        ));
      }
      lines.push(format!("{pad}  </select>"));
      lines.push(format!("{pad}</label>"));
      lines.join("\n")
    },
  }
}

/// Shared checkbox/radio emission; the two differ only in the input
/// type and class suffix.
fn checkable(prefix: &str, kind: &str, label: &str, on: bool) -> String {
  let checked = if on { " checked" } else { "" };
  format!(
    "<label class=\"{prefix}{kind}\"><input type=\"{kind}\"{checked} /> \
     {}</label>",
    encode_text(label)
  )
}

/// Inline rendering for a list child, to be wrapped in `<li>`.
fn render_list_item(node: &WiremdNode, options: &RenderOptions) -> String {
  let p = &options.class_prefix;
  match node {
    WiremdNode::Checkbox { label, checked } => {
      checkable(p, "checkbox", label, *checked)
    },
    WiremdNode::Radio { label, selected } => {
      checkable(p, "radio", label, *selected)
    },
    WiremdNode::ListItem { content } => encode_text(content).to_string(),
    other => render_node(other, options, 0).trim_start().to_string(),
  }
}
