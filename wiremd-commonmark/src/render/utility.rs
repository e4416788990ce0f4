//! Utility-class markup renderer.
//!
//! Same element shape as the markup format, but every node carries a
//! utility-class token list instead of semantic classes, and no
//! stylesheet is embedded. The style selects the frame treatment each
//! boxed element gets.
use html_escape::{encode_double_quoted_attribute, encode_text};

use super::{RenderOptions, Style};
use crate::ast::{DocumentNode, PropValue, WiremdNode};

pub(super) fn render_document(
  doc: &DocumentNode,
  options: &RenderOptions,
) -> String {
  let mut out =
    String::from("<div class=\"mx-auto max-w-3xl p-6 space-y-4\">\n");
  for child in &doc.children {
    out.push_str(&render_node(child, options, 1));
    out.push('\n');
  }
  out.push_str("</div>");
  out
}

/// Border/elevation treatment for boxed elements, per style.
fn frame(style: Style) -> &'static str {
  match style {
    Style::Sketch => "border-2 border-dashed border-gray-700 rounded-xl",
    Style::Clean => "border border-gray-200 rounded-lg shadow-sm",
    Style::Wireframe => "border border-gray-400 bg-gray-50",
    Style::None => "",
  }
}

/// Join class tokens, dropping empty segments so `Style::None` leaves
/// no stray whitespace behind.
fn tokens(parts: &[&str]) -> String {
  parts
    .iter()
    .copied()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}

fn render_node(
  node: &WiremdNode,
  options: &RenderOptions,
  depth: usize,
) -> String {
  let pad = "  ".repeat(depth);
  let style = options.style;

  match node {
    WiremdNode::Heading { level, content, .. } => {
      let size = match level {
        1 => "text-3xl",
        2 => "text-2xl",
        3 => "text-xl",
        _ => "text-lg",
      };
      format!(
        "{pad}<h{level} class=\"{}\">{}</h{level}>",
        tokens(&["font-bold", size]),
        encode_text(content)
      )
    },

    WiremdNode::Paragraph { content, .. } => {
      format!(
        "{pad}<p class=\"text-gray-700\">{}</p>",
        encode_text(content)
      )
    },

    WiremdNode::Text { content } => {
      format!(
        "{pad}<span class=\"text-gray-700\">{}</span>",
        encode_text(content)
      )
    },

    WiremdNode::Button { content, props, .. } => {
      let accent = if props.get_str("variant") == Some("primary") {
        "bg-gray-900 text-white"
      } else {
        "bg-white"
      };
      format!(
        "{pad}<button class=\"{}\">{}</button>",
        tokens(&[
          "inline-flex items-center px-4 py-2 font-medium",
          accent,
          frame(style),
        ]),
        encode_text(content)
      )
    },

    WiremdNode::Input { props, .. } => {
      let mut input = format!(
        "{pad}<input class=\"{}\" type=\"{}\"",
        tokens(&["w-full px-3 py-2", frame(style)]),
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
      format!("{pad}{}", checkable("checkbox", label, *checked))
    },

    WiremdNode::Radio { label, selected } => {
      format!("{pad}{}", checkable("radio", label, *selected))
    },

    WiremdNode::Icon { props } => {
      format!(
        "{pad}<span class=\"{}\" data-icon=\"{}\" aria-hidden=\"true\">\
         </span>",
        tokens(&["inline-block w-5 h-5", frame(style)]),
        encode_double_quoted_attribute(props.get_str("name").unwrap_or(""))
      )
    },

    WiremdNode::Image { src, alt, .. } => {
      format!(
        "{pad}<img class=\"{}\" src=\"{}\" alt=\"{}\" />",
        tokens(&["max-w-full", frame(style)]),
        encode_double_quoted_attribute(src),
        encode_double_quoted_attribute(alt)
      )
    },

    WiremdNode::List { children, .. } => {
      let mut lines =
        vec![format!("{pad}<ul class=\"space-y-1 list-none\">")];
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
        "{pad}<span class=\"text-gray-700\">{}</span>",
        encode_text(content)
      )
    },

    WiremdNode::Container {
      container_type,
      props,
      children,
      ..
    } => {
      let layout = props
        .get("columns")
        .and_then(PropValue::as_int)
        .map_or_else(
          || "p-4 space-y-3".to_string(),
          |n| format!("grid grid-cols-{n} gap-4 p-4"),
        );
      let boxed = if container_type == "section" {
        // Grouped heading sections are layout-only, no frame.
        ""
      } else {
        frame(style)
      };
      let mut lines = vec![format!(
        "{pad}<div class=\"{}\">",
        tokens(&[layout.as_str(), boxed])
      )];
      for child in children {
        lines.push(render_node(child, options, depth + 1));
      }
      lines.push(format!("{pad}</div>"));
      lines.join("\n")
    },

    WiremdNode::InlineContainer { items, .. } => {
      let mut lines =
        vec![format!("{pad}<nav class=\"flex items-center gap-4\">")];
      for item in items {
        lines.push(render_node(item, options, depth + 1));
      }
      lines.push(format!("{pad}</nav>"));
      lines.join("\n")
    },

    WiremdNode::Select { label, options: choices, .. } => {
      let mut lines = vec![format!(
        "{pad}<label class=\"block space-y-1\">"
      )];
      if !label.is_empty() {
        lines.push(format!(
          "{pad}  <span class=\"font-medium\">{}</span>",
          encode_text(label)
        ));
      }
      lines.push(format!(
        "{pad}  <select class=\"{}\">",
        tokens(&["w-full px-3 py-2", frame(style)])
      ));
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

fn checkable(kind: &str, label: &str, on: bool) -> String {
  let checked = if on { " checked" } else { "" };
  format!(
    "<label class=\"inline-flex items-center gap-2\">\
     <input type=\"{kind}\"{checked} /> {}</label>",
    encode_text(label)
  )
}

fn render_list_item(node: &WiremdNode, options: &RenderOptions) -> String {
  match node {
    WiremdNode::Checkbox { label, checked } => {
      checkable("checkbox", label, *checked)
    },
    WiremdNode::Radio { label, selected } => {
      checkable("radio", label, *selected)
    },
    WiremdNode::ListItem { content } => encode_text(content).to_string(),
    other => render_node(other, options, 0).trim_start().to_string(),
  }
}
