#![allow(clippy::unwrap_used, clippy::panic, reason = "Fine in tests")]
use wiremd_commonmark::{
  DOCUMENT_VERSION, DocumentNode, ParseOptions, WiremdNode, parse,
};

fn parse_default(source: &str) -> DocumentNode {
  parse(source, &ParseOptions::default())
}

#[test]
fn empty_input_yields_an_empty_document() {
  let doc = parse_default("");
  assert_eq!(doc.version, DOCUMENT_VERSION);
  assert!(doc.children.is_empty());
  assert!(doc.meta.is_empty());
}

#[test]
fn plain_markdown_stays_plain() {
  let doc = parse_default("# Title\n\nJust some prose.\n");
  assert_eq!(doc.children.len(), 2);
  assert!(matches!(
    &doc.children[0],
    WiremdNode::Heading { level: 1, content, .. } if content == "Title"
  ));
  assert!(matches!(
    &doc.children[1],
    WiremdNode::Paragraph { content, .. } if content == "Just some prose."
  ));
}

#[test]
fn bracket_shapes_classify_as_expected() {
  let doc = parse_default(
    "[Submit]*\n\n[Cancel]\n\n[Email ____]\n\n[*****]\n\n[Country ___v]\n",
  );
  assert_eq!(doc.children.len(), 5);

  let WiremdNode::Button { content, props, .. } = &doc.children[0] else {
    panic!("expected primary button");
  };
  assert_eq!(content, "Submit");
  assert_eq!(props.get_str("variant"), Some("primary"));

  let WiremdNode::Button { props, .. } = &doc.children[1] else {
    panic!("expected plain button");
  };
  assert!(props.get("variant").is_none());

  let WiremdNode::Input { props, .. } = &doc.children[2] else {
    panic!("expected text input");
  };
  assert_eq!(props.get_str("type"), Some("text"));
  assert_eq!(props.get_str("placeholder"), Some("Email"));

  let WiremdNode::Input { props, .. } = &doc.children[3] else {
    panic!("expected password input");
  };
  assert_eq!(props.get_str("type"), Some("password"));

  assert!(matches!(
    &doc.children[4],
    WiremdNode::Select { label, .. } if label == "Country"
  ));
}

#[test]
fn explicit_attributes_override_shape_inference() {
  let doc = parse_default("[_____]{type:email required}\n");
  let WiremdNode::Input { props, .. } = &doc.children[0] else {
    panic!("expected input");
  };
  assert_eq!(props.get_str("type"), Some("email"));
  assert!(props.flag("required"));
}

#[test]
fn checkbox_and_radio_lists_classify_items() {
  // One markdown list; classification happens per item, so checkboxes
  // and radios can share it.
  let doc = parse_default(
    "- [x] Shipped\n- [ ] Pending\n- (\u{2022}) Monthly\n- ( ) Yearly\n",
  );
  assert_eq!(doc.children.len(), 1);

  let WiremdNode::List { children, .. } = &doc.children[0] else {
    panic!("expected a list");
  };
  assert_eq!(children.len(), 4);
  assert!(matches!(
    &children[0],
    WiremdNode::Checkbox { label, checked: true } if label == "Shipped"
  ));
  assert!(matches!(
    &children[1],
    WiremdNode::Checkbox { label, checked: false } if label == "Pending"
  ));
  assert!(matches!(
    &children[2],
    WiremdNode::Radio { label, selected: true } if label == "Monthly"
  ));
  assert!(matches!(
    &children[3],
    WiremdNode::Radio { label, selected: false } if label == "Yearly"
  ));
}

#[test]
fn separate_lists_stay_separate_across_a_paragraph() {
  let doc = parse_default("- [x] Shipped\n\nplans:\n\n- ( ) Monthly\n");
  assert_eq!(doc.children.len(), 3);
  assert!(matches!(&doc.children[0], WiremdNode::List { .. }));
  assert!(matches!(&doc.children[1], WiremdNode::Paragraph { .. }));
  assert!(matches!(&doc.children[2], WiremdNode::List { .. }));
}

#[test]
fn nav_container_mixes_text_and_directives() {
  let doc = parse_default("[[Home|About|[Sign up]*]]\n");
  assert_eq!(doc.children.len(), 1);
  let WiremdNode::InlineContainer { items, .. } = &doc.children[0] else {
    panic!("expected inline container");
  };
  assert_eq!(items.len(), 3);
  assert!(matches!(&items[0], WiremdNode::Text { content } if content == "Home"));
  assert!(matches!(&items[1], WiremdNode::Text { content } if content == "About"));
  assert!(matches!(
    &items[2],
    WiremdNode::Button { content, .. } if content == "Sign up"
  ));
}

#[test]
fn nested_containers_preserve_structure() {
  let doc = parse_default(
    "::: card\n\n## Plans\n\n::: row\n\n[Buy]*\n\n:::\n\n:::\n",
  );
  assert_eq!(doc.children.len(), 1);

  let WiremdNode::Container {
    container_type,
    children,
    ..
  } = &doc.children[0]
  else {
    panic!("expected outer container");
  };
  assert_eq!(container_type, "card");
  assert_eq!(children.len(), 2);

  let WiremdNode::Container {
    container_type,
    children,
    ..
  } = &children[1]
  else {
    panic!("expected inner container");
  };
  assert_eq!(container_type, "row");
  assert!(matches!(&children[0], WiremdNode::Button { .. }));
}

#[test]
fn orphan_open_fence_flattens_children_in_place() {
  let doc = parse_default("::: card\n\nstranded\n");
  assert_eq!(doc.children.len(), 1);
  assert!(matches!(
    &doc.children[0],
    WiremdNode::Paragraph { content, .. } if content == "stranded"
  ));
}

#[test]
fn orphan_close_fence_is_dropped() {
  let doc = parse_default("hello\n\n:::\n");
  assert_eq!(doc.children.len(), 1);
  assert!(matches!(&doc.children[0], WiremdNode::Paragraph { .. }));
}

#[test]
fn malformed_directives_stay_literal() {
  let doc = parse_default("[]\n\n[unclosed\n");
  for child in &doc.children {
    assert!(
      matches!(child, WiremdNode::Paragraph { .. }),
      "expected literal paragraph, got {child:?}"
    );
  }
}

#[test]
fn heading_attribute_suffix_lands_in_props() {
  let doc = parse_default("## Features {.grid-2 .hero}\n");
  let WiremdNode::Heading { content, props, .. } = &doc.children[0] else {
    panic!("expected heading");
  };
  assert_eq!(content, "Features");
  assert_eq!(props.classes, vec!["grid-2", "hero"]);
}

#[test]
fn parse_is_deterministic() {
  let source = "# A\n\n::: card\n\n[Go]*\n\n:::\n\n- [x] done\n";
  let first = parse_default(source);
  let second = parse_default(source);
  assert_eq!(first, second);
}

#[test]
fn json_round_trip_is_identity() {
  let source = "# Login {.narrow}\n\n::: card\n\n[Email ____]\n\n[*****]\n\n\
                [Submit]*\n\n:::\n\n[[Home|Help|:gear:]]\n\n- [x] Remember me\n";
  let doc = parse(source, &ParseOptions {
    track_position: true,
    ..ParseOptions::default()
  });

  let json = serde_json::to_string(&doc).unwrap();
  let back: DocumentNode = serde_json::from_str(&json).unwrap();
  assert_eq!(doc, back);

  // Key order is stable across a second serialization.
  assert_eq!(json, serde_json::to_string(&back).unwrap());
}

#[test]
fn position_spans_serialize_in_camel_case() {
  let doc = parse("# Title\n", &ParseOptions {
    track_position: true,
    ..ParseOptions::default()
  });
  let value = serde_json::to_value(&doc).unwrap();
  let position = &value["children"][0]["position"];
  assert_eq!(position["startLine"], 1);
  assert_eq!(position["endLine"], 1);
}
