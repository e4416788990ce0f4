#![allow(clippy::unwrap_used, clippy::panic, reason = "Fine in tests")]
use wiremd_commonmark::{
  DocumentNode, ParseOptions, RenderError, RenderFormat, RenderOptions, Style,
  parse, render,
};

const LOGIN: &str =
  "# Login\n\n::: card\n\n[Email ____]\n\n[*****]\n\n[Submit]*\n\n:::\n";

fn login_doc() -> DocumentNode {
  parse(LOGIN, &ParseOptions::default())
}

#[test]
fn markup_wraps_the_document_and_prefixes_classes() {
  let html =
    render(&login_doc(), &RenderOptions::for_format(RenderFormat::Markup))
      .unwrap();

  assert!(html.contains("<style>"));
  assert!(html.contains("<div class=\"wf-document\">"));
  assert!(html.contains("<h1 class=\"wf-heading\">Login</h1>"));
  assert!(html.contains("wf-container wf-card"));
  assert!(html.contains("type=\"password\""));
  assert!(html.contains("placeholder=\"Email\""));
  assert!(html.contains("wf-button wf-button-primary"));
}

#[test]
fn markup_style_none_omits_the_stylesheet() {
  let options = RenderOptions {
    style: Style::None,
    ..RenderOptions::for_format(RenderFormat::Markup)
  };
  let html = render(&login_doc(), &options).unwrap();
  assert!(!html.contains("<style>"));
  assert!(html.contains("<div class=\"wf-document\">"));
}

#[test]
fn markup_honors_a_custom_class_prefix() {
  let options = RenderOptions {
    class_prefix: "app-".to_string(),
    ..RenderOptions::for_format(RenderFormat::Markup)
  };
  let html = render(&login_doc(), &options).unwrap();
  assert!(html.contains("app-document"));
  assert!(html.contains(".app-button"));
  assert!(!html.contains("wf-"));
}

#[test]
fn markup_escapes_user_content() {
  let doc = parse("# a < b & c\n\n[<script>]\n", &ParseOptions::default());
  let html =
    render(&doc, &RenderOptions::for_format(RenderFormat::Markup)).unwrap();
  assert!(html.contains("a &lt; b &amp; c"));
  assert!(!html.contains("<script>"));
}

#[test]
fn nav_attribute_classes_reach_the_markup() {
  let doc = parse("[[Home|About]]{.top .dark}\n", &ParseOptions::default());
  let html =
    render(&doc, &RenderOptions::for_format(RenderFormat::Markup)).unwrap();
  assert!(html.contains("<nav class=\"wf-nav top dark\">"));
}

#[test]
fn json_round_trips_through_the_renderer() {
  let doc = login_doc();
  let json =
    render(&doc, &RenderOptions::for_format(RenderFormat::Json)).unwrap();
  let back: DocumentNode = serde_json::from_str(&json).unwrap();
  assert_eq!(doc, back);
}

#[test]
fn json_pretty_flag_controls_layout() {
  let doc = login_doc();
  let compact =
    render(&doc, &RenderOptions::for_format(RenderFormat::Json)).unwrap();
  let pretty = render(&doc, &RenderOptions {
    pretty: true,
    ..RenderOptions::for_format(RenderFormat::Json)
  })
  .unwrap();

  assert!(!compact.contains('\n'));
  assert!(pretty.contains("\n  "));
  assert_eq!(
    serde_json::from_str::<serde_json::Value>(&compact).unwrap(),
    serde_json::from_str::<serde_json::Value>(&pretty).unwrap()
  );
}

#[test]
fn component_format_is_a_jsx_like_tree() {
  let out =
    render(&login_doc(), &RenderOptions::for_format(RenderFormat::Component))
      .unwrap();

  assert!(out.starts_with("<Document version=\"0.1\">"));
  assert!(out.ends_with("</Document>"));
  assert!(out.contains("<Heading level=\"1\">Login</Heading>"));
  assert!(out.contains("<Container type=\"card\">"));
  assert!(out.contains("<Input type=\"password\" />"));
  assert!(out.contains("<Button variant=\"primary\">Submit</Button>"));
}

#[test]
fn component_select_lists_its_options() {
  let doc = parse(
    "[Country ___v]\n\n- Sweden\n- Norway\n",
    &ParseOptions::default(),
  );
  let out =
    render(&doc, &RenderOptions::for_format(RenderFormat::Component)).unwrap();
  assert!(out.contains("<Select label=\"Country\">"));
  assert!(out.contains("<Option>Sweden</Option>"));
  assert!(out.contains("<Option>Norway</Option>"));
}

#[test]
fn utility_markup_uses_token_classes_and_no_stylesheet() {
  let html = render(
    &login_doc(),
    &RenderOptions::for_format(RenderFormat::UtilityMarkup),
  )
  .unwrap();

  assert!(!html.contains("<style>"));
  assert!(!html.contains("wf-"));
  assert!(html.contains("mx-auto max-w-3xl"));
  assert!(html.contains("bg-gray-900 text-white"));
}

#[test]
fn utility_markup_frame_follows_the_style() {
  let doc = login_doc();
  let sketch = render(
    &doc,
    &RenderOptions::for_format(RenderFormat::UtilityMarkup),
  )
  .unwrap();
  let none = render(&doc, &RenderOptions {
    style: Style::None,
    ..RenderOptions::for_format(RenderFormat::UtilityMarkup)
  })
  .unwrap();

  assert!(sketch.contains("border-dashed"));
  assert!(!none.contains("border-dashed"));
}

#[test]
fn grid_columns_surface_in_markup_and_utility() {
  let doc = parse(
    "## Plans {.grid-2}\n\n### Basic\n\nfree\n\n### Pro\n\npaid\n",
    &ParseOptions::default(),
  );

  let markup =
    render(&doc, &RenderOptions::for_format(RenderFormat::Markup)).unwrap();
  assert!(markup.contains("data-columns=\"2\""));

  let utility = render(
    &doc,
    &RenderOptions::for_format(RenderFormat::UtilityMarkup),
  )
  .unwrap();
  assert!(utility.contains("grid grid-cols-2"));
}

#[test]
fn format_and_style_names_round_trip_and_reject_unknowns() {
  for format in [
    RenderFormat::Markup,
    RenderFormat::Json,
    RenderFormat::Component,
    RenderFormat::UtilityMarkup,
  ] {
    assert_eq!(format.to_string().parse::<RenderFormat>().unwrap(), format);
  }
  for style in
    [Style::Sketch, Style::Clean, Style::Wireframe, Style::None]
  {
    assert_eq!(style.to_string().parse::<Style>().unwrap(), style);
  }

  assert!(matches!(
    "html".parse::<RenderFormat>(),
    Err(RenderError::UnknownFormat(name)) if name == "html"
  ));
  assert!(matches!(
    "fancy".parse::<Style>(),
    Err(RenderError::UnknownStyle(name)) if name == "fancy"
  ));
}
