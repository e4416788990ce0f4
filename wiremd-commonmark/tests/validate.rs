#![allow(clippy::unwrap_used, clippy::panic, reason = "Fine in tests")]
use serde_json::json;
use wiremd_commonmark::{ParseOptions, parse, validate, validate_value};

#[test]
fn every_parsed_document_validates_clean() {
  let sources = [
    "",
    "# Title\n\nprose\n",
    "::: card\n\n::: row\n\n[Go]*\n\n:::\n\n:::\n",
    "[[Home|About]]\n\n- [x] done\n- ( ) maybe\n",
    "## Grid {.grid-3}\n\n### A\n\na\n\n### B\n\nb\n",
    ":::\n\n::: orphan\n\nstranded\n",
  ];
  for source in sources {
    let doc = parse(source, &ParseOptions::default());
    assert!(
      validate(&doc).is_empty(),
      "unexpected findings for {source:?}"
    );
  }
}

#[test]
fn foreign_json_violations_are_located_by_path() {
  let doc = json!({
    "type": "document",
    "meta": {},
    "children": [
      { "type": "heading", "level": 1, "content": "ok" },
      {
        "type": "container",
        "containerType": "card",
        "children": [{ "content": "no type here" }],
      },
    ],
  });

  let findings = validate_value(&doc);
  assert_eq!(findings.len(), 1);
  assert_eq!(findings[0].code, "MISSING_NODE_TYPE");
  assert_eq!(findings[0].path_display(), "$.children.1.children.0");
}

#[test]
fn multiple_violations_are_reported_in_order() {
  let doc = json!({
    "type": "layout",
    "children": [{ "label": "typeless" }],
  });

  let findings = validate_value(&doc);
  let codes: Vec<&str> =
    findings.iter().map(|f| f.code.as_str()).collect();
  assert_eq!(
    codes,
    ["INVALID_ROOT_TYPE", "MISSING_META", "MISSING_NODE_TYPE"]
  );
}

#[test]
fn findings_serialize_for_machine_consumption() {
  let doc = json!({ "type": "document", "meta": {}, "children": 7 });
  let findings = validate_value(&doc);
  let out = serde_json::to_value(&findings).unwrap();
  assert_eq!(out[0]["code"], "INVALID_CHILDREN");
  assert!(out[0]["message"].is_string());
}
