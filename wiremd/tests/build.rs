#![allow(clippy::unwrap_used, clippy::panic, reason = "Fine in tests")]
use std::fs;

use tempfile::tempdir;
use wiremd::{build, config::Config};
use wiremd_commonmark::{RenderFormat, Style};

#[test]
fn generated_toml_config_loads_back() {
  let dir = tempdir().unwrap();
  let path = dir.path().join("wiremd.toml");
  Config::generate_default_config("toml", &path).unwrap();

  let config = Config::from_file(&path).unwrap();
  assert_eq!(config.class_prefix, "wf-");
  assert_eq!(config.format, RenderFormat::Markup);
  assert!(config.validate);
}

#[test]
fn generated_json_config_loads_back() {
  let dir = tempdir().unwrap();
  let path = dir.path().join("wiremd.json");
  Config::generate_default_config("json", &path).unwrap();

  let config = Config::from_file(&path).unwrap();
  assert_eq!(config.style, Style::Sketch);
}

#[test]
fn unknown_config_extension_is_rejected() {
  let dir = tempdir().unwrap();
  let path = dir.path().join("wiremd.yaml");
  fs::write(&path, "format: json\n").unwrap();
  assert!(Config::from_file(&path).is_err());
}

#[test]
fn build_renders_markup_to_the_output_file() {
  let dir = tempdir().unwrap();
  let input = dir.path().join("login.md");
  let output = dir.path().join("login.html");
  fs::write(&input, "# Login\n\n[Email ____]\n\n[Submit]*\n").unwrap();

  let config = Config {
    input: Some(input),
    output: Some(output.clone()),
    ..Config::default()
  };
  build::run(&config).unwrap();

  let html = fs::read_to_string(&output).unwrap();
  assert!(html.contains("wf-button wf-button-primary"));
  assert!(html.contains("placeholder=\"Email\""));
}

#[test]
fn build_json_output_is_a_document_tree() {
  let dir = tempdir().unwrap();
  let input = dir.path().join("page.md");
  let output = dir.path().join("page.json");
  fs::write(&input, "::: card\n\n[Go]\n\n:::\n").unwrap();

  let config = Config {
    input: Some(input),
    output: Some(output.clone()),
    format: RenderFormat::Json,
    ..Config::default()
  };
  build::run(&config).unwrap();

  let value: serde_json::Value =
    serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
  assert_eq!(value["type"], "document");
  assert_eq!(value["children"][0]["containerType"], "card");
}

#[test]
fn missing_input_file_fails_the_build() {
  let dir = tempdir().unwrap();
  let config = Config {
    input: Some(dir.path().join("absent.md")),
    ..Config::default()
  };
  assert!(build::run(&config).is_err());
}

#[test]
fn unconfigured_input_fails_the_build() {
  assert!(build::run(&Config::default()).is_err());
}
