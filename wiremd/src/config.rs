//! Configuration for the wiremd CLI.
//!
//! A config file (TOML or JSON) supplies defaults; command line flags
//! override whatever they name. The file is discovered at standard
//! names in the working directory or passed explicitly.
use std::{
  fs,
  path::{Path, PathBuf},
};

use log::info;
use serde::{Deserialize, Serialize};
use wiremd_commonmark::{ParseOptions, RenderFormat, RenderOptions, Style};

use crate::{
  cli::{BuildArgs, Cli, Commands},
  error::WiremdError,
};

// Functions rather than literals so non-const defaults (strings,
// enums) can be expressed for serde.
fn default_format() -> RenderFormat {
  RenderFormat::Markup
}

fn default_class_prefix() -> String {
  "wf-".to_string()
}

const fn default_true() -> bool {
  true
}

/// Configuration options for wiremd
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
  /// Input wireframe-markdown file
  #[serde(default)]
  pub input: Option<PathBuf>,

  /// Output file; stdout when absent
  #[serde(default)]
  pub output: Option<PathBuf>,

  /// Output format
  #[serde(default = "default_format")]
  pub format: RenderFormat,

  /// Visual style for markup-producing formats
  #[serde(default)]
  pub style: Style,

  /// Class prefix for the markup format
  #[serde(default = "default_class_prefix")]
  pub class_prefix: String,

  /// Pretty-print the JSON format
  #[serde(default)]
  pub pretty: bool,

  /// Attach source line positions to nodes
  #[serde(default)]
  pub track_position: bool,

  /// Run the structural validator after parsing
  #[serde(default = "default_true")]
  pub validate: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      input:          None,
      output:         None,
      format:         default_format(),
      style:          Style::default(),
      class_prefix:   default_class_prefix(),
      pretty:         false,
      track_position: false,
      validate:       true,
    }
  }
}

impl Config {
  /// Create a new configuration from a file.
  /// Only TOML and JSON are supported for the time being.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WiremdError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    match path.extension().and_then(|ext| ext.to_str()) {
      Some("json") => Ok(serde_json::from_str(&content)?),
      Some("toml") => Ok(toml::from_str(&content)?),
      _ => {
        Err(WiremdError::Config(format!(
          "Unsupported config file format: {}",
          path.display()
        )))
      },
    }
  }

  /// Look for a config file at the standard names in the working
  /// directory.
  #[must_use]
  pub fn find_config_file() -> Option<PathBuf> {
    ["wiremd.toml", "wiremd.json"]
      .iter()
      .map(PathBuf::from)
      .find(|candidate| candidate.exists())
  }

  /// Load config from file and CLI arguments, CLI values winning.
  pub fn load(cli: &Cli) -> Result<Self, WiremdError> {
    let mut config = if let Some(config_path) = &cli.config_file {
      Self::from_file(config_path)?
    } else if let Some(discovered) = Self::find_config_file() {
      info!("Using discovered config file: {}", discovered.display());
      Self::from_file(&discovered)?
    } else {
      Self::default()
    };

    config.merge_with_cli(cli)?;
    Ok(config)
  }

  /// Merge CLI arguments into this config, prioritizing CLI values
  /// when present.
  pub fn merge_with_cli(&mut self, cli: &Cli) -> Result<(), WiremdError> {
    let (Commands::Build(args) | Commands::Watch(args)) = &cli.command else {
      return Ok(());
    };
    self.merge_build_args(args)
  }

  fn merge_build_args(&mut self, args: &BuildArgs) -> Result<(), WiremdError> {
    if let Some(input) = &args.input {
      self.input = Some(input.clone());
    }
    if let Some(output) = &args.output {
      self.output = Some(output.clone());
    }
    if let Some(format) = &args.format {
      self.format = format.parse()?;
    }
    if let Some(style) = &args.style {
      self.style = style.parse()?;
    }
    if let Some(prefix) = &args.class_prefix {
      self.class_prefix.clone_from(prefix);
    }
    if args.pretty {
      self.pretty = true;
    }
    if args.positions {
      self.track_position = true;
    }
    if args.no_validate {
      self.validate = false;
    }
    Ok(())
  }

  /// The input file, or a configuration error naming what is missing.
  pub fn require_input(&self) -> Result<&Path, WiremdError> {
    self.input.as_deref().ok_or_else(|| {
      WiremdError::Config(
        "No input file provided. Pass one as an argument or set `input` in \
         the config file."
          .to_string(),
      )
    })
  }

  /// Parse options derived from this config.
  ///
  /// Validation findings are reported by the CLI itself, not logged
  /// from inside the parser.
  #[must_use]
  pub const fn parse_options(&self) -> ParseOptions {
    ParseOptions {
      track_position:    self.track_position,
      validate_on_parse: false,
    }
  }

  /// Render options derived from this config.
  #[must_use]
  pub fn render_options(&self) -> RenderOptions {
    RenderOptions {
      format:       self.format,
      style:        self.style,
      class_prefix: self.class_prefix.clone(),
      pretty:       self.pretty,
    }
  }

  /// Write a default configuration file in the requested format.
  pub fn generate_default_config(
    format: &str,
    path: &Path,
  ) -> Result<(), WiremdError> {
    let config = Self::default();
    let content = match format {
      "json" => serde_json::to_string_pretty(&config)?,
      "toml" => toml::to_string_pretty(&config)?,
      other => {
        return Err(WiremdError::Config(format!(
          "Unsupported config format: {other}"
        )));
      },
    };

    fs::write(path, content)?;
    info!("Created configuration file: {}", path.display());
    Ok(())
  }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, reason = "Fine in tests")]
mod tests {
  use wiremd_commonmark::{RenderFormat, Style};

  use super::*;

  #[test]
  fn toml_config_round_trips() {
    let config = Config {
      input: Some(PathBuf::from("app.md")),
      format: RenderFormat::UtilityMarkup,
      style: Style::Clean,
      ..Config::default()
    };
    let toml_text = toml::to_string_pretty(&config).unwrap();
    let back: Config = toml::from_str(&toml_text).unwrap();
    assert_eq!(back.input, config.input);
    assert_eq!(back.format, RenderFormat::UtilityMarkup);
    assert_eq!(back.style, Style::Clean);
  }

  #[test]
  fn missing_fields_take_defaults() {
    let config: Config = toml::from_str("format = \"json\"\n").unwrap();
    assert_eq!(config.format, RenderFormat::Json);
    assert_eq!(config.class_prefix, "wf-");
    assert!(config.validate);
  }
}
