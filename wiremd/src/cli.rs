use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Command line interface for wiremd
#[derive(Parser, Debug)]
#[command(author, version, about = "wiremd: wireframes from markdown")]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Commands,

  /// Enable verbose debug logging
  #[arg(short, long)]
  pub verbose: bool,

  /// Path to a configuration file (TOML or JSON)
  #[arg(short = 'c', long = "config-file")]
  pub config_file: Option<PathBuf>,
}

impl Cli {
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

/// All supported subcommands for the wiremd CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Initialize a new wiremd configuration file
  Init {
    /// Path to create the configuration file at
    #[arg(short, long, default_value = "wiremd.toml")]
    output: PathBuf,

    /// Format of the configuration file.
    #[arg(short = 'F', long, default_value = "toml", value_parser = ["toml", "json"])]
    format: String,

    /// Force overwrite if file already exists
    #[arg(short, long)]
    force: bool,
  },

  /// Parse a wireframe document and render it once.
  Build(BuildArgs),

  /// Parse a wireframe document and report structural findings.
  Check {
    /// Path to the wireframe-markdown file.
    input: Option<PathBuf>,

    /// Print findings as a JSON array instead of text lines.
    #[arg(long)]
    json: bool,
  },

  /// Rebuild the output every time the input file changes.
  Watch(BuildArgs),
}

/// Shared options for the rendering subcommands.
#[derive(Args, Debug)]
pub struct BuildArgs {
  /// Path to the wireframe-markdown file.
  pub input: Option<PathBuf>,

  /// Output file; stdout when omitted.
  #[arg(short, long)]
  pub output: Option<PathBuf>,

  /// Output format: markup, json, component or utility-markup.
  #[arg(short, long)]
  pub format: Option<String>,

  /// Visual style: sketch, clean, wireframe or none.
  #[arg(short, long)]
  pub style: Option<String>,

  /// Class prefix for the markup format.
  #[arg(long = "class-prefix")]
  pub class_prefix: Option<String>,

  /// Pretty-print the JSON format.
  #[arg(short, long)]
  pub pretty: bool,

  /// Attach source line positions to nodes.
  #[arg(long)]
  pub positions: bool,

  /// Skip the structural validation pass after parsing.
  #[arg(long = "no-validate")]
  pub no_validate: bool,
}
