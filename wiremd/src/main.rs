use std::{fs, io::Write, path::Path};

use color_eyre::eyre::{Context, Result, bail};
use log::{LevelFilter, info};
use wiremd::{
  build,
  cli::{Cli, Commands},
  config::Config,
  watch,
};

fn main() -> Result<()> {
  color_eyre::install()?;

  // Parse command line arguments
  let cli = Cli::parse_args();

  // Initialize logging first so we can log during command handling
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  match &cli.command {
    Commands::Init {
      output,
      format,
      force,
    } => {
      // Check if file already exists and that we're not forcing overwrite
      if output.exists() && !force {
        bail!(
          "Configuration file already exists: {}. Use --force to overwrite.",
          output.display()
        );
      }

      // Create parent directories if needed
      if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
          fs::create_dir_all(parent).wrap_err_with(|| {
            format!("Failed to create directory: {}", parent.display())
          })?;
          info!("Created directory: {}", parent.display());
        }
      }

      Config::generate_default_config(format, output).wrap_err_with(|| {
        format!(
          "Failed to generate configuration file: {}",
          output.display()
        )
      })?;

      info!(
        "Configuration file created successfully. Edit it to customize \
         rendering."
      );
      Ok(())
    },

    Commands::Build(_) => {
      let config = Config::load(&cli)?;
      build::run(&config)?;
      Ok(())
    },

    Commands::Check { input, json } => check(&cli, input.as_deref(), *json),

    Commands::Watch(_) => {
      let config = Config::load(&cli)?;
      watch::run(&config)?;
      Ok(())
    },
  }
}

/// Parse and validate the input, reporting findings on stdout.
///
/// Exits non-zero when findings exist so the command composes with CI
/// pipelines.
fn check(cli: &Cli, input: Option<&Path>, json: bool) -> Result<()> {
  let mut config = Config::load(cli)?;
  if let Some(input) = input {
    config.input = Some(input.to_path_buf());
  }

  let path = config.require_input()?.to_path_buf();
  let source = fs::read_to_string(&path)
    .wrap_err_with(|| format!("Failed to read {}", path.display()))?;

  let doc = wiremd_commonmark::parse(&source, &config.parse_options());
  let findings = wiremd_commonmark::validate(&doc);

  let mut stdout = std::io::stdout().lock();
  if json {
    writeln!(stdout, "{}", serde_json::to_string_pretty(&findings)?)?;
  } else {
    for finding in &findings {
      writeln!(
        stdout,
        "{}: {} at {}",
        finding.code,
        finding.message,
        finding.path_display()
      )?;
    }
  }

  if findings.is_empty() {
    info!("{}: no findings", path.display());
    Ok(())
  } else {
    bail!("{} finding(s) in {}", findings.len(), path.display());
  }
}
