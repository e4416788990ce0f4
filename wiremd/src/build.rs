//! One-shot parse / validate / render run.
use std::{fs, io::Write};

use log::{info, warn};
use wiremd_commonmark::{parse, render, validate};

use crate::{config::Config, error::WiremdError};

/// Read the configured input, render it and deliver the output.
///
/// Validation findings are logged as warnings; they never fail a
/// build. A missing input file does.
pub fn run(config: &Config) -> Result<(), WiremdError> {
  let input = config.require_input()?;
  let source = fs::read_to_string(input)?;
  let doc = parse(&source, &config.parse_options());

  if config.validate {
    for finding in validate(&doc) {
      warn!(
        "{}: {} at {}",
        finding.code,
        finding.message,
        finding.path_display()
      );
    }
  }

  let output = render(&doc, &config.render_options())?;
  match &config.output {
    Some(path) => {
      fs::write(path, &output)?;
      info!("Wrote {}", path.display());
    },
    None => {
      let mut stdout = std::io::stdout().lock();
      stdout.write_all(output.as_bytes())?;
      stdout.write_all(b"\n")?;
    },
  }

  Ok(())
}
