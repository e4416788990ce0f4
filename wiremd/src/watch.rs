//! File watching with a timed debounce.
//!
//! Watches the input file's directory rather than the file itself so
//! editors that save by rename keep triggering rebuilds. Debouncing
//! drains the event burst a single save produces before rebuilding
//! once.
use std::{path::PathBuf, sync::mpsc, time::Duration};

use log::{info, warn};
use notify::{RecursiveMode, Watcher};

use crate::{build, config::Config, error::WiremdError};

const DEBOUNCE: Duration = Duration::from_millis(100);

fn is_relevant(kind: notify::EventKind) -> bool {
  matches!(
    kind,
    notify::EventKind::Create(_)
      | notify::EventKind::Modify(_)
      | notify::EventKind::Remove(_)
  )
}

/// Build once, then rebuild on every change to the input file until
/// the process is interrupted.
pub fn run(config: &Config) -> Result<(), WiremdError> {
  let input = config.require_input()?.to_path_buf();
  let target = input
    .parent()
    .filter(|parent| !parent.as_os_str().is_empty())
    .map_or_else(|| PathBuf::from("."), PathBuf::from);
  let file_name = input.file_name().map(ToOwned::to_owned);

  rebuild(config);

  let (tx, rx) = mpsc::channel();
  let mut watcher = notify::recommended_watcher(
    move |res: Result<notify::Event, notify::Error>| {
      let Ok(event) = res else { return };
      if !is_relevant(event.kind) {
        return;
      }
      let matches = file_name.as_ref().is_none_or(|name| {
        event
          .paths
          .iter()
          .any(|path| path.file_name() == Some(name))
      });
      if matches {
        let _ = tx.send(());
      }
    },
  )?;
  watcher.watch(&target, RecursiveMode::NonRecursive)?;
  info!("Watching {} for changes", input.display());

  while rx.recv().is_ok() {
    while rx.recv_timeout(DEBOUNCE).is_ok() {}
    info!("Change detected, rebuilding");
    rebuild(config);
  }

  Ok(())
}

fn rebuild(config: &Config) {
  if let Err(e) = build::run(config) {
    warn!("Build failed: {e}");
  }
}
