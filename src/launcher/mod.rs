//! User-facing half of the tool: get the collector running in a visible,
//! elevated terminal.

pub mod quarantine;
pub mod script;
pub mod terminal;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use quarantine::{bundle_dir, detect_quarantine};
pub use script::{build_launch_script, write_launch_script};
pub use terminal::open_in_terminal;

/// Collector binary shipped next to the launcher in the bundle.
pub const COLLECTOR_BIN_NAME: &str = "tempo-diagnostic-collector";

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("cannot locate the running executable: {0}")]
    Locate(#[source] std::io::Error),

    #[error("failed to write launch script: {0}")]
    Script(#[source] std::io::Error),

    #[error("failed to run osascript: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("osascript exited with {}: {stderr}", .code.map_or_else(|| "signal".to_string(), |c| c.to_string()))]
    Osascript { code: Option<i32>, stderr: String },
}

/// Script for a launcher running out of `dir`.
pub fn launch_script_for(dir: &Path) -> String {
    let quarantined = detect_quarantine(dir);
    if quarantined {
        tracing::warn!("running from a translocated bundle: {}", dir.display());
    }

    build_launch_script(quarantined, &dir.join(COLLECTOR_BIN_NAME))
}

/// Write the launch script for this bundle and open it in Terminal.
pub fn launch() -> Result<PathBuf, LaunchError> {
    let dir = bundle_dir().map_err(LaunchError::Locate)?;
    let script = launch_script_for(&dir);
    let script_path = write_launch_script(&script).map_err(LaunchError::Script)?;

    open_in_terminal(&script_path)?;
    Ok(script_path)
}
