use std::path::Path;
use std::process::Command;

use super::LaunchError;
use super::script::shell_quote;

pub const OSASCRIPT: &str = "/usr/bin/osascript";

/// Escape a value for use inside an AppleScript string literal.
fn applescript_string(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

pub fn terminal_applescript(script_path: &Path) -> String {
    let command = shell_quote(&script_path.to_string_lossy());
    format!(
        "tell application \"Terminal\"\n    activate\n    do script {}\nend tell",
        applescript_string(&command)
    )
}

pub fn terminal_command(script_path: &Path) -> Command {
    let mut cmd = Command::new(OSASCRIPT);
    cmd.arg("-e").arg(terminal_applescript(script_path));
    cmd
}

/// Open a new Terminal window running `script_path`.
pub fn open_in_terminal(script_path: &Path) -> Result<(), LaunchError> {
    let out = terminal_command(script_path)
        .output()
        .map_err(LaunchError::Spawn)?;

    if !out.status.success() {
        return Err(LaunchError::Osascript {
            code: out.status.code(),
            stderr: String::from_utf8_lossy(&out.stderr).trim_end().to_string(),
        });
    }

    tracing::info!("opened terminal for {}", script_path.display());
    Ok(())
}
