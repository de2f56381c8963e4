use std::io;
use std::path::{Path, PathBuf};

/// Path component macOS uses when it runs a downloaded app from a randomized
/// read-only mount.
pub const TRANSLOCATION_MARKER: &str = "AppTranslocation";

pub fn detect_quarantine(bundle_dir: &Path) -> bool {
    bundle_dir.to_string_lossy().contains(TRANSLOCATION_MARKER)
}

/// Directory holding the running executable.
pub fn bundle_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| io::Error::other(format!("{} has no parent directory", exe.display())))
}
