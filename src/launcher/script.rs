use std::fs;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

const RELOCATE_TEMPLATE: &str = r#"#!/bin/bash
clear
echo "please move this application to any directory besides your downloads and run it again"
read -p "press enter to exit..."
osascript -e 'tell application "Terminal" to close front window' &
"#;

const COLLECT_TEMPLATE: &str = r#"#!/bin/bash
clear
echo "tempo diagnostic tool"
echo
echo "right now this dumps info about KClip3 to your Desktop so i can debug, please send me the resulting file"
echo
echo "this tool needs admin to run, please enter your password:"

sudo {collector}

read -p "press enter to exit..."
osascript -e 'tell application "Terminal" to close front window' &
"#;

/// Quote `word` for bash so it is passed through as exactly one argument.
pub fn shell_quote(word: &str) -> String {
    format!("'{}'", word.replace('\'', r"'\''"))
}

/// Script the terminal runs. A translocated bundle only gets relocation
/// instructions; sudo from there would run a binary the user cannot find again.
pub fn build_launch_script(quarantined: bool, collector_path: &Path) -> String {
    if quarantined {
        return RELOCATE_TEMPLATE.to_string();
    }

    COLLECT_TEMPLATE.replace(
        "{collector}",
        &shell_quote(&collector_path.to_string_lossy()),
    )
}

/// Persist the script to a temp file the terminal can execute after we exit.
pub fn write_launch_script(script: &str) -> io::Result<PathBuf> {
    let file = tempfile::Builder::new()
        .prefix("tempo-diagnostic-")
        .suffix(".sh")
        .tempfile()?;
    fs::write(file.path(), script)?;

    let (_, path) = file.keep().map_err(|err| err.error)?;
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;

    tracing::debug!("wrote launch script {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarantined_script_never_elevates() {
        let script = build_launch_script(true, Path::new("/Applications/t.app/Contents/MacOS/c"));

        assert!(script.starts_with("#!/bin/bash\n"));
        assert!(!script.contains("sudo"));
        assert!(script.contains("please move this application"));
        assert!(!script.contains("/Applications/t.app"));
    }

    #[test]
    fn collect_script_runs_collector_with_sudo() {
        let collector = Path::new(
            "/Applications/tempo-diagnostic.app/Contents/MacOS/tempo-diagnostic-collector",
        );

        let script = build_launch_script(false, collector);

        assert!(script.starts_with("#!/bin/bash\n"));
        assert!(script.contains(
            "\nsudo '/Applications/tempo-diagnostic.app/Contents/MacOS/tempo-diagnostic-collector'\n"
        ));
        assert!(script.contains("read -p \"press enter to exit...\""));
    }

    #[test]
    fn collector_path_is_escaped() {
        let collector = Path::new("/Users/o'brien/$(rm -rf ~)/collector");

        let script = build_launch_script(false, collector);

        assert!(script.contains("sudo '/Users/o'\\''brien/$(rm -rf ~)/collector'"));
    }

    #[test]
    fn shell_quote_wraps_plain_words() {
        assert_eq!(shell_quote("/a b/c"), "'/a b/c'");
        assert_eq!(shell_quote(""), "''");
    }

    #[test]
    fn written_script_outlives_handle_and_is_executable() {
        let path = write_launch_script("#!/bin/bash\necho hi\n").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
        assert_eq!(fs::read_to_string(&path).unwrap(), "#!/bin/bash\necho hi\n");
        assert_eq!(path.extension().unwrap(), "sh");

        fs::remove_file(path).unwrap();
    }
}
