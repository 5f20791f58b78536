// TaxDesk - platform/fs.rs
//
// Desktop integration for the data files: show the result file in the
// system file manager.

use std::ffi::OsString;
use std::path::Path;

/// Program and arguments that reveal `path` on the current platform.
///
/// - Windows: `explorer /select,<path>` (file pre-selected)
/// - macOS: `open -R <path>` (revealed in Finder)
/// - Linux and others: `xdg-open <parent dir>`; there is no portable way to
///   pre-select a file
pub fn reveal_command(path: &Path) -> (&'static str, Vec<OsString>) {
    if cfg!(target_os = "windows") {
        // `/select,<path>` must be a single argument with no space.
        let mut arg = OsString::from("/select,");
        arg.push(path.as_os_str());
        ("explorer", vec![arg])
    } else if cfg!(target_os = "macos") {
        ("open", vec![OsString::from("-R"), path.as_os_str().to_owned()])
    } else {
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        ("xdg-open", vec![dir.as_os_str().to_owned()])
    }
}

/// Open the system file manager at `path`.
///
/// The process is spawned detached. Launch failures are logged and
/// otherwise ignored so the UI never blocks on them.
pub fn reveal_in_file_manager(path: &Path) {
    let (program, args) = reveal_command(path);
    match std::process::Command::new(program).args(&args).spawn() {
        Ok(_) => tracing::debug!(path = %path.display(), program, "Revealed in file manager"),
        Err(e) => tracing::warn!(
            path = %path.display(),
            program,
            error = %e,
            "Failed to open file manager"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_os = "linux")]
    #[test]
    fn test_linux_opens_parent_directory() {
        let (program, args) = reveal_command(Path::new("data/hasil_pencarian.csv"));
        assert_eq!(program, "xdg-open");
        assert_eq!(args, vec![OsString::from("data")]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_bare_file_name_opens_current_directory() {
        let (_, args) = reveal_command(Path::new("hasil_pencarian.csv"));
        assert_eq!(args, vec![OsString::from(".")]);
    }
}
