//! Platform-specific filesystem path helpers.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Name of the agent framework's configuration directory.
pub const CONFIG_DIR_NAME: &str = ".gemini";

/// Path to Scribe's debug log file.
///
/// This is located in the OS temp directory.
#[must_use]
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("scribe.log")
}

#[must_use]
#[cfg(windows)]
pub(crate) fn home_dir_from(
    var_os: &mut impl FnMut(&'static str) -> Option<OsString>,
) -> Option<PathBuf> {
    if let Some(home) = var_os("USERPROFILE") {
        return Some(PathBuf::from(home));
    }

    let drive = var_os("HOMEDRIVE");
    let path = var_os("HOMEPATH");
    if let (Some(drive), Some(path)) = (drive, path) {
        let mut combined = PathBuf::from(drive);
        combined.push(path);
        return Some(combined);
    }

    var_os("HOME").map(PathBuf::from)
}

#[must_use]
#[cfg(not(windows))]
pub(crate) fn home_dir_from(
    var_os: &mut impl FnMut(&'static str) -> Option<OsString>,
) -> Option<PathBuf> {
    var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}

/// `~/.gemini` for the given home directory.
#[must_use]
pub fn config_dir(home: &Path) -> PathBuf {
    home.join(CONFIG_DIR_NAME)
}

/// Expand a leading `~/` or a bare `~` to `home`.
///
/// Other forms (`~user`, `~` in the middle) are left alone.
#[must_use]
pub fn expand_home(raw: &str, home: &Path) -> PathBuf {
    if raw == "~" {
        return home.to_path_buf();
    }
    raw.strip_prefix("~/")
        .map_or_else(|| PathBuf::from(raw), |rest| home.join(rest))
}

/// Resolve `path` against `base` when it is relative.
#[must_use]
pub fn resolve_against(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_suffix() {
        let path = log_path();
        assert!(path.ends_with("scribe.log"));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_home_dir_from_reads_home() {
        let mut env =
            |key: &'static str| (key == "HOME").then(|| OsString::from("/tmp/scribe-home"));
        assert_eq!(
            home_dir_from(&mut env),
            Some(PathBuf::from("/tmp/scribe-home"))
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn test_home_dir_from_ignores_empty_home() {
        let mut env = |key: &'static str| (key == "HOME").then(OsString::new);
        assert_eq!(home_dir_from(&mut env), None);
    }

    #[test]
    fn test_config_dir_appends_gemini() {
        let dir = config_dir(Path::new("/home/writer"));
        assert_eq!(dir, PathBuf::from("/home/writer/.gemini"));
    }

    #[test]
    fn test_expand_home_variants() {
        let home = Path::new("/home/writer");
        assert_eq!(expand_home("~", home), PathBuf::from("/home/writer"));
        assert_eq!(
            expand_home("~/notes/system.md", home),
            PathBuf::from("/home/writer/notes/system.md")
        );
        assert_eq!(expand_home("~other/x", home), PathBuf::from("~other/x"));
        assert_eq!(expand_home("/etc/system.md", home), PathBuf::from("/etc/system.md"));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_resolve_against_keeps_absolute() {
        let base = Path::new("/work");
        assert_eq!(
            resolve_against(Path::new("/abs/file.md"), base),
            PathBuf::from("/abs/file.md")
        );
        assert_eq!(
            resolve_against(Path::new("rel/file.md"), base),
            PathBuf::from("/work/rel/file.md")
        );
    }
}
