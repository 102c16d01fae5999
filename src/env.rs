//! Read-only environment snapshot.
//!
//! Everything in this crate reads environment variables through an [`Env`]
//! captured once at startup (or built from pairs in tests). Nothing here
//! mutates the process environment; values meant for a child process are
//! handed to `std::process::Command` instead.

use crate::paths;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::PathBuf;

/// Active writer mode, read at startup and exported to child processes.
pub const WRITER_MODE: &str = "GEMINI_WRITER_MODE";
/// Display-only style guide name shown by `/mode show`.
pub const STYLE_GUIDE: &str = "GEMINI_PRO_STYLE_GUIDE";
/// Display-only writing language shown by `/mode show`.
pub const WRITER_LANG: &str = "GEMINI_WRITER_LANG";
/// Display-only safety level shown by `/mode show`.
pub const WRITER_SAFETY: &str = "GEMINI_WRITER_SAFETY";
/// Enables replacing the system prompt with a file (`1`/`true` or a path).
pub const SYSTEM_MD: &str = "GEMINI_SYSTEM_MD";
/// Enables writing the computed system prompt to a file (`1`/`true` or a path).
pub const WRITE_SYSTEM_MD: &str = "GEMINI_WRITE_SYSTEM_MD";
/// Sandbox indicator set by the agent framework.
pub const SANDBOX: &str = "SANDBOX";
/// Debug flag; also the log verbosity (`0-3`) for the `scribe` binary.
pub const DEBUG: &str = "DEBUG";
/// Debugger port used when attaching inside a sandbox.
pub const DEBUG_PORT: &str = "DEBUG_PORT";
/// Root directory of the agent checkout the launcher starts from.
pub const SCRIBE_ROOT: &str = "SCRIBE_ROOT";
/// Command line overriding the launcher's build-status check.
pub const SCRIBE_BUILD_CHECK: &str = "SCRIBE_BUILD_CHECK";
/// Command line overriding the launcher's sandbox-command probe.
pub const SCRIBE_SANDBOX_PROBE: &str = "SCRIBE_SANDBOX_PROBE";
/// Command line overriding the agent program and entry point.
pub const SCRIBE_AGENT_COMMAND: &str = "SCRIBE_AGENT_COMMAND";

/// An immutable view of environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    vars: BTreeMap<String, String>,
}

impl Env {
    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    #[must_use]
    pub fn from_process() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect();
        Self { vars }
    }

    /// Build a snapshot from explicit key/value pairs.
    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Look up a variable.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Look up a variable, treating an empty value as unset.
    #[must_use]
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    /// Look up a variable, falling back to `default` when unset or empty.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get_non_empty(key).unwrap_or(default)
    }

    /// Whether a variable is set to a non-empty value.
    #[must_use]
    pub fn is_set(&self, key: &str) -> bool {
        self.get_non_empty(key).is_some()
    }

    /// The user's home directory according to this snapshot.
    #[must_use]
    pub fn home_dir(&self) -> Option<PathBuf> {
        let mut var_os = |key: &'static str| self.get(key).map(OsString::from);
        paths::home_dir_from(&mut var_os)
    }
}
