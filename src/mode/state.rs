//! The active writer mode.

use super::Mode;
use crate::env::{self, Env};

/// Holds the active writer mode for the lifetime of the host application.
///
/// There is a single owner; the `/mode` command takes it by `&mut` and the
/// prompt composer by `&`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ModeState {
    current: Mode,
}

impl ModeState {
    /// Start in the given mode.
    #[must_use]
    pub const fn new(current: Mode) -> Self {
        Self { current }
    }

    /// Initialize from `GEMINI_WRITER_MODE`, defaulting unknown or missing
    /// values to [`Mode::ProWriter`].
    #[must_use]
    pub fn from_env(env: &Env) -> Self {
        Self::new(
            env.get_non_empty(env::WRITER_MODE)
                .map_or_else(Mode::default, Mode::from_name_or_default),
        )
    }

    /// The active mode.
    #[must_use]
    pub const fn current(&self) -> Mode {
        self.current
    }

    /// Replace the active mode.
    pub const fn set(&mut self, mode: Mode) {
        self.current = mode;
    }

    /// Environment entry that carries this state into a child process.
    #[must_use]
    pub const fn env_pair(&self) -> (&'static str, &'static str) {
        (env::WRITER_MODE, self.current.name())
    }
}
