//! Writer modes
//!
//! A [`Mode`] selects which prompt template, display settings and example
//! commands are active. The set is closed: names are validated when switching
//! and defaulted to [`Mode::ProWriter`] when read back.

mod options;
mod registry;
mod state;
mod switch;

pub use options::OptionSet;
pub use registry::{ModeConfiguration, ModeInfo, Setting, list_available_modes};
pub use state::ModeState;
pub use switch::switch_mode;

use crate::error::ModeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three writer modes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Professional writing with research and publishing workflows.
    #[default]
    ProWriter,
    /// Collaborative writing in a client's voice.
    Ghostwriter,
    /// Automated novel generation with world-building.
    NovelAuto,
}

impl Mode {
    /// All modes, in display order.
    pub const ALL: &'static [Self] = &[Self::ProWriter, Self::Ghostwriter, Self::NovelAuto];

    /// The name used on the command line, in the environment and on disk.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ProWriter => "pro-writer",
            Self::Ghostwriter => "ghostwriter",
            Self::NovelAuto => "novel-auto",
        }
    }

    /// Lenient lookup used when reading a stored mode.
    ///
    /// Unknown names fall back to the default mode instead of failing.
    #[must_use]
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| ModeError::Unknown(s.to_string()))
    }
}
