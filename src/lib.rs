//! Scribe - writer modes for a terminal AI agent
//!
//! Scribe adds three writing modes (pro-writer, ghostwriter, novel-auto) to an
//! agent CLI: a `/mode` slash command that switches between them and records
//! the choice, a system prompt composer that tailors the agent's instructions
//! to the active mode, and a launcher that starts the agent in a dedicated
//! writing folder.

mod command;

pub mod commands;
pub mod env;
pub mod error;
pub mod git;
pub mod launcher;
pub mod mode;
pub mod paths;
pub mod prompts;
pub mod settings;

pub use env::Env;
pub use error::{ModeError, PromptError, SettingsError};
pub use mode::{Mode, ModeState, OptionSet};
pub use prompts::PromptComposer;
pub use settings::SettingsStore;
