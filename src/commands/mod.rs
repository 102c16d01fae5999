//! Slash commands contributed to the host agent's command table.

mod mode;

pub use mode::WriterModeCommand;

use crate::env::Env;
use crate::mode::ModeState;
use crate::settings::SettingsStore;

/// Severity of a command's message in the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Informational message.
    Info,
}

/// Message returned to the host for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// How the host should present the message.
    pub kind: MessageKind,
    /// Markdown text.
    pub content: String,
}

impl CommandOutput {
    /// Informational message.
    #[must_use]
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Info,
            content: content.into(),
        }
    }
}

/// What a command may read and change while it runs.
#[derive(Debug)]
pub struct CommandContext<'a> {
    /// Environment snapshot taken at startup.
    pub env: &'a Env,
    /// The host's active mode.
    pub mode_state: &'a mut ModeState,
    /// Where mode switches are recorded.
    pub settings: &'a SettingsStore,
}

/// A command invoked as `/<name> [args]`.
pub trait SlashCommand: std::fmt::Debug + Sync {
    /// Primary name, without the slash.
    fn name(&self) -> &'static str;

    /// Alternative names.
    fn aliases(&self) -> &'static [&'static str];

    /// One-line help text.
    fn description(&self) -> &'static str;

    /// Run the command with the raw argument string.
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &str) -> CommandOutput;

    /// Whether `invoked` (with or without a leading `/`) names this command.
    fn matches(&self, invoked: &str) -> bool {
        let invoked = invoked.strip_prefix('/').unwrap_or(invoked);
        self.name() == invoked || self.aliases().contains(&invoked)
    }
}

const BUILTIN: &[&dyn SlashCommand] = &[&WriterModeCommand];

/// All commands this crate provides.
#[must_use]
pub const fn builtin() -> &'static [&'static dyn SlashCommand] {
    BUILTIN
}

/// Look up a command by name or alias.
#[must_use]
pub fn find(invoked: &str) -> Option<&'static dyn SlashCommand> {
    BUILTIN.iter().copied().find(|command| command.matches(invoked))
}
