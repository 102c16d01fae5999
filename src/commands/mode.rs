//! `/mode`: show, list and switch writer modes.

use super::{CommandContext, CommandOutput, SlashCommand};
use crate::env::{self, Env};
use crate::mode::{Mode, OptionSet, list_available_modes, switch_mode};

/// The `/mode` command, also reachable as `/writer-mode` and `/wm`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WriterModeCommand;

impl SlashCommand for WriterModeCommand {
    fn name(&self) -> &'static str {
        "mode"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["writer-mode", "wm"]
    }

    fn description(&self) -> &'static str {
        "Switch between different writing modes (pro-writer, ghostwriter, novel-auto)"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &str) -> CommandOutput {
        let tokens: Vec<&str> = args.split_whitespace().collect();
        let content = match tokens.split_first() {
            None | Some((&"show", _)) => show_current_mode(ctx.mode_state.current(), ctx.env),
            Some((&"list", _)) => list_available_modes().to_string(),
            Some((requested, rest)) => switch_mode(
                ctx.mode_state,
                ctx.settings,
                requested,
                &OptionSet::parse(rest),
            ),
        };
        CommandOutput::info(content)
    }
}

fn show_current_mode(mode: Mode, env: &Env) -> String {
    let info = mode.info();
    let tools = info
        .tools
        .iter()
        .map(|tool| format!("- {tool}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "📝 **Current Writing Mode: {}**\n\n{}\n\n**Available Tools:**\n{tools}\n\n**Current Settings:**\n- Style Guide: {}\n- Language: {}\n- Safety Level: {}\n\nUse `/mode [mode-name]` to switch modes\nUse `/mode list` to see all available modes",
        mode.name().to_uppercase(),
        info.description,
        env.get_or(env::STYLE_GUIDE, "default"),
        env.get_or(env::WRITER_LANG, "ko"),
        env.get_or(env::WRITER_SAFETY, "moderate"),
    )
}
