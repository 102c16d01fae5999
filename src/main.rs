//! Scribe - writer modes for a terminal AI agent

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use scribe::commands::{self, CommandContext, SlashCommand};
use scribe::env::{self, Env};
use scribe::launcher::LaunchPlan;
use scribe::prompts::{self, PromptComposer};
use scribe::{ModeState, SettingsStore, paths};
use std::path::PathBuf;

/// Writer modes, prompts and launcher for a terminal AI agent
#[derive(Parser)]
#[command(name = "scribe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the agent in the writing folder (the default)
    Launch {
        /// Arguments passed through to the agent
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Show, list or switch writer modes, as `/mode` does
    Mode {
        /// `show`, `list`, or a mode name followed by `--key value` options
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Print the system prompt the agent would receive
    Prompt {
        /// Compose for this mode instead of the active one
        #[arg(long)]
        mode: Option<String>,
        /// Saved user memory to append
        #[arg(long)]
        memory: Option<String>,
        /// Print the history compression prompt instead
        #[arg(long, conflicts_with_all = ["mode", "memory"])]
        compression: bool,
    },
}

fn main() {
    let env = Env::from_process();
    init_logging(&env);

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            if let Err(e) = Cli::command().print_help() {
                eprintln!("error: {e}");
            }
            std::process::exit(1);
        }
    };

    match run(cli, &env) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
    }
}

// Log to <tmp>/scribe.log - tail with: tail -f /tmp/scribe.log
// Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
fn init_logging(env: &Env) {
    let log_path = paths::log_path();
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    let debug_level = env
        .get(env::DEBUG)
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);
    if debug_level == 0 {
        return;
    }

    let level = match debug_level {
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    let (Some(dir), Some(file_name)) = (log_path.parent(), log_path.file_name()) else {
        return;
    };
    let file_appender = tracing_appender::rolling::never(dir, file_name);
    tracing_subscriber::fmt()
        .with_writer(file_appender)
        .with_max_level(level)
        .with_ansi(false)
        .init();
}

fn run(cli: Cli, env: &Env) -> Result<i32> {
    match cli.command {
        None => cmd_launch(env, Vec::new()),
        Some(Commands::Launch { args }) => cmd_launch(env, args),
        Some(Commands::Mode { args }) => {
            cmd_mode(env, &args);
            Ok(0)
        }
        Some(Commands::Prompt {
            mode,
            memory,
            compression,
        }) => {
            cmd_prompt(env, mode.as_deref(), memory.as_deref(), compression)?;
            Ok(0)
        }
    }
}

fn cmd_launch(env: &Env, args: Vec<String>) -> Result<i32> {
    let root = match env.get_non_empty(env::SCRIBE_ROOT) {
        Some(root) => PathBuf::from(root),
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };
    LaunchPlan::prepare(&root, env, args)?.run()
}

/// Mode the host starts in: `GEMINI_WRITER_MODE`, else the last persisted
/// switch, else the default.
fn initial_mode_state(env: &Env, store: &SettingsStore) -> ModeState {
    if env.is_set(env::WRITER_MODE) {
        return ModeState::from_env(env);
    }
    store
        .load()
        .map_or_else(ModeState::default, |settings| {
            ModeState::new(settings.current_mode)
        })
}

fn cmd_mode(env: &Env, args: &[String]) {
    let store = SettingsStore::from_env(env);
    let mut mode_state = initial_mode_state(env, &store);
    let mut ctx = CommandContext {
        env,
        mode_state: &mut mode_state,
        settings: &store,
    };
    let output = commands::WriterModeCommand.execute(&mut ctx, &args.join(" "));
    println!("{}", output.content);
}

fn cmd_prompt(
    env: &Env,
    mode: Option<&str>,
    memory: Option<&str>,
    compression: bool,
) -> Result<()> {
    if compression {
        println!("{}", prompts::compression_prompt());
        return Ok(());
    }

    let store = SettingsStore::from_env(env);
    let mode_state = initial_mode_state(env, &store);
    let working_dir = std::env::current_dir().context("Failed to determine current directory")?;
    let prompt = PromptComposer::new(env, working_dir)
        .with_mode_state(&mode_state)
        .build_system_prompt(memory, mode)
        .context("Failed to build system prompt")?;
    println!("{prompt}");
    Ok(())
}
