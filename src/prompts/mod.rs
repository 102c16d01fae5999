//! System prompt composition
//!
//! The prompt handed to the agent is the active mode's preamble followed by
//! the shared instructions, unless `GEMINI_SYSTEM_MD` points at a file that
//! replaces it entirely. `GEMINI_WRITE_SYSTEM_MD` optionally writes the result
//! out, and saved user memory is appended last.

mod templates;

use crate::env::{self, Env};
use crate::error::PromptError;
use crate::git;
use crate::mode::{Mode, ModeState};
use crate::paths;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the prompt override inside the `.gemini` directory.
pub const SYSTEM_PROMPT_FILE_NAME: &str = "system.md";

const MEMORY_SEPARATOR: &str = "\n\n---\n\n";

/// How a prompt-file environment variable was set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptFileToggle {
    /// Unset, empty, `0` or `false`.
    Disabled,
    /// `1` or `true`: use the default prompt file.
    DefaultPath,
    /// Any other value: a path, possibly starting with `~`.
    CustomPath(String),
}

impl PromptFileToggle {
    /// Interpret a variable's value; the keywords are case-insensitive.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|value| !value.is_empty()) else {
            return Self::Disabled;
        };
        match raw.to_lowercase().as_str() {
            "0" | "false" => Self::Disabled,
            "1" | "true" => Self::DefaultPath,
            _ => Self::CustomPath(raw.to_string()),
        }
    }

    /// Whether the variable turns the behavior on.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

/// Sandboxing reported by the agent framework through `SANDBOX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SandboxStatus {
    /// No sandbox.
    Outside,
    /// A container or other generic sandbox.
    Generic,
    /// macOS Seatbelt (`sandbox-exec`).
    Seatbelt,
}

impl SandboxStatus {
    /// Read the sandbox indicator from the environment.
    #[must_use]
    pub fn detect(env: &Env) -> Self {
        match env.get_non_empty(env::SANDBOX) {
            Some("sandbox-exec") => Self::Seatbelt,
            Some(_) => Self::Generic,
            None => Self::Outside,
        }
    }

    const fn section(self) -> &'static str {
        match self {
            Self::Outside => templates::OUTSIDE_SANDBOX_SECTION,
            Self::Generic => templates::SANDBOX_SECTION,
            Self::Seatbelt => templates::SEATBELT_SECTION,
        }
    }
}

/// The preamble that introduces a mode.
#[must_use]
pub const fn mode_preamble(mode: Mode) -> &'static str {
    match mode {
        Mode::ProWriter => templates::PRO_WRITER_PROMPT,
        Mode::Ghostwriter => templates::GHOSTWRITER_PROMPT,
        Mode::NovelAuto => templates::NOVEL_AUTO_PROMPT,
    }
}

/// Instructions for summarizing chat history into a state snapshot.
#[must_use]
pub fn compression_prompt() -> &'static str {
    templates::COMPRESSION_PROMPT.trim()
}

/// Builds system prompts from the environment, the mode state and the
/// working directory.
#[derive(Debug, Clone)]
pub struct PromptComposer<'a> {
    env: &'a Env,
    mode_state: Option<&'a ModeState>,
    working_dir: PathBuf,
    home: PathBuf,
}

impl<'a> PromptComposer<'a> {
    /// Composer for a session running in `working_dir`.
    #[must_use]
    pub fn new(env: &'a Env, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            env,
            mode_state: None,
            working_dir: working_dir.into(),
            home: env.home_dir().unwrap_or_else(|| PathBuf::from(".")),
        }
    }

    /// Read the active mode from `state` instead of the environment.
    #[must_use]
    pub const fn with_mode_state(mut self, state: &'a ModeState) -> Self {
        self.mode_state = Some(state);
        self
    }

    /// Mode used for the prompt: the override, else the mode state, else
    /// `GEMINI_WRITER_MODE`, else the default. Unknown names fall back to
    /// the default mode.
    #[must_use]
    pub fn effective_mode(&self, mode_override: Option<&str>) -> Mode {
        if let Some(name) = mode_override.filter(|name| !name.is_empty()) {
            return Mode::from_name_or_default(name);
        }
        self.mode_state.map_or_else(
            || ModeState::from_env(self.env).current(),
            ModeState::current,
        )
    }

    /// `<working dir>/.gemini/system.md`
    #[must_use]
    pub fn default_prompt_path(&self) -> PathBuf {
        self.working_dir
            .join(paths::CONFIG_DIR_NAME)
            .join(SYSTEM_PROMPT_FILE_NAME)
    }

    /// Build the system prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt override is enabled and its file is
    /// missing or unreadable, or if writing the prompt out fails.
    pub fn build_system_prompt(
        &self,
        user_memory: Option<&str>,
        mode_override: Option<&str>,
    ) -> Result<String, PromptError> {
        let override_toggle = PromptFileToggle::parse(self.env.get(env::SYSTEM_MD));
        let system_md_path = match &override_toggle {
            PromptFileToggle::CustomPath(raw) => self.resolve_custom_path(raw),
            _ => self.default_prompt_path(),
        };
        if override_toggle.is_enabled() && !system_md_path.exists() {
            return Err(PromptError::MissingSystemPrompt {
                path: system_md_path,
            });
        }

        let prompt = if override_toggle.is_enabled() {
            debug!(path = %system_md_path.display(), "Using system prompt override");
            fs::read_to_string(&system_md_path).map_err(|source| PromptError::Read {
                path: system_md_path.clone(),
                source,
            })?
        } else {
            let mode = self.effective_mode(mode_override);
            debug!(mode = %mode, "Composing system prompt");
            format!("{}{}", mode_preamble(mode), self.render_base())
        };

        match PromptFileToggle::parse(self.env.get(env::WRITE_SYSTEM_MD)) {
            PromptFileToggle::Disabled => {}
            PromptFileToggle::DefaultPath => write_prompt(&system_md_path, &prompt)?,
            PromptFileToggle::CustomPath(raw) => {
                write_prompt(&self.resolve_custom_path(&raw), &prompt)?;
            }
        }

        Ok(append_memory(prompt, user_memory))
    }

    fn resolve_custom_path(&self, raw: &str) -> PathBuf {
        paths::resolve_against(&paths::expand_home(raw, &self.home), &self.working_dir)
    }

    fn render_base(&self) -> String {
        let in_repo = git::is_git_repository(&self.working_dir);
        let mut rendered = templates::BASE_PROMPT
            .replace("$SANDBOX_SECTION", SandboxStatus::detect(self.env).section())
            .replace(
                "$GIT_SECTION",
                if in_repo { templates::GIT_SECTION } else { "" },
            )
            .replace(
                "$GIT_COMMIT_OFFER",
                if in_repo { templates::GIT_COMMIT_OFFER } else { "" },
            );
        for (placeholder, name) in templates::TOOL_NAMES {
            rendered = rendered.replace(placeholder, name);
        }
        rendered
    }
}

fn write_prompt(path: &Path, prompt: &str) -> Result<(), PromptError> {
    let to_error = |source| PromptError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    fs::write(path, prompt).map_err(to_error)?;
    info!(path = %path.display(), "Wrote system prompt");
    Ok(())
}

fn append_memory(prompt: String, user_memory: Option<&str>) -> String {
    match user_memory.map(str::trim).filter(|memory| !memory.is_empty()) {
        Some(memory) => format!("{prompt}{MEMORY_SEPARATOR}{memory}"),
        None => prompt,
    }
}
