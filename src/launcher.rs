//! Starts the agent CLI in writer mode.
//!
//! The launcher prepares `<root>/my_writings` as the working directory,
//! verifies the agent build, decides whether to attach a debugger and then
//! runs the agent with inherited stdio, forwarding its exit code.

use crate::command::command_from_env;
use crate::env::{self, Env};
use crate::mode::{Mode, ModeState};
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, info, warn};

/// Directory under the root that the agent runs in.
pub const WORKDIR_NAME: &str = "my_writings";

const DEFAULT_DEBUG_PORT: &str = "9229";
const BUILD_CHECK: &[&str] = &["node", "scripts/check-build-status.js"];
const SANDBOX_PROBE: &[&str] = &["node", "scripts/sandbox_command.js"];

#[derive(Debug, Deserialize)]
struct PackageManifest {
    version: Option<String>,
}

/// Everything needed to start the agent, computed up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    root: PathBuf,
    workdir: PathBuf,
    overlay: BTreeMap<String, String>,
    build_check: Vec<String>,
    sandbox_probe: Vec<String>,
    agent: Vec<String>,
    forwarded: Vec<String>,
    debug: bool,
    sandboxed: bool,
    debug_port: String,
}

impl LaunchPlan {
    /// Compute the plan for an agent checkout at `root`.
    ///
    /// `forwarded` is appended to the agent's arguments unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if one of the command overrides cannot be parsed.
    pub fn prepare(root: &Path, env: &Env, forwarded: Vec<String>) -> Result<Self> {
        let workdir = root.join(WORKDIR_NAME);
        let debug = env.is_set(env::DEBUG);

        let mut overlay = BTreeMap::new();
        overlay.insert("CLI_VERSION".to_string(), cli_version(root));
        overlay.insert("DEV".to_string(), "true".to_string());
        let (mode_key, mode_value) = ModeState::new(Mode::ProWriter).env_pair();
        overlay.insert(mode_key.to_string(), mode_value.to_string());
        overlay.insert(
            "GEMINI_WORKSPACE_DIR".to_string(),
            workdir.display().to_string(),
        );
        if debug {
            overlay.insert("GEMINI_CLI_NO_RELAUNCH".to_string(), "true".to_string());
        }

        let default_agent = root.join("packages").join("cli").display().to_string();
        Ok(Self {
            root: root.to_path_buf(),
            workdir,
            overlay,
            build_check: command_from_env(env, env::SCRIBE_BUILD_CHECK, BUILD_CHECK)?,
            sandbox_probe: command_from_env(env, env::SCRIBE_SANDBOX_PROBE, SANDBOX_PROBE)?,
            agent: command_from_env(env, env::SCRIBE_AGENT_COMMAND, &["node", default_agent.as_str()])?,
            forwarded,
            debug,
            sandboxed: env.is_set(env::SANDBOX),
            debug_port: env.get_or(env::DEBUG_PORT, DEFAULT_DEBUG_PORT).to_string(),
        })
    }

    /// Directory the agent runs in.
    #[must_use]
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Variables set on top of the inherited environment.
    #[must_use]
    pub const fn overlay(&self) -> &BTreeMap<String, String> {
        &self.overlay
    }

    /// Debugger flag for the agent runtime, if one should be passed.
    ///
    /// None when `DEBUG` is unset or a sandbox command was found.
    #[must_use]
    pub fn debug_flag(&self, sandbox_command: Option<&str>) -> Option<String> {
        if !self.debug || sandbox_command.is_some() {
            return None;
        }
        Some(if self.sandboxed {
            format!("--inspect-brk=0.0.0.0:{}", self.debug_port)
        } else {
            "--inspect-brk".to_string()
        })
    }

    /// Full agent argv: program, optional debugger flag, entry point, then
    /// the forwarded arguments.
    #[must_use]
    pub fn agent_argv(&self, sandbox_command: Option<&str>) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.agent.len() + self.forwarded.len() + 1);
        let mut agent = self.agent.iter().cloned();
        argv.extend(agent.next());
        argv.extend(self.debug_flag(sandbox_command));
        argv.extend(agent);
        argv.extend(self.forwarded.iter().cloned());
        argv
    }

    /// Create the working directory. Returns whether it had to be created.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_workdir(&self) -> Result<bool> {
        if self.workdir.is_dir() {
            return Ok(false);
        }
        fs::create_dir_all(&self.workdir).with_context(|| {
            format!(
                "Failed to create working directory {}",
                self.workdir.display()
            )
        })?;
        Ok(true)
    }

    /// Run the build-status check in the root with inherited stdio.
    ///
    /// # Errors
    ///
    /// Returns an error if the check cannot be started or exits unsuccessfully.
    pub fn check_build(&self) -> Result<()> {
        let (program, args) = split_argv(&self.build_check)?;
        debug!(command = ?self.build_check, "Checking build status");
        let status = Command::new(program)
            .args(args)
            .current_dir(&self.root)
            .status()
            .with_context(|| format!("Failed to run build status check '{program}'"))?;
        if !status.success() {
            bail!("Build status check failed ({status})");
        }
        Ok(())
    }

    /// Ask the root for a sandbox command; any failure means none.
    #[must_use]
    pub fn probe_sandbox(&self) -> Option<String> {
        let (program, args) = split_argv(&self.sandbox_probe).ok()?;
        let output = match Command::new(program)
            .args(args)
            .current_dir(&self.root)
            .stderr(Stdio::null())
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                debug!("Sandbox probe failed to start: {}", e);
                return None;
            }
        };
        if !output.status.success() {
            debug!(status = %output.status, "Sandbox probe exited unsuccessfully");
            return None;
        }
        let command = String::from_utf8_lossy(&output.stdout).trim().to_string();
        (!command.is_empty()).then_some(command)
    }

    /// Prepare the working directory, check the build, start the agent and
    /// wait for it. Returns the exit code to exit with.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be created, the build
    /// check fails, or the agent cannot be started.
    pub fn run(&self) -> Result<i32> {
        println!("🚀 Starting Gemini Writer CLI...");
        println!("📂 Working folder: {}", self.workdir.display());
        if self.ensure_workdir()? {
            println!("📁 Created {WORKDIR_NAME} folder");
        }
        println!("✅ Working folder ready: {}", self.workdir.display());

        self.check_build()?;

        let sandbox_command = self.probe_sandbox();
        let argv = self.agent_argv(sandbox_command.as_deref());
        let (program, args) = split_argv(&argv)?;

        println!("✍️  Starting in Professional Writer mode...");
        println!();
        info!(argv = ?argv, workdir = %self.workdir.display(), "Launching agent");

        let status = Command::new(program)
            .args(args)
            .envs(&self.overlay)
            .current_dir(&self.workdir)
            .status()
            .with_context(|| format!("Failed to start agent '{program}'"))?;
        let code = exit_code(status);
        debug!(code, "Agent exited");
        Ok(code)
    }
}

/// Exit code to forward for a finished child.
///
/// Signal termination maps to `128 + signal` on Unix. Anything without a
/// code maps to 1.
#[must_use]
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

fn cli_version(root: &Path) -> String {
    let manifest_path = root.join("package.json");
    let version = fs::read_to_string(&manifest_path)
        .context("read failed")
        .and_then(|content| {
            serde_json::from_str::<PackageManifest>(&content).context("invalid JSON")
        })
        .map(|manifest| manifest.version);
    match version {
        Ok(Some(version)) => version,
        Ok(None) => env!("CARGO_PKG_VERSION").to_string(),
        Err(e) => {
            warn!(
                "Could not read version from {}: {}",
                manifest_path.display(),
                e
            );
            env!("CARGO_PKG_VERSION").to_string()
        }
    }
}

fn split_argv(argv: &[String]) -> Result<(&str, &[String])> {
    match argv.split_first() {
        Some((program, args)) => Ok((program.as_str(), args)),
        None => bail!("Command line is empty"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::TempDir;

    fn plan_with(root: &Path, pairs: &[(&str, &str)]) -> Result<LaunchPlan, Box<dyn std::error::Error>> {
        let env = Env::from_pairs(pairs.iter().copied());
        Ok(LaunchPlan::prepare(root, &env, vec!["--yolo".to_string()])?)
    }

    #[test]
    fn test_overlay() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        fs::write(temp_dir.path().join("package.json"), r#"{"name": "writer", "version": "0.1.13"}"#)?;
        let plan = plan_with(temp_dir.path(), &[])?;

        let overlay = plan.overlay();
        assert_eq!(overlay.get("CLI_VERSION").map(String::as_str), Some("0.1.13"));
        assert_eq!(overlay.get("DEV").map(String::as_str), Some("true"));
        assert_eq!(overlay.get("GEMINI_WRITER_MODE").map(String::as_str), Some("pro-writer"));
        let workdir = temp_dir.path().join(WORKDIR_NAME).display().to_string();
        assert_eq!(overlay.get("GEMINI_WORKSPACE_DIR"), Some(&workdir));
        assert!(!overlay.contains_key("GEMINI_CLI_NO_RELAUNCH"));
        Ok(())
    }

    #[test]
    fn test_overlay_without_manifest_uses_crate_version() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let plan = plan_with(temp_dir.path(), &[("DEBUG", "1")])?;
        assert_eq!(
            plan.overlay().get("CLI_VERSION").map(String::as_str),
            Some(env!("CARGO_PKG_VERSION"))
        );
        assert_eq!(
            plan.overlay().get("GEMINI_CLI_NO_RELAUNCH").map(String::as_str),
            Some("true")
        );
        Ok(())
    }

    #[rstest]
    #[case(&[], None, None)]
    #[case(&[("DEBUG", "1")], None, Some("--inspect-brk"))]
    #[case(&[("DEBUG", "1"), ("SANDBOX", "docker")], None, Some("--inspect-brk=0.0.0.0:9229"))]
    #[case(&[("DEBUG", "1"), ("SANDBOX", "docker"), ("DEBUG_PORT", "9339")], None, Some("--inspect-brk=0.0.0.0:9339"))]
    #[case(&[("DEBUG", "1")], Some("docker"), None)]
    fn test_debug_flag(
        #[case] pairs: &[(&str, &str)],
        #[case] sandbox_command: Option<&str>,
        #[case] expected: Option<&str>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let plan = plan_with(temp_dir.path(), pairs)?;
        assert_eq!(plan.debug_flag(sandbox_command).as_deref(), expected);
        Ok(())
    }

    #[test]
    fn test_agent_argv() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let entry = temp_dir.path().join("packages").join("cli").display().to_string();

        let plan = plan_with(temp_dir.path(), &[])?;
        assert_eq!(plan.agent_argv(None), vec!["node", entry.as_str(), "--yolo"]);

        let plan = plan_with(temp_dir.path(), &[("DEBUG", "1")])?;
        assert_eq!(
            plan.agent_argv(None),
            vec!["node", "--inspect-brk", entry.as_str(), "--yolo"]
        );
        Ok(())
    }

    #[test]
    fn test_ensure_workdir_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let plan = plan_with(temp_dir.path(), &[])?;
        assert!(plan.ensure_workdir()?);
        assert!(!plan.ensure_workdir()?);
        assert!(plan.workdir().is_dir());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_probe_sandbox() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let found = plan_with(temp_dir.path(), &[("SCRIBE_SANDBOX_PROBE", "echo '  docker  '")])?;
        assert_eq!(found.probe_sandbox().as_deref(), Some("docker"));

        let empty = plan_with(temp_dir.path(), &[("SCRIBE_SANDBOX_PROBE", "true")])?;
        assert_eq!(empty.probe_sandbox(), None);

        let failing = plan_with(temp_dir.path(), &[("SCRIBE_SANDBOX_PROBE", "sh -c 'echo docker; exit 1'")])?;
        assert_eq!(failing.probe_sandbox(), None);

        let missing = plan_with(temp_dir.path(), &[("SCRIBE_SANDBOX_PROBE", "scribe-no-such-probe")])?;
        assert_eq!(missing.probe_sandbox(), None);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_run_forwards_exit_code_and_environment() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let plan = plan_with(
            temp_dir.path(),
            &[
                ("SCRIBE_BUILD_CHECK", "true"),
                ("SCRIBE_SANDBOX_PROBE", "true"),
                (
                    "SCRIBE_AGENT_COMMAND",
                    r#"sh -c 'echo "$GEMINI_WRITER_MODE $DEV $1" > launched.txt; exit 7' agent"#,
                ),
            ],
        )?;

        assert_eq!(plan.run()?, 7);
        let launched = fs::read_to_string(plan.workdir().join("launched.txt"))?;
        assert_eq!(launched, "pro-writer true --yolo\n");
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_run_fails_when_build_check_fails() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let plan = plan_with(
            temp_dir.path(),
            &[("SCRIBE_BUILD_CHECK", "false"), ("SCRIBE_AGENT_COMMAND", "true")],
        )?;

        let result = plan.run();
        assert!(result.is_err());
        if let Err(error) = result {
            assert!(format!("{error}").contains("Build status check failed"));
        }
        assert!(plan.workdir().is_dir());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_run_fails_when_agent_is_missing() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let plan = plan_with(
            temp_dir.path(),
            &[
                ("SCRIBE_BUILD_CHECK", "true"),
                ("SCRIBE_SANDBOX_PROBE", "scribe-no-such-probe"),
                ("SCRIBE_AGENT_COMMAND", "scribe-no-such-agent"),
            ],
        )?;
        let result = plan.run();
        assert!(result.is_err());
        if let Err(error) = result {
            assert!(format!("{error}").contains("Failed to start agent"));
        }
        Ok(())
    }

    #[cfg(unix)]
    #[rstest]
    #[case("exit 0", 0)]
    #[case("exit 3", 3)]
    #[case("kill -TERM $$", 143)]
    fn test_exit_code(#[case] script: &str, #[case] expected: i32) -> Result<(), Box<dyn std::error::Error>> {
        let status = Command::new("sh").args(["-c", script]).status()?;
        assert_eq!(exit_code(status), expected);
        Ok(())
    }
}
