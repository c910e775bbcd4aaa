// ABOUTME: Runs external tools (site generator, minifier, git, hosting CLI).
// ABOUTME: The CommandRunner trait lets the deploy pipeline run against fakes in tests.

use crate::error::{Error, Result};
use crate::types::ToolCommand;
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

/// Executes external commands to completion.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a command with its output going straight to the terminal.
    async fn run(&self, command: &ToolCommand) -> Result<()>;

    /// Run a command and return its standard output.
    async fn capture(&self, command: &ToolCommand) -> Result<String>;
}

/// Spawns real processes in a fixed working directory.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    dir: PathBuf,
}

impl ProcessRunner {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn command(&self, command: &ToolCommand) -> Command {
        let mut cmd = Command::new(command.program());
        cmd.args(command.args()).current_dir(&self.dir);
        cmd
    }
}

fn check_status(command: &ToolCommand, status: ExitStatus) -> Result<()> {
    if status.success() {
        return Ok(());
    }

    tracing::error!("`{}` exited with {:?}", command, status.code());
    Err(Error::CommandFailed {
        command: command.to_string(),
        code: status.code(),
    })
}

fn spawn_error(command: &ToolCommand, source: std::io::Error) -> Error {
    Error::Spawn {
        command: command.to_string(),
        source,
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, command: &ToolCommand) -> Result<()> {
        tracing::debug!("Running `{}` in {}", command, self.dir.display());

        let status = self
            .command(command)
            .status()
            .await
            .map_err(|e| spawn_error(command, e))?;

        check_status(command, status)
    }

    async fn capture(&self, command: &ToolCommand) -> Result<String> {
        tracing::debug!("Capturing `{}` in {}", command, self.dir.display());

        let output = self
            .command(command)
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .await
            .map_err(|e| spawn_error(command, e))?;

        check_status(command, output.status)?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
