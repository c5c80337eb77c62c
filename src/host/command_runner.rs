//! Command Runner
//!
//! Executes external command-line tools with output capture.
//! Used for the macOS helpers (`iconutil`, `lsregister`, `touch`).
//! Calls block until the child exits; there is no timeout.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Result of running a command
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandResult {
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
    /// Exit code if available (None when killed by a signal)
    pub exit_code: Option<i32>,
}

impl CommandResult {
    /// Whether the process exited with status 0
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Best diagnostic text the tool produced: stderr, else stdout
    pub fn diagnostic(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        self.stdout.trim().to_string()
    }
}

/// Command runner errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum CommandError {
    /// Binary not found in PATH
    #[error("Binary '{0}' not found. Install it or add to PATH.")]
    BinaryNotFound(String),
    /// Failed to launch process
    #[error("Failed to launch process: {0}")]
    LaunchFailed(String),
}

/// Something that can run an external tool to completion.
///
/// The pipeline only talks to tools through this trait so it can be
/// exercised without the macOS binaries being present.
pub trait ToolRunner {
    fn run(&self, program: &Path, args: &[OsString]) -> Result<CommandResult, CommandError>;
}

/// Command runner for executing CLI tools
#[derive(Debug, Default)]
pub struct CommandRunner;

impl CommandRunner {
    pub fn new() -> Self {
        Self
    }

    /// Find a binary: an existing path is used as-is, anything else is looked up in PATH
    pub fn resolve(binary: &Path) -> Result<PathBuf, CommandError> {
        if binary.exists() {
            return Ok(binary.to_path_buf());
        }
        which::which(binary)
            .map_err(|_| CommandError::BinaryNotFound(binary.display().to_string()))
    }
}

impl ToolRunner for CommandRunner {
    fn run(&self, program: &Path, args: &[OsString]) -> Result<CommandResult, CommandError> {
        let binary_path = Self::resolve(program)?;

        let mut cmd = Command::new(&binary_path);
        cmd.args(args);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        tracing::debug!("Running {} {:?}", binary_path.display(), args);

        let output = cmd
            .output()
            .map_err(|e| CommandError::LaunchFailed(e.to_string()))?;

        let result = CommandResult {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        };

        tracing::debug!(
            "{} finished with {:?}",
            binary_path.display(),
            result.exit_code
        );

        Ok(result)
    }
}
