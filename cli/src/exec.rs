//! External command execution behind an injectable [`Executor`] trait.
use std::process::{Command, Output};

use anyhow::{Context, Result, bail};

/// Captured outcome of one program run.
#[derive(Debug, Clone)]
pub struct ExecResult {
    /// Standard output, lossily decoded.
    pub stdout: String,
    /// Standard error, lossily decoded.
    pub stderr: String,
    /// `true` on exit status zero.
    pub success: bool,
    /// Exit code; `None` when killed by a signal.
    pub code: Option<i32>,
}

impl ExecResult {
    /// Turn a non-zero exit into an error naming `program`, the exit code
    /// and its stderr.
    ///
    /// # Errors
    ///
    /// Returns an error if the run did not succeed.
    pub fn check(self, program: &str) -> Result<Self> {
        if self.success {
            return Ok(self);
        }
        let code = self
            .code
            .map_or_else(|| "signal".to_string(), |c| c.to_string());
        bail!("{program} failed (exit {code}): {}", self.stderr.trim())
    }
}

impl From<Output> for ExecResult {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
            code: output.status.code(),
        }
    }
}

/// Runs external programs.
///
/// Tasks and the test harness only ever reach the system through this trait,
/// so tests can substitute a recording double for `setfacl` and `getfacl`.
pub trait Executor: Send + Sync + std::fmt::Debug {
    /// Run `program`, failing on a non-zero exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be spawned or exits non-zero.
    fn run(&self, program: &str, args: &[&str]) -> Result<ExecResult> {
        self.run_unchecked(program, args)?.check(program)
    }

    /// Run `program` and hand back its result whatever the exit status.
    ///
    /// # Errors
    ///
    /// Returns an error only if the program cannot be spawned.
    fn run_unchecked(&self, program: &str, args: &[&str]) -> Result<ExecResult>;

    /// Whether `program` resolves on `PATH`.
    fn which(&self, program: &str) -> bool;
}

/// [`Executor`] that spawns real processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn run_unchecked(&self, program: &str, args: &[&str]) -> Result<ExecResult> {
        Command::new(program)
            .args(args)
            .output()
            .map(ExecResult::from)
            .with_context(|| format!("could not start {program}"))
    }

    fn which(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}
