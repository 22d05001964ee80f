use crate::error::{Result, UpdaterError};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

const REDACTED: &str = "***";

/// A program to run, with its arguments, extra environment and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
    pub current_dir: PathBuf,
    /// Values masked whenever the invocation or its output is displayed.
    secrets: Vec<String>,
}

impl Invocation {
    pub fn new<P: AsRef<Path>>(program: &str, args: &[&str], current_dir: P) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            env: Vec::new(),
            current_dir: current_dir.as_ref().to_path_buf(),
            secrets: Vec::new(),
        }
    }

    pub fn secret(mut self, value: &str) -> Self {
        if !value.is_empty() {
            self.secrets.push(value.to_string());
        }
        self
    }

    /// `text` with every secret of this invocation replaced by `***`.
    pub fn redact(&self, text: &str) -> String {
        self.secrets
            .iter()
            .fold(text.to_string(), |acc, secret| acc.replace(secret.as_str(), REDACTED))
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", self.redact(arg))?;
        }
        Ok(())
    }
}

/// Result of a finished process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    pub success: bool,
    pub stdout: String,
    /// stdout followed by stderr
    pub combined: String,
}

/// Capability to run external programs to completion.
pub trait ProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutput>;

    /// Runs the invocation and returns its stdout. A non-zero exit becomes an
    /// error carrying the command's combined output.
    fn run_checked(&self, invocation: &Invocation) -> Result<String> {
        let output = self.run(invocation)?;
        if output.success {
            return Ok(output.stdout);
        }

        Err(UpdaterError::CommandFailed {
            command: invocation.to_string(),
            output: invocation.redact(output.combined.trim_end()),
        })
    }
}

/// Runs programs with `std::process::Command`.
pub struct SystemRunner {
    verbose: bool,
}

impl SystemRunner {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutput> {
        if self.verbose {
            eprintln!("{}", executing_line(invocation));
        }

        let output = Command::new(&invocation.program)
            .current_dir(&invocation.current_dir)
            .args(&invocation.args)
            .envs(invocation.env.iter().map(|(k, v)| (k, v)))
            .output()
            .map_err(|e| UpdaterError::CommandFailed {
                command: invocation.to_string(),
                output: format!("failed to spawn process: {e}"),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let mut combined = stdout.clone();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if self.verbose && !output.status.success() {
            eprintln!(
                "[VERBOSE] `{}` exited with {}",
                invocation,
                output.status.code().unwrap_or(-1)
            );
        }

        Ok(ProcessOutput {
            success: output.status.success(),
            stdout,
            combined,
        })
    }
}

fn executing_line(invocation: &Invocation) -> String {
    format!(
        "[VERBOSE] Executing: {} (in {})",
        invocation,
        invocation.current_dir.display()
    )
}
