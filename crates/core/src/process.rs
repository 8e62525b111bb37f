//! One-shot external process invocation.
//!
//! Build tasks talk to the outside world exclusively through
//! [`CommandRunner`]: a task constructs an [`Invocation`], hands it to the
//! runner, and gets the combined textual output back. Pass/fail judgement is
//! deliberately not made here; callers that care feed the output to the
//! classifier, callers that don't (the telemetry flow) take it verbatim.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::BuildError;

/// A single external command execution: program, ordered arguments, and an
/// optional working directory and extra environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
  pub program: String,
  pub args: Vec<String>,
  pub cwd: Option<PathBuf>,
  pub env: Vec<(String, String)>,
}

impl Invocation {
  pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
    Self {
      program: program.into(),
      args: args.into_iter().map(Into::into).collect(),
      cwd: None,
      env: Vec::new(),
    }
  }

  pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
    self.cwd = Some(cwd.into());
    self
  }

  pub fn with_env(mut self, env: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
    self.env.extend(env.into_iter().map(|(k, v)| (k.into(), v.into())));
    self
  }
}

impl std::fmt::Display for Invocation {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.program)?;
    for arg in &self.args {
      write!(f, " {}", arg)?;
    }
    Ok(())
  }
}

/// Executes invocations and captures their output.
///
/// The trait seam exists so task logic can be exercised with a stub runner
/// that records invocations and plays back canned output, without spawning
/// real toolchain processes.
#[async_trait]
pub trait CommandRunner: Send + Sync {
  /// Run the invocation to completion and return its combined stdout and
  /// stderr as text.
  ///
  /// A non-zero exit status is not an error at this layer: build tools
  /// report failure through their output, and the classifier (or nobody,
  /// for the telemetry flow) decides what it means. Only failure to launch
  /// the process is an error.
  async fn run(&self, invocation: &Invocation) -> Result<String, BuildError>;
}

/// Production [`CommandRunner`] backed by `tokio::process`.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
  pub fn new() -> Self {
    Self
  }
}

#[async_trait]
impl CommandRunner for SystemRunner {
  async fn run(&self, invocation: &Invocation) -> Result<String, BuildError> {
    debug!(command = %invocation, cwd = ?invocation.cwd, "spawning process");

    let mut command = Command::new(&invocation.program);
    command.args(&invocation.args);

    if let Some(cwd) = &invocation.cwd {
      command.current_dir(cwd);
    }
    for (key, value) in &invocation.env {
      command.env(key, value);
    }

    let output = command.output().await.map_err(|source| BuildError::Spawn {
      program: invocation.program.clone(),
      source,
    })?;

    if !output.status.success() {
      debug!(code = ?output.status.code(), program = %invocation.program, "process exited non-zero");
    }

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    Ok(text)
  }
}
