//! Availability probing for the external toolchains.

use serde::Serialize;
use tracing::debug;

use crate::process::{CommandRunner, Invocation};

/// Availability of one required external tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolStatus {
  pub name: String,
  /// First line of the tool's version output, or `None` when the tool
  /// could not be launched.
  pub version: Option<String>,
}

impl ToolStatus {
  pub fn available(&self) -> bool {
    self.version.is_some()
  }
}

/// Tools the build tasks shell out to, with their version query arguments.
const REQUIRED_TOOLS: &[(&str, &[&str])] = &[
  ("msbuild", &["-version", "-nologo"]),
  ("go", &["version"]),
  ("git", &["--version"]),
];

/// Probe every required tool for a version string.
///
/// Probing never fails: a tool that cannot be launched is reported as
/// unavailable rather than erroring out, so `devt info` works on a machine
/// with a partial toolchain.
pub async fn probe_toolchain<R: CommandRunner + ?Sized>(runner: &R) -> Vec<ToolStatus> {
  let mut statuses = Vec::with_capacity(REQUIRED_TOOLS.len());

  for (name, args) in REQUIRED_TOOLS {
    let invocation = Invocation::new(*name, args.iter().copied());
    let version = match runner.run(&invocation).await {
      Ok(output) => output.lines().map(str::trim).find(|l| !l.is_empty()).map(String::from),
      Err(err) => {
        debug!(tool = name, error = %err, "toolchain probe failed");
        None
      }
    };
    statuses.push(ToolStatus {
      name: name.to_string(),
      version,
    });
  }

  statuses
}
