//! Build target definitions and execution.
//!
//! A [`BuildTarget`] names one solution/configuration pair; building it is
//! atomic from the caller's view: one clean+restore+build invocation of
//! msbuild whose output is classified, with failure carrying the diagnostic
//! report up to the caller. The telemetry server follows a different flow
//! (Go toolchain, no output classification) and has its own functions here.

use std::path::PathBuf;

use tracing::debug;

use crate::error::BuildError;
use crate::msbuild::classify_output;
use crate::paths::RepoPaths;
use crate::process::{CommandRunner, Invocation};

/// Git option that lets `go get` follow redirects from the dependency
/// proxy. Passed per-invocation through `GIT_CONFIG_*` so no global git
/// configuration is mutated.
const DEP_PROXY_REDIRECT_KEY: &str = "http.https://pkg.re.followRedirects";

/// One buildable solution under a fixed configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTarget {
  /// Human-readable name used in status and failure messages.
  pub name: String,
  /// Absolute path to the solution file.
  pub solution: PathBuf,
  /// msbuild configuration name, e.g. "Release".
  pub configuration: String,
}

impl BuildTarget {
  fn new(name: &str, solution: PathBuf, configuration: &str) -> Self {
    Self {
      name: name.to_string(),
      solution,
      configuration: configuration.to_string(),
    }
  }
}

/// The labs CLI and libraries.
pub fn labs_target(paths: &RepoPaths) -> BuildTarget {
  BuildTarget::new("cli and labs", paths.labs_solution(), "Release")
}

/// The script engines, in build order: the ironpython loader family, then
/// the cpython runtime once per supported python version. The runtime
/// variants share one solution; the configuration name selects the version.
pub fn engine_targets(paths: &RepoPaths) -> Vec<BuildTarget> {
  vec![
    BuildTarget::new("ironpython 2.7.* engines", paths.loaders_solution(), "Release"),
    BuildTarget::new("cpython 3.7 engine", paths.runtime_solution(), "ReleasePY37"),
    BuildTarget::new("cpython 3.8 engine", paths.runtime_solution(), "ReleasePY38"),
  ]
}

/// The fixed msbuild command template for a target: clean, restore, and
/// build in one invocation.
pub fn msbuild_invocation(target: &BuildTarget) -> Invocation {
  Invocation::new(
    "msbuild",
    [
      target.solution.display().to_string(),
      "-t:Clean;Restore;Build".to_string(),
      format!("-p:Configuration={}", target.configuration),
    ],
  )
}

/// Build one target and classify the result.
///
/// Returns `BuildError::BuildFailed` with the classifier's report when the
/// build did not pass; the caller decides how to surface it.
pub async fn build_target<R: CommandRunner + ?Sized>(runner: &R, target: &BuildTarget) -> Result<(), BuildError> {
  debug!(name = %target.name, solution = %target.solution.display(), "building solution");

  let output = runner.run(&msbuild_invocation(target)).await?;
  let report = classify_output(&output);

  if report.passed {
    Ok(())
  } else {
    Err(BuildError::BuildFailed {
      name: target.name.clone(),
      report: report.report,
    })
  }
}

/// `go get` for the telemetry server module, with the dependency proxy
/// redirect option scoped to this invocation.
pub fn fetch_deps_invocation(paths: &RepoPaths) -> Invocation {
  Invocation::new("go", ["get", "-d", "./..."])
    .with_cwd(paths.telemetry_dir())
    .with_env([
      ("GIT_CONFIG_COUNT", "1".to_string()),
      ("GIT_CONFIG_KEY_0", DEP_PROXY_REDIRECT_KEY.to_string()),
      ("GIT_CONFIG_VALUE_0", "true".to_string()),
    ])
}

/// `go build` of the telemetry server entry package into the bin directory.
pub fn compile_server_invocation(paths: &RepoPaths) -> Invocation {
  Invocation::new(
    "go",
    [
      "build".to_string(),
      "-o".to_string(),
      paths.telemetry_bin().display().to_string(),
      paths.telemetry_server_pkg().display().to_string(),
    ],
  )
  .with_cwd(paths.telemetry_dir())
}

/// Fetch telemetry server dependencies and return the tool output verbatim.
///
/// The output is informational only: it is never classified, and error text
/// from the Go toolchain does not fail the task.
pub async fn update_telemetry_deps<R: CommandRunner + ?Sized>(
  runner: &R,
  paths: &RepoPaths,
) -> Result<String, BuildError> {
  runner.run(&fetch_deps_invocation(paths)).await
}

/// Compile the telemetry server binary.
///
/// The output is not inspected at all; once the compiler invocation
/// returns, the build is assumed to have succeeded.
pub async fn build_telemetry_server<R: CommandRunner + ?Sized>(
  runner: &R,
  paths: &RepoPaths,
) -> Result<(), BuildError> {
  runner.run(&compile_server_invocation(paths)).await.map(|_| ())
}
