//! Subcommand implementations.

mod all;
mod engines;
mod info;
mod labs;
mod telemetry;

pub use all::cmd_build_all;
pub use engines::cmd_build_engines;
pub use info::cmd_info;
pub use labs::cmd_build_labs;
pub use telemetry::cmd_build_telemetry;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use devt_core::tasks::build_target;
use devt_core::{BuildTarget, CommandRunner, RepoPaths};

use crate::output::{format_duration, print_success};

pub(crate) fn repo_paths(repo: &str) -> Result<RepoPaths> {
  let paths =
    RepoPaths::discover(Path::new(repo)).with_context(|| format!("Failed to resolve repo root: {}", repo))?;
  tracing::debug!(root = %paths.root().display(), "resolved repo root");
  Ok(paths)
}

pub(crate) fn runtime() -> Result<tokio::runtime::Runtime> {
  tokio::runtime::Runtime::new().context("Failed to create async runtime")
}

/// Drive one clean/restore/build invocation with user-facing progress
/// messages. Failure carries the classifier report up unchanged so the
/// top level can print it under the "Build failed" header.
pub(crate) async fn build_step<R: CommandRunner + ?Sized>(runner: &R, target: &BuildTarget) -> Result<()> {
  println!("Building {}...", target.name);
  let started = Instant::now();

  build_target(runner, target).await?;

  print_success(&format!(
    "Building {} completed successfully ({})",
    target.name,
    format_duration(started.elapsed())
  ));
  Ok(())
}
