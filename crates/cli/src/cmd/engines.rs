//! Implementation of the `devt build-engines` command.

use anyhow::Result;

use devt_core::tasks::engine_targets;
use devt_core::{CommandRunner, RepoPaths, SystemRunner};

/// Build the script engines: the ironpython loader family, then the
/// cpython runtime once per supported python version.
pub fn cmd_build_engines(repo: &str) -> Result<()> {
  let paths = super::repo_paths(repo)?;
  let rt = super::runtime()?;
  let runner = SystemRunner::new();

  rt.block_on(build_engines(&runner, &paths))
}

/// The sub-builds run strictly one after another; the first failure
/// propagates immediately and the remaining sub-builds never start.
pub(crate) async fn build_engines<R: CommandRunner + ?Sized>(runner: &R, paths: &RepoPaths) -> Result<()> {
  for target in engine_targets(paths) {
    super::build_step(runner, &target).await?;
  }
  Ok(())
}
