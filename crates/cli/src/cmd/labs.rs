//! Implementation of the `devt build-labs` command.

use anyhow::Result;

use devt_core::tasks::labs_target;
use devt_core::{CommandRunner, RepoPaths, SystemRunner};

/// Build the CLI and labs libraries under the Release configuration.
pub fn cmd_build_labs(repo: &str) -> Result<()> {
  let paths = super::repo_paths(repo)?;
  let rt = super::runtime()?;
  let runner = SystemRunner::new();

  rt.block_on(build_labs(&runner, &paths))
}

pub(crate) async fn build_labs<R: CommandRunner + ?Sized>(runner: &R, paths: &RepoPaths) -> Result<()> {
  super::build_step(runner, &labs_target(paths)).await
}
