//! Implementation of the `devt build-all` command.

use anyhow::Result;

use devt_core::SystemRunner;

use super::{engines::build_engines, labs::build_labs};

/// Build every project in the tree: labs first, then the engines. The
/// order is fixed; the engine loaders link against the labs output.
pub fn cmd_build_all(repo: &str) -> Result<()> {
  let paths = super::repo_paths(repo)?;
  let rt = super::runtime()?;
  let runner = SystemRunner::new();

  rt.block_on(async {
    build_labs(&runner, &paths).await?;
    build_engines(&runner, &paths).await
  })
}
