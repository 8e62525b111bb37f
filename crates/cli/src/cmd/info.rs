//! Implementation of the `devt info` command.
//!
//! Shows the resolved repo root and whether the external toolchains the
//! build tasks depend on are actually installed.

use anyhow::Result;
use serde_json::json;

use devt_core::SystemRunner;
use devt_core::toolchain::probe_toolchain;

use crate::output::{print_error, print_json, print_stat, print_success};

pub fn cmd_info(repo: &str, json: bool) -> Result<()> {
  let paths = super::repo_paths(repo)?;
  let rt = super::runtime()?;
  let runner = SystemRunner::new();

  let statuses = rt.block_on(probe_toolchain(&runner));

  if json {
    print_json(&json!({
      "version": env!("CARGO_PKG_VERSION"),
      "repo": paths.root().display().to_string(),
      "toolchain": statuses,
    }))?;
    return Ok(());
  }

  print_success(&format!("devt v{}", env!("CARGO_PKG_VERSION")));
  print_stat("Repo", &paths.root().display().to_string());
  println!();
  println!("Toolchain:");
  for status in &statuses {
    match &status.version {
      Some(version) => print_stat(&status.name, version),
      None => print_error(&format!("{} not found", status.name)),
    }
  }

  Ok(())
}
