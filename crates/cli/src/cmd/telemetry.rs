//! Implementation of the `devt build-telemetry` command.
//!
//! The telemetry server is a Go module and follows a different flow from
//! the .NET solutions: dependencies are fetched first (tool output printed
//! verbatim, never classified), then the server binary is compiled with no
//! output inspection at all. A toolchain error here only surfaces if the
//! tool cannot be launched.

use anyhow::Result;

use devt_core::SystemRunner;
use devt_core::tasks::{build_telemetry_server, update_telemetry_deps};

use crate::output::print_success;

pub fn cmd_build_telemetry(repo: &str) -> Result<()> {
  let paths = super::repo_paths(repo)?;
  let rt = super::runtime()?;
  let runner = SystemRunner::new();

  rt.block_on(async {
    println!("Updating telemetry server dependencies...");
    let report = update_telemetry_deps(&runner, &paths).await?;
    if !report.trim().is_empty() {
      println!("{}", report.trim_end());
    }
    print_success("Telemetry server dependencies successfully updated");

    println!("Building telemetry server...");
    build_telemetry_server(&runner, &paths).await?;
    print_success("Building telemetry server completed successfully");

    Ok(())
  })
}
