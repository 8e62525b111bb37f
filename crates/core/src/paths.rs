//! Target description paths inside a product checkout.
//!
//! All build tasks are defined relative to the repository root; external
//! tools are always handed absolute paths so they behave the same no matter
//! which directory `devt` was started from.

use std::path::{Path, PathBuf};

use crate::error::BuildError;

/// Path to the labs (CLI + libraries) solution, relative to the repo root.
const LABS_SOLUTION: &str = "labs/Labs.sln";

/// Solution for the ironpython loader engines.
const LOADERS_SOLUTION: &str = "engines/Loaders.sln";

/// Solution for the cpython runtime engines; built once per supported
/// python version, selected via the msbuild configuration name.
const RUNTIME_SOLUTION: &str = "engines/CPythonRuntime.sln";

/// Go module directory of the telemetry server.
const TELEMETRY_DIR: &str = "telemetry";

/// Entry package compiled into the telemetry server binary.
const TELEMETRY_SERVER_PKG: &str = "telemetry/server";

/// Output path for the compiled telemetry server (exe suffix applied).
const TELEMETRY_BIN: &str = "bin/telemetry-server";

/// Absolute paths to every target description in a checkout.
#[derive(Debug, Clone)]
pub struct RepoPaths {
  root: PathBuf,
}

impl RepoPaths {
  /// Resolve `root` to an absolute path. The root must exist; the target
  /// paths under it are not checked here — a missing solution surfaces as a
  /// build tool error, which is the tool's report to make.
  pub fn discover(root: &Path) -> Result<Self, BuildError> {
    let root = dunce::canonicalize(root).map_err(|source| BuildError::Resolve {
      path: root.to_path_buf(),
      source,
    })?;
    Ok(Self { root })
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  pub fn labs_solution(&self) -> PathBuf {
    self.root.join(LABS_SOLUTION)
  }

  pub fn loaders_solution(&self) -> PathBuf {
    self.root.join(LOADERS_SOLUTION)
  }

  pub fn runtime_solution(&self) -> PathBuf {
    self.root.join(RUNTIME_SOLUTION)
  }

  pub fn telemetry_dir(&self) -> PathBuf {
    self.root.join(TELEMETRY_DIR)
  }

  pub fn telemetry_server_pkg(&self) -> PathBuf {
    self.root.join(TELEMETRY_SERVER_PKG)
  }

  pub fn telemetry_bin(&self) -> PathBuf {
    let mut bin = self.root.join(TELEMETRY_BIN);
    if !std::env::consts::EXE_SUFFIX.is_empty() {
      bin.set_extension(std::env::consts::EXE_SUFFIX.trim_start_matches('.'));
    }
    bin
  }
}
