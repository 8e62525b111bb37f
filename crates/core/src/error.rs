//! Error types for devt-core

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while running build tasks.
#[derive(Debug, Error)]
pub enum BuildError {
  /// The external tool could not be launched at all (not installed, not on
  /// PATH, or the working directory is missing).
  #[error("failed to launch '{program}': {source}")]
  Spawn {
    program: String,
    #[source]
    source: std::io::Error,
  },

  /// The classifier determined the external build did not pass.
  ///
  /// `report` holds the human-readable diagnostic summary extracted from
  /// the tool output; it may be empty when the output carried no
  /// recognizable diagnostics.
  #[error("build failed for {name}")]
  BuildFailed { name: String, report: String },

  /// A target description path could not be resolved to an absolute path.
  #[error("cannot resolve path '{path}': {source}")]
  Resolve {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}
