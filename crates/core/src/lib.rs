//! devt-core: build task logic for the devt CLI
//!
//! This crate provides the pieces the `devt` binary composes into build
//! tasks:
//! - `process`: one-shot external command invocation with captured output
//! - `msbuild`: pass/fail classification of msbuild output
//! - `paths`: resolution of target description paths inside a checkout
//! - `tasks`: the build target definitions and their execution
//! - `toolchain`: availability probing for the required external tools

pub mod error;
pub mod msbuild;
pub mod paths;
pub mod process;
pub mod tasks;
pub mod toolchain;

pub use error::BuildError;
pub use msbuild::{BuildReport, classify_output};
pub use paths::RepoPaths;
pub use process::{CommandRunner, Invocation, SystemRunner};
pub use tasks::BuildTarget;
