//! devt - build task runner for the product developer tree.
//!
//! Each subcommand is a named build task that shells out to the external
//! toolchain (msbuild for the .NET solutions, the Go toolchain for the
//! telemetry server) and aborts the whole run on the first hard failure.

mod cmd;
mod output;

use clap::{Parser, Subcommand};
use devt_core::BuildError;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "devt")]
#[command(author, version, about = "Build tasks for the labs developer tree", long_about = None)]
struct Cli {
  /// Path to the product checkout to build
  #[arg(long, global = true, default_value = ".")]
  repo: String,

  /// Enable verbose (debug) logging
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Build everything: labs first, then the engines
  BuildAll,

  /// Build the script engines (ironpython loaders and cpython runtimes)
  BuildEngines,

  /// Build the CLI and labs libraries
  BuildLabs,

  /// Fetch dependencies for and compile the telemetry server
  BuildTelemetry,

  /// Show toolchain availability and resolved paths
  Info {
    /// Emit machine-readable JSON
    #[arg(long)]
    json: bool,
  },
}

fn main() {
  let cli = Cli::parse();

  let default_filter = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
    .without_time()
    .init();

  let result = match cli.command {
    Commands::BuildAll => cmd::cmd_build_all(&cli.repo),
    Commands::BuildEngines => cmd::cmd_build_engines(&cli.repo),
    Commands::BuildLabs => cmd::cmd_build_labs(&cli.repo),
    Commands::BuildTelemetry => cmd::cmd_build_telemetry(&cli.repo),
    Commands::Info { json } => cmd::cmd_info(&cli.repo, json),
  };

  if let Err(err) = result {
    match err.downcast_ref::<BuildError>() {
      Some(BuildError::BuildFailed { report, .. }) => {
        output::print_error("Build failed");
        if !report.is_empty() {
          eprintln!("{report}");
        }
      }
      _ => output::print_error(&format!("{err:#}")),
    }
    std::process::exit(1);
  }
}
