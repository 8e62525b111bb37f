//! CLI smoke tests for devt.
//!
//! Build commands are exercised against stub `msbuild`/`go` executables
//! placed on PATH; the stubs append their arguments to a log file so tests
//! can assert on the recorded invocation sequence.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn devt_cmd() -> Command {
  cargo_bin_cmd!("devt")
}

/// A throwaway checkout plus a bin directory of stub tools. The stubs are
/// prepended to PATH so the real toolchain is never invoked.
#[cfg(unix)]
struct StubRepo {
  temp: TempDir,
}

#[cfg(unix)]
impl StubRepo {
  fn new() -> Self {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("stubs")).unwrap();
    // The telemetry module directory must exist: the go invocations run
    // with their cwd set inside the checkout.
    std::fs::create_dir_all(temp.path().join("repo/telemetry")).unwrap();
    Self { temp }
  }

  /// Install a stub tool that logs its arguments and prints `output`.
  fn stub_tool(&self, name: &str, output: &str, exit_code: i32) {
    use std::os::unix::fs::PermissionsExt;

    let path = self.temp.path().join("stubs").join(name);
    let script = format!(
      "#!/bin/sh\nprintf '%s %s\\n' \"$(basename \"$0\")\" \"$*\" >> \"$DEVT_TEST_LOG\"\ncat <<'EOF'\n{output}\nEOF\nexit {exit_code}\n"
    );
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
  }

  fn log_path(&self) -> std::path::PathBuf {
    self.temp.path().join("invocations.log")
  }

  fn log(&self) -> String {
    std::fs::read_to_string(self.log_path()).unwrap_or_default()
  }

  fn cmd(&self, subcommand: &str) -> Command {
    let path = format!(
      "{}:{}",
      self.temp.path().join("stubs").display(),
      std::env::var("PATH").unwrap_or_default()
    );
    let mut cmd = devt_cmd();
    cmd
      .arg(subcommand)
      .arg("--repo")
      .arg(self.temp.path().join("repo"))
      .env("PATH", path)
      .env("DEVT_TEST_LOG", self.log_path());
    cmd
  }
}

const MSBUILD_PASS: &str = "Build succeeded.\n    0 Warning(s)\n    0 Error(s)";
const MSBUILD_FAIL: &str = "Build FAILED.\n  Labs.cs(4,2): error XYZ: something broke";

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_works() {
  devt_cmd()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_works() {
  devt_cmd()
    .arg("--version")
    .assert()
    .success()
    .stdout(predicate::str::contains("devt"));
}

#[test]
fn subcommand_help_works() {
  for cmd in &["build-all", "build-engines", "build-labs", "build-telemetry", "info"] {
    devt_cmd()
      .arg(cmd)
      .arg("--help")
      .assert()
      .success()
      .stdout(predicate::str::contains("Usage"));
  }
}

#[test]
fn missing_repo_fails() {
  devt_cmd()
    .arg("build-labs")
    .arg("--repo")
    .arg("/devt/no/such/checkout")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to resolve repo root"));
}

// =============================================================================
// build-labs
// =============================================================================

#[test]
#[cfg(unix)]
fn build_labs_success_message() {
  let repo = StubRepo::new();
  repo.stub_tool("msbuild", MSBUILD_PASS, 0);

  repo
    .cmd("build-labs")
    .assert()
    .success()
    .stdout(predicate::str::contains("Building cli and labs..."))
    .stdout(predicate::str::contains("Building cli and labs completed successfully"));
}

#[test]
#[cfg(unix)]
fn build_labs_failure_prints_report_and_exits_nonzero() {
  let repo = StubRepo::new();
  repo.stub_tool("msbuild", MSBUILD_FAIL, 1);

  repo
    .cmd("build-labs")
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("Build failed"))
    .stderr(predicate::str::contains("error XYZ"));
}

// =============================================================================
// build-engines
// =============================================================================

#[test]
#[cfg(unix)]
fn build_engines_issues_three_builds_in_order() {
  let repo = StubRepo::new();
  repo.stub_tool("msbuild", MSBUILD_PASS, 0);

  repo.cmd("build-engines").assert().success();

  let log = repo.log();
  let lines: Vec<&str> = log.lines().collect();
  assert_eq!(lines.len(), 3, "expected exactly three msbuild invocations:\n{log}");
  assert!(lines[0].contains("Loaders.sln") && lines[0].contains("-p:Configuration=Release"));
  assert!(lines[1].contains("CPythonRuntime.sln") && lines[1].contains("-p:Configuration=ReleasePY37"));
  assert!(lines[2].contains("CPythonRuntime.sln") && lines[2].contains("-p:Configuration=ReleasePY38"));
}

#[test]
#[cfg(unix)]
fn build_engines_stops_at_first_failure() {
  let repo = StubRepo::new();
  repo.stub_tool("msbuild", MSBUILD_FAIL, 1);

  repo.cmd("build-engines").assert().failure().code(1);

  // The first sub-build failed, so the other two never ran.
  assert_eq!(repo.log().lines().count(), 1);
}

// =============================================================================
// build-all
// =============================================================================

#[test]
#[cfg(unix)]
fn build_all_runs_labs_before_engines() {
  let repo = StubRepo::new();
  repo.stub_tool("msbuild", MSBUILD_PASS, 0);

  repo.cmd("build-all").assert().success();

  let log = repo.log();
  let labs_pos = log.find("Labs.sln").expect("labs was built");
  let loaders_pos = log.find("Loaders.sln").expect("engines were built");
  assert!(labs_pos < loaders_pos, "labs must build before engines:\n{log}");
  assert_eq!(log.lines().count(), 4);
}

// =============================================================================
// build-telemetry
// =============================================================================

#[test]
#[cfg(unix)]
fn build_telemetry_succeeds_and_prints_fetch_output() {
  let repo = StubRepo::new();
  repo.stub_tool("go", "go: downloading pkg.re/essentials v1.2.3", 0);

  repo
    .cmd("build-telemetry")
    .assert()
    .success()
    .stdout(predicate::str::contains("Updating telemetry server dependencies..."))
    .stdout(predicate::str::contains("go: downloading pkg.re/essentials"))
    .stdout(predicate::str::contains("Telemetry server dependencies successfully updated"))
    .stdout(predicate::str::contains("Building telemetry server"));
}

#[test]
#[cfg(unix)]
fn build_telemetry_ignores_tool_failure() {
  // The telemetry flow performs no output classification; a failing Go
  // toolchain does not fail the task. Pins the current behavior.
  let repo = StubRepo::new();
  repo.stub_tool("go", "go: error: cannot find module", 1);

  repo.cmd("build-telemetry").assert().success();

  assert_eq!(repo.log().lines().count(), 2, "fetch and compile both ran");
}

// =============================================================================
// info
// =============================================================================

#[test]
#[cfg(unix)]
fn info_reports_missing_tools_without_failing() {
  let repo = StubRepo::new();
  // Only `go` is stubbed; msbuild and git resolve to nothing... unless the
  // host has them, which is fine: info succeeds either way.
  repo.stub_tool("go", "go version go1.22.1 linux/amd64", 0);

  repo
    .cmd("info")
    .assert()
    .success()
    .stdout(predicate::str::contains("Toolchain"))
    .stdout(predicate::str::contains("go version go1.22.1"));
}

#[test]
#[cfg(unix)]
fn info_json_output() {
  let repo = StubRepo::new();
  repo.stub_tool("go", "go version go1.22.1 linux/amd64", 0);

  let assert = repo.cmd("info").arg("--json").assert().success();
  let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
  let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
  assert!(value["toolchain"].as_array().is_some());
  assert!(value["repo"].as_str().is_some());
}
