//! Pass/fail classification of msbuild output.
//!
//! msbuild reports its verdict in text: a `Build succeeded.` marker on
//! success, and `error CSnnnn:`-style diagnostics (each repeated once more
//! in the end-of-build summary) on failure. This module reduces that text to
//! a [`BuildReport`] the task runner can act on.

/// Classifier verdict for one build invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
  pub passed: bool,
  /// Human-readable diagnostic summary. Empty on a clean pass.
  pub report: String,
}

const SUCCESS_MARKER: &str = "Build succeeded.";

/// Classify captured msbuild output.
///
/// The build passes only when the success marker is present and no error
/// diagnostics were extracted. On failure the report is the deduplicated
/// list of error lines; if the output failed without any recognizable
/// diagnostic (e.g. the solution file was not found), the full trimmed
/// output is the report.
pub fn classify_output(output: &str) -> BuildReport {
  let mut diagnostics: Vec<&str> = Vec::new();
  for line in output.lines() {
    let line = line.trim();
    if is_error_line(line) && !diagnostics.contains(&line) {
      diagnostics.push(line);
    }
  }

  let passed = output.contains(SUCCESS_MARKER) && diagnostics.is_empty();

  let report = if passed {
    String::new()
  } else if diagnostics.is_empty() {
    output.trim().to_string()
  } else {
    diagnostics.join("\n")
  };

  BuildReport { passed, report }
}

/// Recognize msbuild error diagnostics, both compiler diagnostics
/// (`Foo.cs(3,1): error CS1002: ...`) and build system ones
/// (`error MSB1009: ...`). Warnings are not errors.
fn is_error_line(line: &str) -> bool {
  line.contains(": error ") || line.contains(": fatal error ") || line.starts_with("error ")
}
