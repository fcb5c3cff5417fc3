//! Shared test helpers for CLI integration tests.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// A `go` stand-in that records how it was called and writes an empty binary.
///
/// Only shell builtins are used, since `PATH` holds nothing but the fake
/// toolchain directory.
pub const RECORDING_GO: &str = r#"#!/bin/sh
printf '%s\n' "$@" > go-args.txt
{
  echo "GOOS=$GOOS"
  echo "GOARCH=$GOARCH"
  echo "GOARM=${GOARM-unset}"
  echo "CGO_ENABLED=$CGO_ENABLED"
} > go-env.txt
: > "$3"
"#;

/// A `go` stand-in that fails like a compile error would.
pub const FAILING_GO: &str = r#"#!/bin/sh
{
  echo "GOOS=$GOOS"
  echo "GOARCH=$GOARCH"
  echo "GOARM=${GOARM-unset}"
  echo "CGO_ENABLED=$CGO_ENABLED"
} > go-env.txt
echo "main.go:12:2: undefined: tracker" >&2
exit 2
"#;

/// Isolated test environment.
///
/// Each test gets a project directory to run in and a separate `bin`
/// directory that is the only entry on `PATH`.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  /// Environment with no `go` on the search path.
  pub fn empty() -> Self {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("bin")).unwrap();
    fs::create_dir(temp.path().join("project")).unwrap();
    fs::write(temp.path().join("project").join("main.go"), "package main\n").unwrap();
    Self { temp }
  }

  /// Environment with the given script installed as `go`.
  pub fn with_go(script: &str) -> Self {
    let env = Self::empty();
    let go = env.bin_dir().join("go");
    fs::write(&go, script).unwrap();
    fs::set_permissions(&go, fs::Permissions::from_mode(0o755)).unwrap();
    env
  }

  pub fn bin_dir(&self) -> PathBuf {
    self.temp.path().join("bin")
  }

  /// Working directory for pibuild.
  pub fn project_dir(&self) -> PathBuf {
    self.temp.path().join("project")
  }

  /// Read a file relative to the project directory.
  pub fn read(&self, relative_path: &str) -> String {
    fs::read_to_string(self.project_dir().join(relative_path))
      .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative_path, e))
  }

  /// pibuild command running in the project directory with an isolated PATH.
  pub fn pibuild(&self) -> Command {
    let mut cmd = cargo_bin_cmd!("pibuild");
    cmd
      .current_dir(self.project_dir())
      .env("PATH", self.bin_dir())
      .env_remove("RUST_LOG")
      .env_remove("GOARM");
    cmd
  }
}
