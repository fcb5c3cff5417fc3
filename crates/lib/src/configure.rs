//! Cross-compile environment for the Go toolchain.
//!
//! The environment is derived from the selected target and handed to the
//! child process explicitly; the environment of this process is never touched.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::target::Target;

pub const GOOS: &str = "GOOS";
pub const GOARCH: &str = "GOARCH";
pub const GOARM: &str = "GOARM";
pub const CGO_ENABLED: &str = "CGO_ENABLED";

/// Every variable this module may set. Variables in this list that a target
/// leaves unset are removed from the child's inherited environment.
pub const MANAGED_VARS: &[&str] = &[GOOS, GOARCH, GOARM, CGO_ENABLED];

#[derive(Debug, Error)]
pub enum ConfigureError {
  #[error("failed to create output directory {}: {source}", path.display())]
  CreateDir { path: PathBuf, source: std::io::Error },
}

/// Environment variables applied to the `go build` child process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CrossEnv(BTreeMap<String, String>);

impl CrossEnv {
  /// Derive the environment for a target.
  ///
  /// | Target | GOOS  | GOARCH | GOARM | CGO_ENABLED |
  /// |--------|-------|--------|-------|-------------|
  /// | Pi3    | linux | arm64  |       | 0           |
  /// | Pi4    | linux | arm    | 7     | 0           |
  pub fn for_target(target: Target) -> Self {
    let mut vars = BTreeMap::new();
    vars.insert(GOOS.to_string(), "linux".to_string());
    vars.insert(GOARCH.to_string(), target.goarch().to_string());
    if let Some(goarm) = target.goarm() {
      vars.insert(GOARM.to_string(), goarm.to_string());
    }
    vars.insert(CGO_ENABLED.to_string(), "0".to_string());
    Self(vars)
  }

  pub fn get(&self, name: &str) -> Option<&str> {
    self.0.get(name).map(String::as_str)
  }

  /// Variables in name order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }

  /// Managed variables this environment leaves unset.
  pub fn unset(&self) -> impl Iterator<Item = &'static str> + '_ {
    MANAGED_VARS.iter().copied().filter(|name| !self.0.contains_key(*name))
  }
}

/// Create `dir` if it does not exist yet. Existing contents are left alone.
pub fn ensure_output_dir(dir: &Path) -> Result<(), ConfigureError> {
  if dir.is_dir() {
    debug!(dir = %dir.display(), "output directory already exists");
    return Ok(());
  }

  fs::create_dir_all(dir).map_err(|e| ConfigureError::CreateDir {
    path: dir.to_path_buf(),
    source: e,
  })?;
  debug!(dir = %dir.display(), "created output directory");
  Ok(())
}

/// Derive the cross-compile environment for `target` and make sure
/// `output_dir` exists.
pub fn configure(target: Target, output_dir: &Path) -> Result<CrossEnv, ConfigureError> {
  let env = CrossEnv::for_target(target);
  info!(target = %target, vars = env.iter().count(), "configured cross-compile environment");
  ensure_output_dir(output_dir)?;
  Ok(env)
}
