//! Optional `pibuild.toml` configuration.
//!
//! Every key has a default, and the defaults reproduce the fixed build: `go
//! build -o build/ip_viber -ldflags "-s -w" main.go` with the lab device as the
//! deployment hint. A missing file in the working directory is not an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::consts::CONFIG_FILENAME;
use crate::deploy::DeployConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("config file not found: {}", path.display())]
  NotFound { path: PathBuf },

  #[error("failed to read config file {}: {source}", path.display())]
  Read { path: PathBuf, source: std::io::Error },

  #[error("invalid config file {}: {source}", path.display())]
  Parse { path: PathBuf, source: toml::de::Error },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  pub build: BuildConfig,
  pub deploy: DeployConfig,
}

/// How `go build` is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
  /// Go toolchain executable; this is also the required tool.
  pub go: String,
  pub entry: String,
  pub output_dir: PathBuf,
  /// File name of the produced binary inside `output_dir`
  pub binary: String,
  pub ldflags: String,
}

impl Default for BuildConfig {
  fn default() -> Self {
    Self {
      go: "go".to_string(),
      entry: "main.go".to_string(),
      output_dir: PathBuf::from("build"),
      binary: "ip_viber".to_string(),
      ldflags: "-s -w".to_string(),
    }
  }
}

impl BuildConfig {
  /// Where the compiled binary ends up.
  pub fn binary_path(&self) -> PathBuf {
    self.output_dir.join(&self.binary)
  }
}

impl Config {
  /// Parse config content. `path` is only used for error messages.
  pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::Parse {
      path: path.to_path_buf(),
      source: e,
    })
  }

  /// Load an explicitly named config file, which must exist.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    if !path.exists() {
      return Err(ConfigError::NotFound {
        path: path.to_path_buf(),
      });
    }

    let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
      path: path.to_path_buf(),
      source: e,
    })?;
    let config = Self::parse(&content, path)?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
  }

  /// Load `pibuild.toml` from `dir` if present, otherwise use the defaults.
  pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);
    if path.is_file() {
      Self::load(&path)
    } else {
      debug!(path = %path.display(), "no config file, using defaults");
      Ok(Self::default())
    }
  }
}
