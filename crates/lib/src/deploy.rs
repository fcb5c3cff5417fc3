//! Deployment hint printed after a successful build.
//!
//! The hint is text for the operator to copy; nothing here connects to the
//! device.

use std::path::Path;

use serde::Deserialize;

pub const DEFAULT_USER: &str = "erwin";
pub const DEFAULT_HOST: &str = "10.8.0.3";
pub const DEFAULT_PATH: &str = "/home/erwin/";

/// Where the built binary is meant to be copied.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeployConfig {
  pub user: String,
  pub host: String,
  /// Destination directory on the device
  pub path: String,
}

impl Default for DeployConfig {
  fn default() -> Self {
    Self {
      user: DEFAULT_USER.to_string(),
      host: DEFAULT_HOST.to_string(),
      path: DEFAULT_PATH.to_string(),
    }
  }
}

impl DeployConfig {
  /// `scp` command line that copies `binary` to the device.
  pub fn scp_hint(&self, binary: &Path) -> String {
    format!("scp {} {}@{}:{}", binary.display(), self.user, self.host, self.path)
  }
}
