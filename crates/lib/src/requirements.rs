//! Presence check for external build tools.
//!
//! Every required tool is looked up on the executable search path before any
//! build work starts. All missing tools are collected so the operator sees the
//! complete list at once.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::consts::INSTALL_HINT;

#[derive(Debug, Error)]
pub enum RequirementsError {
  #[error("missing required tools: {}", missing.join(", "))]
  Missing { missing: Vec<String> },
}

impl RequirementsError {
  /// Names of the tools that could not be found, in the order they were checked.
  pub fn missing(&self) -> &[String] {
    match self {
      Self::Missing { missing } => missing,
    }
  }

  /// Remediation shown after the list of missing tools.
  pub fn install_hint(&self) -> &'static str {
    INSTALL_HINT
  }
}

/// Where tools are looked up.
#[derive(Debug, Clone, Default)]
pub enum SearchPath {
  /// The `PATH` of the current process.
  #[default]
  Inherit,
  /// An explicit `PATH`-style list of directories.
  Explicit(OsString),
}

/// Tools that were found, with the path each one resolved to.
#[derive(Debug, Clone, Default)]
pub struct ResolvedTools {
  tools: Vec<(String, PathBuf)>,
}

impl ResolvedTools {
  /// Resolved path for a tool that was part of the check.
  pub fn get(&self, name: &str) -> Option<&Path> {
    self
      .tools
      .iter()
      .find(|(tool, _)| tool == name)
      .map(|(_, path)| path.as_path())
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
    self.tools.iter().map(|(name, path)| (name.as_str(), path.as_path()))
  }
}

/// Resolve a single tool name against the search path.
pub fn find_tool(name: &str, search: &SearchPath) -> Option<PathBuf> {
  let found = match search {
    SearchPath::Inherit => which::which(name),
    SearchPath::Explicit(paths) => {
      let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
      which::which_in(name, Some(paths), cwd)
    }
  };
  found.ok()
}

/// Check that every tool in `tools` is on the search path.
///
/// # Errors
///
/// Returns [`RequirementsError::Missing`] listing every tool that was not found.
pub fn check_requirements(tools: &[&str], search: &SearchPath) -> Result<ResolvedTools, RequirementsError> {
  let mut resolved = ResolvedTools::default();
  let mut missing = Vec::new();

  for tool in tools {
    match find_tool(tool, search) {
      Some(path) => {
        debug!(tool, path = %path.display(), "found required tool");
        resolved.tools.push((tool.to_string(), path));
      }
      None => {
        debug!(tool, "required tool not found");
        missing.push(tool.to_string());
      }
    }
  }

  if missing.is_empty() {
    Ok(resolved)
  } else {
    Err(RequirementsError::Missing { missing })
  }
}
