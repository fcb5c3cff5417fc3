//! The `go build` invocation.

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::Command;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, info};

use crate::configure::CrossEnv;

#[derive(Debug, Error)]
pub enum BuildError {
  /// The compiler could not be started at all.
  #[error("failed to run {}: {source}", program.display())]
  Spawn { program: PathBuf, source: io::Error },

  /// The compiler ran and reported failure.
  #[error("command `{command}` {}", describe_exit(code))]
  Failed { command: String, code: Option<i32> },
}

fn describe_exit(code: &Option<i32>) -> String {
  match code {
    Some(code) => format!("returned non-zero exit status {}", code),
    None => "was terminated by a signal".to_string(),
  }
}

/// A fully specified `go build` run.
///
/// Equivalent to `go build -o <output> -ldflags "<ldflags>" <entry>` with
/// `env` layered over the inherited environment.
#[derive(Debug, Clone)]
pub struct GoBuild {
  /// Path or name of the `go` executable.
  pub program: PathBuf,
  /// Source entry file.
  pub entry: String,
  /// Where the binary is written.
  pub output: PathBuf,
  /// Linker flags; `-s -w` strips the symbol table and DWARF data.
  pub ldflags: String,
  pub env: CrossEnv,
}

/// Result of a successful build.
#[derive(Debug, Clone)]
pub struct BuildOutput {
  pub binary: PathBuf,
  pub duration: Duration,
}

impl GoBuild {
  pub fn args(&self) -> Vec<OsString> {
    vec![
      "build".into(),
      "-o".into(),
      self.output.clone().into_os_string(),
      "-ldflags".into(),
      self.ldflags.clone().into(),
      self.entry.clone().into(),
    ]
  }

  /// The command with arguments and environment applied. Managed variables
  /// the target leaves unset are removed so they cannot leak in from the
  /// caller's environment.
  pub fn command(&self) -> Command {
    let mut command = Command::new(&self.program);
    command.args(self.args()).envs(self.env.iter());
    for name in self.env.unset() {
      command.env_remove(name);
    }
    command
  }

  /// Shell-style rendering of the command line, for display only.
  pub fn command_line(&self) -> String {
    std::iter::once(self.program.as_os_str().to_owned())
      .chain(self.args())
      .map(|arg| {
        let arg = arg.to_string_lossy().into_owned();
        if arg.contains(char::is_whitespace) {
          format!("\"{}\"", arg)
        } else {
          arg
        }
      })
      .collect::<Vec<_>>()
      .join(" ")
  }

  /// Run the build to completion. Compiler output goes straight to the
  /// inherited stdout and stderr.
  ///
  /// # Errors
  ///
  /// Returns [`BuildError::Spawn`] if the compiler cannot be started and
  /// [`BuildError::Failed`] if it exits unsuccessfully.
  pub fn run(&self) -> Result<BuildOutput, BuildError> {
    let command_line = self.command_line();
    info!(command = %command_line, "running go build");
    for (name, value) in self.env.iter() {
      debug!(name, value, "child environment");
    }

    let start = Instant::now();
    let status = self.command().status().map_err(|e| BuildError::Spawn {
      program: self.program.clone(),
      source: e,
    })?;
    let duration = start.elapsed();

    if !status.success() {
      debug!(code = ?status.code(), "go build failed");
      return Err(BuildError::Failed {
        command: command_line,
        code: status.code(),
      });
    }

    info!(binary = %self.output.display(), elapsed_ms = duration.as_millis() as u64, "go build finished");
    Ok(BuildOutput {
      binary: self.output.clone(),
      duration,
    })
  }
}
