//! End-to-end build orchestration.
//!
//! Runs the stages in a fixed order and stops at the first fatal error:
//!
//! ```text
//! select target -> check requirements -> configure -> go build -> report
//! ```
//!
//! Only the target prompt loops. The transcript shown to the operator is
//! written to the supplied writer; rendering of errors and of the final report
//! is left to the caller.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;
use tracing::info;

use crate::compile::{BuildError, GoBuild};
use crate::config::Config;
use crate::configure::{ConfigureError, CrossEnv, configure};
use crate::requirements::{RequirementsError, SearchPath, check_requirements};
use crate::select::{SelectError, select_target};
use crate::target::Target;

#[derive(Debug, Error)]
pub enum PipelineError {
  #[error(transparent)]
  Select(#[from] SelectError),

  #[error(transparent)]
  Requirements(#[from] RequirementsError),

  #[error(transparent)]
  Configure(#[from] ConfigureError),

  #[error(transparent)]
  Build(#[from] BuildError),

  #[error("failed to write output: {0}")]
  Io(#[from] io::Error),
}

/// Options for a pipeline run.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
  /// Stop after configuration: no output directory, no compiler run.
  pub dry_run: bool,
  /// Where required tools are looked up.
  pub search_path: SearchPath,
}

/// Summary of a successful build.
#[derive(Debug, Clone)]
pub struct BuildReport {
  pub target: Target,
  pub binary: PathBuf,
  pub deploy_hint: String,
  pub duration: Duration,
}

#[derive(Debug, Clone)]
pub enum Outcome {
  /// The compiler ran and succeeded.
  Built(BuildReport),
  /// Dry run: the build that would have been run.
  Planned { target: Target, build: GoBuild },
}

/// Run the whole pipeline, prompting on `output` and reading from `input`.
///
/// # Errors
///
/// Returns the first fatal error. A [`PipelineError::Requirements`] error is
/// always returned before the output directory is created or the compiler is
/// started.
pub fn run<R: BufRead, W: Write>(
  config: &Config,
  options: &PipelineOptions,
  input: &mut R,
  output: &mut W,
) -> Result<Outcome, PipelineError> {
  writeln!(output, "Starting cross-compilation for Raspberry Pi...")?;

  let target = select_target(input, output)?;
  info!(target = %target, "selected target");

  let go = config.build.go.as_str();
  let tools = check_requirements(&[go], &options.search_path)?;
  let program = tools.get(go).map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from(go));

  writeln!(
    output,
    "Configuring for {} ({})...",
    target.label(),
    target.arch_label()
  )?;

  let env = if options.dry_run {
    CrossEnv::for_target(target)
  } else {
    configure(target, &config.build.output_dir)?
  };

  let build = GoBuild {
    program,
    entry: config.build.entry.clone(),
    output: config.build.binary_path(),
    ldflags: config.build.ldflags.clone(),
    env,
  };

  if options.dry_run {
    info!(command = %build.command_line(), "dry run, skipping go build");
    return Ok(Outcome::Planned { target, build });
  }

  writeln!(output, "Building binary for Raspberry Pi...")?;
  output.flush()?;

  let built = build.run()?;

  Ok(Outcome::Built(BuildReport {
    target,
    deploy_hint: config.deploy.scp_hint(&built.binary),
    binary: built.binary,
    duration: built.duration,
  }))
}
