//! Implementation of the `pibuild build` command.
//!
//! Runs the interactive pipeline on stdin/stdout and renders the outcome.
//! Missing tools and compiler failures are reported here and turned into a
//! failing exit code; other errors propagate to `main`.

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use owo_colors::{OwoColorize, Stream};
use tracing::debug;

use pibuild_lib::compile::GoBuild;
use pibuild_lib::config::Config;
use pibuild_lib::pipeline::{self, BuildReport, Outcome, PipelineError, PipelineOptions};
use pibuild_lib::requirements::RequirementsError;

use crate::output::{format_duration, print_error, print_info, print_stat, print_success, symbols};

/// Execute the build command.
///
/// # Errors
///
/// Returns an error for failures other than a missing tool or a failed build,
/// such as closed input or an unwritable output directory.
pub fn cmd_build(config: &Config, dry_run: bool) -> Result<ExitCode> {
  debug!(?config, dry_run, "starting build");

  let options = PipelineOptions {
    dry_run,
    ..Default::default()
  };

  let result = {
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    pipeline::run(config, &options, &mut input, &mut output)
  };

  match result {
    Ok(Outcome::Built(report)) => {
      print_report(&report);
      Ok(ExitCode::SUCCESS)
    }
    Ok(Outcome::Planned { build, .. }) => {
      print_plan(&build);
      Ok(ExitCode::SUCCESS)
    }
    Err(PipelineError::Requirements(err)) => {
      print_missing_tools(&err);
      Ok(ExitCode::FAILURE)
    }
    Err(PipelineError::Build(err)) => {
      print_error(&format!("Build failed with error: {}", err));
      Ok(ExitCode::FAILURE)
    }
    Err(err) => Err(err.into()),
  }
}

fn print_report(report: &BuildReport) {
  print_success("Build successful!");
  print_stat("Duration", &format_duration(report.duration));
  println!();
  println!("Binary location: {}", report.binary.display());
  println!();
  println!("To deploy to Raspberry Pi:");
  println!("  {}", report.deploy_hint);
}

fn print_plan(build: &GoBuild) {
  print_info(&format!(
    "{}",
    "Dry run - nothing was built".if_supports_color(Stream::Stdout, |s| s.yellow())
  ));
  println!();
  println!("Environment:");
  for (name, value) in build.env.iter() {
    print_stat(name, value);
  }
  for name in build.env.unset() {
    print_stat(name, "(unset)");
  }
  println!();
  println!("Command:");
  println!(
    "  {} {}",
    symbols::ARROW.if_supports_color(Stream::Stdout, |s| s.cyan()),
    build.command_line()
  );
}

fn print_missing_tools(err: &RequirementsError) {
  print_error("Error: Missing required tools:");
  for tool in err.missing() {
    eprintln!("  - {}", tool);
  }
  eprintln!();
  eprintln!("Please install the missing tools:");
  eprintln!("  {}", err.install_hint());
}
