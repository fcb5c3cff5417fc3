mod cmd;
mod output;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pibuild_lib::config::Config;

use crate::output::OutputFormat;

/// pibuild - Cross-compile ip_viber for a Raspberry Pi
#[derive(Parser)]
#[command(name = "pibuild")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Path to a config file (default: ./pibuild.toml if present)
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,

  /// Defaults to `build` when omitted
  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Select a Raspberry Pi version and cross-compile for it
  Build {
    /// Show the go build command and environment without running it
    #[arg(long)]
    dry_run: bool,
  },

  /// List supported targets and the environment each one uses
  Targets {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
  },
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  match run(cli) {
    Ok(code) => code,
    Err(e) => {
      output::print_error(&format!("{:#}", e));
      ExitCode::FAILURE
    }
  }
}

fn run(cli: Cli) -> Result<ExitCode> {
  match cli.command.unwrap_or(Commands::Build { dry_run: false }) {
    Commands::Build { dry_run } => {
      let config = load_config(cli.config.as_deref())?;
      cmd::cmd_build(&config, dry_run)
    }
    Commands::Targets { format } => {
      cmd::cmd_targets(format)?;
      Ok(ExitCode::SUCCESS)
    }
  }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
  match path {
    Some(path) => Config::load(path).context("Failed to load config"),
    None => Config::discover(Path::new(".")).context("Failed to load config"),
  }
}

fn init_tracing(verbose: bool) {
  let default_level = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}
