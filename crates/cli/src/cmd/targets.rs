use anyhow::Result;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use pibuild_lib::configure::CrossEnv;
use pibuild_lib::consts::APP_NAME;
use pibuild_lib::target::Target;

use crate::output::{OutputFormat, print_json, print_stat};

#[derive(Serialize)]
struct TargetInfo {
  choice: &'static str,
  target: Target,
  name: &'static str,
  arch: &'static str,
  env: CrossEnv,
}

impl TargetInfo {
  fn new(target: Target) -> Self {
    Self {
      choice: target.choice(),
      target,
      name: target.label(),
      arch: target.arch_label(),
      env: CrossEnv::for_target(target),
    }
  }
}

pub fn cmd_targets(format: OutputFormat) -> Result<()> {
  let targets: Vec<TargetInfo> = Target::ALL.into_iter().map(TargetInfo::new).collect();

  if format.is_json() {
    return print_json(&targets);
  }

  println!("{} v{} targets:", APP_NAME, env!("CARGO_PKG_VERSION"));
  for info in &targets {
    println!();
    println!(
      "{}) {} ({})",
      info.choice,
      info.name.if_supports_color(Stream::Stdout, |s| s.bold()),
      info.arch
    );
    for (name, value) in info.env.iter() {
      print_stat(name, value);
    }
  }

  Ok(())
}
