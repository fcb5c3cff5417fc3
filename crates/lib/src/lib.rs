//! pibuild-lib: Core stages for cross-compiling `ip_viber` for a Raspberry Pi
//!
//! The build runs as a fixed sequence of stages:
//! - `select`: interactive choice of the target board
//! - `requirements`: presence check for the Go toolchain on the search path
//! - `configure`: cross-compile environment and output directory
//! - `compile`: the `go build` invocation
//! - `deploy`: the informational copy-to-device hint
//!
//! [`pipeline::run`] drives them in order; the CLI renders the result.

pub mod compile;
pub mod config;
pub mod configure;
pub mod consts;
pub mod deploy;
pub mod pipeline;
pub mod requirements;
pub mod select;
pub mod target;
