//! Integration tests driving the pibuild binary against a fake `go` toolchain.

#![cfg(unix)]

mod build_tests;
mod common;
