//! Shared imports and helpers for the `wiretext` integration tests.
#![allow(
    unused_imports,
    dead_code,
    reason = "each test crate uses a different subset"
)]

pub use assert_cmd::Command;
pub use predicates::prelude::*;
pub use rstest::rstest;
pub use tempfile::tempdir;

#[macro_use]
#[path = "../common/mod.rs"]
mod common;
pub use common::*;

/// The compiled `wiretext` binary, ready for arguments.
pub fn wiretext() -> Command {
    Command::cargo_bin("wiretext").expect("failed to locate the wiretext binary")
}
