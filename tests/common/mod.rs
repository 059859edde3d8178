//! Common test infrastructure for okscale integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]

pub mod fixtures;

use std::path::Path;
use std::process::{Command, Output};

/// Run the built `okscale` binary with `args`.
pub fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_okscale"))
        .args(args)
        .env("RUST_LOG", "okscale=warn")
        .output()
        .expect("failed to spawn okscale")
}

/// Run with `--config <path>` followed by `args`.
pub fn run_with_config(config: &Path, args: &[&str]) -> Output {
    let config = config.to_str().expect("temp path is not UTF-8");
    let mut all = vec!["--config", config];
    all.extend_from_slice(args);
    run(&all)
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Parse stdout as JSON, with the process output in the panic message.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not JSON ({e}):\n{}\nstderr:\n{}",
            stdout(output),
            stderr(output)
        )
    })
}

pub fn assert_exit(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "unexpected exit status\nstdout:\n{}\nstderr:\n{}",
        stdout(output),
        stderr(output)
    );
}
