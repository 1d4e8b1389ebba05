// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Shared test utilities for E2E tests
//!
//! Tests drive the built `launchfile` binary directly. The binary path can
//! be overridden via the LF_CLI_BINARY environment variable.

use std::path::Path;
use std::process::Command;

/// Get the CLI binary path (debug build by default, for faster iteration).
pub fn get_cli_binary() -> &'static str {
    if let Ok(binary) = std::env::var("LF_CLI_BINARY") {
        // Leak the string to get a 'static reference; acceptable in tests.
        Box::leak(binary.into_boxed_str())
    } else {
        "../target/debug/launchfile"
    }
}

/// Run the CLI with the given arguments.
/// Returns (stdout, stderr, exit code).
pub fn run_cli(args: &[&str]) -> (String, String, i32) {
    run_cli_with_env(args, &[])
}

/// Run the CLI with extra environment variables set.
pub fn run_cli_with_env(args: &[&str], env: &[(&str, &str)]) -> (String, String, i32) {
    let mut cmd = Command::new(get_cli_binary());
    cmd.args(args);
    for (k, v) in env {
        cmd.env(k, v);
    }
    let output = cmd.output().expect("failed to run launchfile binary");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

/// Write a single-file ecosystem source with one gunicorn-style app and
/// return its path.
pub fn write_ecosystem_fixture(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("apps.yaml");
    std::fs::write(
        &path,
        r#"
apps:
  - name: family-run
    cwd: /opt/family_run
    command: ./venv/bin/gunicorn
    args: app:app --bind 0.0.0.0:5002 --workers 2 --timeout 120
    env:
      FLASK_ENV: production
    out_file: ./logs/out.log
    error_file: ./logs/error.log
    log_date_format: YYYY-MM-DD HH:mm:ss Z
"#,
    )
    .expect("failed to write fixture");
    path
}
