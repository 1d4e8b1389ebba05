// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Output formatting utilities

use colored::Colorize;
use lf_engine::LaunchDescriptor;
use std::io::Write;
use tabwriter::TabWriter;

/// Render descriptors as an aligned table, one row per descriptor.
pub fn render_table(descriptors: &[LaunchDescriptor]) -> String {
    let mut tw = TabWriter::new(Vec::new());
    writeln!(tw, "NAME\tCOMMAND\tARGS\tWORKING DIR").expect("write to buffer");
    for d in descriptors {
        writeln!(
            tw,
            "{}\t{}\t{}\t{}",
            d.name,
            d.command,
            d.args.len(),
            d.working_dir.display()
        )
        .expect("write to buffer");
    }
    tw.flush().expect("flush buffer");
    String::from_utf8(tw.into_inner().expect("table buffer")).expect("table is UTF-8")
}

/// Render the full resolved record for one descriptor, including the exact
/// argv the supervisor would exec.
pub fn render_descriptor(d: &LaunchDescriptor) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", "name:".bold(), d.name));
    out.push_str(&format!("{} {}\n", "working_dir:".bold(), d.working_dir.display()));
    out.push_str(&format!("{} {}\n", "argv:".bold(), d.argv().join(" ")));

    if !d.env.is_empty() {
        out.push_str(&format!("{}\n", "env:".bold()));
        for (k, v) in &d.env {
            out.push_str(&format!("  {k}={v}\n"));
        }
    }
    if let Some(ref path) = d.stdout_log {
        out.push_str(&format!("{} {}\n", "stdout_log:".bold(), path.display()));
    }
    if let Some(ref path) = d.stderr_log {
        out.push_str(&format!("{} {}\n", "stderr_log:".bold(), path.display()));
    }
    if let Some(ref fmt) = d.log_timestamp_format {
        out.push_str(&format!("{} {}\n", "log_timestamp_format:".bold(), fmt));
    }
    out
}
