// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

mod formatters;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use lf_engine::{default_source, load_descriptors};
use std::path::PathBuf;

/// Validate and inspect supervisor launch descriptors.
#[derive(Parser)]
#[command(name = "launchfile", version)]
struct Cli {
    /// Log more (repeat for debug output)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate a source; exit nonzero on any authoring error
    Check {
        /// Source file or directory (defaults to LAUNCHFILE_CONFIG)
        path: Option<PathBuf>,
    },
    /// List the descriptors a source defines
    List {
        path: Option<PathBuf>,
    },
    /// Show the fully resolved record for one descriptor
    Show {
        /// Descriptor name
        name: String,
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::Level::Warn,
        1 => log::Level::Info,
        _ => log::Level::Debug,
    };
    simple_logger::init_with_level(level)?;

    let source = |path: Option<PathBuf>| path.unwrap_or_else(default_source);

    match cli.command {
        Commands::Check { path } => {
            let path = source(path);
            let descriptors = load_descriptors(&path)?;
            println!(
                "{} {} descriptor(s) in {}",
                "ok:".green(),
                descriptors.len(),
                path.display()
            );
        }
        Commands::List { path } => {
            let descriptors = load_descriptors(&source(path))?;
            print!("{}", formatters::render_table(&descriptors));
        }
        Commands::Show { name, path } => {
            let path = source(path);
            let descriptors = load_descriptors(&path)?;
            match descriptors.iter().find(|d| d.name == name) {
                Some(d) => print!("{}", formatters::render_descriptor(d)),
                None => bail!("no descriptor named '{}' in {}", name, path.display()),
            }
        }
    }

    Ok(())
}
