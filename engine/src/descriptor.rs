// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Launch descriptor resolution
//!
//! A [`LaunchDescriptor`] is the validated, fully resolved record handed to
//! the supervisor runtime: string-form arguments are split into a flat argv,
//! the environment file is merged in, and relative paths are anchored. The
//! loader itself never spawns anything; spawning, restarts and log-file
//! creation belong to the supervisor.

use crate::args::split_args;
use crate::config::{ArgSpec, DescriptorConfig};
use crate::envfile::parse_environment_file;
use crate::error::{LoadError, Result};
use log::warn;
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

/// Argument flags that name a secondary flag file for the target executable
/// (gunicorn-style `-c` / `--config`). The referenced file must exist at
/// load time.
const CONFIG_FLAGS: &[&str] = &["-c", "--config"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchDescriptor {
    pub name: String,
    pub command: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
    pub env: BTreeMap<String, String>,
    pub stdout_log: Option<PathBuf>,
    pub stderr_log: Option<PathBuf>,
    pub log_timestamp_format: Option<String>,
}

impl LaunchDescriptor {
    /// Validate and resolve one raw descriptor.
    ///
    /// `source_dir` is the directory containing the declarative source; it
    /// anchors a relative (or missing) `working_dir`, which in turn anchors
    /// relative log paths and file references.
    pub fn resolve(name: &str, config: DescriptorConfig, source_dir: &Path) -> Result<Self> {
        if name.is_empty() {
            return Err(LoadError::malformed(
                source_dir.display().to_string(),
                "descriptor name cannot be empty",
            ));
        }
        if name.contains(char::is_whitespace) {
            return Err(LoadError::malformed(
                name,
                "descriptor name cannot contain whitespace",
            ));
        }

        let command = match config.command {
            Some(c) if !c.is_empty() => c,
            Some(_) => return Err(LoadError::malformed(name, "command cannot be empty")),
            None => return Err(LoadError::malformed(name, "missing required field: command")),
        };

        let working_dir = match config.working_dir {
            Some(dir) if !dir.is_empty() => anchor(Path::new(&dir), source_dir),
            Some(_) => {
                return Err(LoadError::malformed(name, "working_dir cannot be empty"));
            }
            None => source_dir.to_path_buf(),
        };

        let args = match config.args {
            Some(ArgSpec::Inline(s)) => {
                split_args(&s).map_err(|reason| LoadError::malformed(name, reason))?
            }
            Some(ArgSpec::List(list)) => list,
            None => Vec::new(),
        };

        // Environment file keys merge beneath inline env keys.
        let mut env = BTreeMap::new();
        if let Some(ref env_file) = config.environment_file {
            let env_path = anchor(Path::new(env_file), &working_dir);
            let vars = parse_environment_file(&env_path).map_err(|_| {
                LoadError::UnresolvedReference {
                    name: name.to_string(),
                    path: env_path.clone(),
                }
            })?;
            env.extend(vars);
        }
        env.extend(config.env);

        check_flag_file_references(name, &args, &working_dir)?;

        let stdout_log = config.stdout_log.map(|p| anchor(Path::new(&p), &working_dir));
        let stderr_log = config.stderr_log.map(|p| anchor(Path::new(&p), &working_dir));

        Ok(Self {
            name: name.to_string(),
            command,
            args,
            working_dir,
            env,
            stdout_log,
            stderr_log,
            log_timestamp_format: config.log_timestamp_format,
        })
    }

    /// The exact argv the supervisor will exec: command followed by args.
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.command.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

/// Resolve `path` against `base` unless it is already absolute.
fn anchor(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        // A leading `./` would survive `Path::join` and show up in the
        // rendered path.
        let cleaned: PathBuf = path
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect();
        base.join(cleaned)
    }
}

/// Verify that every secondary flag file named in `args` exists.
///
/// Whether inline flags and a secondary config file may coexist is an
/// authoring convention, not a contract; both at once gets a warning.
fn check_flag_file_references(name: &str, args: &[String], working_dir: &Path) -> Result<()> {
    // The flag may repeat (the executable picks a winner); every named file
    // must exist regardless.
    let mut referenced: Vec<PathBuf> = Vec::new();
    let mut iter = args.iter().peekable();
    while let Some(arg) = iter.next() {
        let value = if let Some(eq_val) = arg.strip_prefix("--config=") {
            Some(eq_val)
        } else if CONFIG_FLAGS.contains(&arg.as_str()) {
            iter.peek().map(|v| v.as_str())
        } else {
            None
        };

        if let Some(value) = value {
            referenced.push(anchor(Path::new(value), working_dir));
        }
    }

    for path in &referenced {
        if !path.exists() {
            return Err(LoadError::UnresolvedReference {
                name: name.to_string(),
                path: path.clone(),
            });
        }
    }

    if !referenced.is_empty() {
        let has_inline_flags = args
            .iter()
            .any(|a| a.starts_with("--") && !a.starts_with("--config"));
        if has_inline_flags {
            warn!(
                "[{name}] both a secondary config file and inline flags are present; \
                 the executable decides precedence"
            );
        }
    }

    Ok(())
}
