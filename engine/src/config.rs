// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Declarative source loading
//!
//! Two source forms are accepted:
//!
//! 1. A single YAML file with a top-level `apps:` list, each entry carrying
//!    an inline `name:` (the ecosystem-file form).
//! 2. A directory of `*.yaml` files, one descriptor per file, the name
//!    derived from the file stem unless the file carries an explicit
//!    `name:`. Files load in filename order.
//!
//! Loading is all-or-nothing: the first hard error aborts the whole load,
//! so a bad descriptor set is never partially applied.

use crate::descriptor::LaunchDescriptor;
use crate::error::{LoadError, Result};
use log::debug;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

const DEFAULT_SOURCE_DIR: &str = "/etc/launchfile/apps.d";

/// Raw descriptor shape as authored. All fields optional at parse time;
/// [`LaunchDescriptor::resolve`] enforces what is actually required so that
/// errors can name the offending descriptor.
///
/// Field aliases accept the PM2-style spellings (`cwd`, `out_file`,
/// `error_file`, `log_date_format`).
#[derive(Debug, Clone, Deserialize)]
pub struct DescriptorConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub args: Option<ArgSpec>,
    #[serde(default, alias = "cwd")]
    pub working_dir: Option<String>,
    #[serde(default)]
    pub env: BTreeMap<String, String>,
    #[serde(default)]
    pub environment_file: Option<String>,
    #[serde(default, alias = "out_file")]
    pub stdout_log: Option<String>,
    #[serde(default, alias = "error_file")]
    pub stderr_log: Option<String>,
    #[serde(default, alias = "log_date_format")]
    pub log_timestamp_format: Option<String>,
}

/// Arguments as authored: either one shell-like string or a YAML list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ArgSpec {
    Inline(String),
    List(Vec<String>),
}

#[derive(Debug, Deserialize)]
struct SourceFile {
    apps: Vec<DescriptorConfig>,
}

/// Determine the default source path: `LAUNCHFILE_CONFIG` environment
/// variable, falling back to `/etc/launchfile/apps.d`.
pub fn default_source() -> PathBuf {
    std::env::var("LAUNCHFILE_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_SOURCE_DIR))
}

/// Load, validate and resolve every descriptor in `path` (file or
/// directory form). Pure apart from reading the source and probing
/// referenced files; nothing is spawned.
pub fn load_descriptors(path: &Path) -> Result<Vec<LaunchDescriptor>> {
    let (raw, source_dir) = if path.is_dir() {
        (collect_from_directory(path)?, path.to_path_buf())
    } else if path.is_file() {
        let parent = match path.parent() {
            Some(p) if p.as_os_str().is_empty() => PathBuf::from("."),
            Some(p) => p.to_path_buf(),
            None => PathBuf::from("."),
        };
        (collect_from_file(path)?, parent)
    } else {
        return Err(LoadError::Source {
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no such file or directory",
            ),
        });
    };

    if raw.is_empty() {
        return Err(LoadError::malformed(
            path.display().to_string(),
            "source defines no descriptors",
        ));
    }

    // Duplicate names always fail, even if a later descriptor is malformed.
    let mut seen = HashSet::new();
    for (name, _) in &raw {
        if !seen.insert(name.clone()) {
            return Err(LoadError::DuplicateName(name.clone()));
        }
    }

    raw.into_iter()
        .map(|(name, config)| LaunchDescriptor::resolve(&name, config, &source_dir))
        .collect()
}

/// Single-file form: top-level `apps:` list, names inline.
fn collect_from_file(path: &Path) -> Result<Vec<(String, DescriptorConfig)>> {
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Source {
        path: path.to_path_buf(),
        source,
    })?;

    let source: SourceFile = serde_yaml::from_str(&contents)
        .map_err(|e| LoadError::malformed(path.display().to_string(), e.to_string()))?;

    source
        .apps
        .into_iter()
        .map(|config| match config.name.clone() {
            Some(name) => Ok((name, config)),
            None => Err(LoadError::malformed(
                path.display().to_string(),
                "every entry in 'apps' must carry a name",
            )),
        })
        .collect()
}

/// Directory form: one YAML file per descriptor, sorted by filename for a
/// deterministic registry order.
fn collect_from_directory(dir: &Path) -> Result<Vec<(String, DescriptorConfig)>> {
    let entries = std::fs::read_dir(dir).map_err(|source| LoadError::Source {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut yaml_files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            let is_yaml = p
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml");
            if !is_yaml {
                debug!("skipping non-YAML file: {}", p.display());
            }
            is_yaml
        })
        .collect();

    yaml_files.sort();

    let mut raw = Vec::new();
    for path in yaml_files {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string();

        let contents = std::fs::read_to_string(&path).map_err(|source| LoadError::Source {
            path: path.clone(),
            source,
        })?;
        let config: DescriptorConfig = serde_yaml::from_str(&contents)
            .map_err(|e| LoadError::malformed(&stem, e.to_string()))?;

        let name = config.name.clone().unwrap_or(stem);
        raw.push((name, config));
    }

    Ok(raw)
}
