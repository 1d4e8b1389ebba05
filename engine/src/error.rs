// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Load-time errors
//! All variants indicate an authoring mistake, not a transient condition.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// Required fields are missing or of the wrong shape. `name` is the
    /// descriptor name when known, otherwise the source path.
    #[error("malformed descriptor '{name}': {reason}")]
    MalformedDescriptor { name: String, reason: String },

    #[error("duplicate descriptor name '{0}'")]
    DuplicateName(String),

    /// An argument or `environment_file` references a file that cannot
    /// be located.
    #[error("descriptor '{name}' references '{}' which cannot be located", .path.display())]
    UnresolvedReference { name: String, path: PathBuf },

    #[error("failed to read source '{}': {source}", .path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    pub(crate) fn malformed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedDescriptor {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;
