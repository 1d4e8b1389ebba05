// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Environment files
//!
//! A descriptor may point at a `KEY=VALUE` file whose entries seed the
//! launch environment; inline `env` keys are layered on top afterwards.

use std::io;
use std::path::Path;

/// Read the key-value pairs out of an environment file.
///
/// Blank lines and `#` comments are ignored, values may be wrapped in
/// matching single or double quotes, and lines without an `=` are skipped.
pub fn parse_environment_file(path: &Path) -> io::Result<Vec<(String, String)>> {
    let mut vars = Vec::new();
    for line in std::fs::read_to_string(path)?.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
            .unwrap_or(value);
        vars.push((key.trim().to_string(), value.to_string()));
    }
    Ok(vars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs_quotes_and_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("family_run.env");
        std::fs::write(
            &path,
            "# gunicorn service environment\n\
             FLASK_ENV=production\n\
             DATABASE_URL=\"postgres://localhost/family_run\"\n\
             SECRET_KEY='s3cr3t'\n\
             not a pair\n\
             \n\
             WEB_CONCURRENCY = 2\n",
        )
        .unwrap();

        let vars = parse_environment_file(&path).unwrap();
        assert_eq!(
            vars,
            vec![
                ("FLASK_ENV".to_string(), "production".to_string()),
                (
                    "DATABASE_URL".to_string(),
                    "postgres://localhost/family_run".to_string()
                ),
                ("SECRET_KEY".to_string(), "s3cr3t".to_string()),
                ("WEB_CONCURRENCY".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_missing_file() {
        assert!(parse_environment_file(Path::new("/nonexistent/env")).is_err());
    }
}
