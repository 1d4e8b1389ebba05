// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Argument string splitting
//!
//! Sources may give arguments as one shell-like string
//! (`args: "app:app --bind 0.0.0.0:5002 --workers 2"`). The loader splits
//! that form into the flat argv the supervisor will exec. Only whitespace
//! and single/double quotes are interpreted; there is no variable
//! expansion or escaping beyond quote removal.

/// Split a shell-like argument string into individual arguments.
/// Returns an error message on an unterminated quote.
pub fn split_args(input: &str) -> Result<Vec<String>, String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for ch in input.chars() {
        match quote {
            Some(q) => {
                if ch == q {
                    quote = None;
                } else {
                    current.push(ch);
                }
            }
            None => match ch {
                '\'' | '"' => {
                    quote = Some(ch);
                    in_word = true;
                }
                c if c.is_whitespace() => {
                    if in_word {
                        args.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                c => {
                    current.push(c);
                    in_word = true;
                }
            },
        }
    }

    if let Some(q) = quote {
        return Err(format!("unterminated {q} quote in arguments"));
    }
    if in_word {
        args.push(current);
    }

    Ok(args)
}
