// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Launch descriptor loader
//!
//! Parses declarative launch sources into validated [`LaunchDescriptor`]
//! records ready to hand to a process supervisor. The supervisor runtime and
//! the application server it starts are external executables; this crate
//! owns only the source → descriptor transform.

pub mod args;
pub mod config;
pub mod descriptor;
pub mod envfile;
mod error;

pub use config::{default_source, load_descriptors, ArgSpec, DescriptorConfig};
pub use descriptor::LaunchDescriptor;
pub use error::{LoadError, Result};
