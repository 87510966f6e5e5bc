//! Core utilities and types for the Hylo integer generator.
//!
//! This crate provides the error type, the `intgen.toml` configuration and
//! the atomic file output shared by the engine and the command line.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;
mod types;

pub use config::{CONFIG_FILE, Config, GenerateConfig, HYLO_INTEGERS_DIR};
pub use error::{Error, Result};
pub use file::{GeneratedFile, ensure_directory};
pub use types::Selection;
