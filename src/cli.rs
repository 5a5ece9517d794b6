//! Command-line interface definitions for both binaries.
//!
//! Argument structs are defined with the `clap` derive API. The aggregator
//! takes only the output directory (defaulting to `content`); the validator
//! takes two optional positional paths mirroring the traditional
//! `validate_schema [data_path] [schema_path]` invocation.

use clap::Parser;

use crate::validate::{DEFAULT_DATA_PATH, DEFAULT_SCHEMA_PATH};

/// Arguments for the `build_scam_week` aggregator.
#[derive(Parser, Debug)]
#[command(author, version, about = "Build the scam-of-the-week JSON artifact from agency feeds")]
pub struct BuildArgs {
    /// Output directory for the generated JSON files
    #[arg(short, long, default_value = "content")]
    pub out_dir: String,
}

/// Arguments for the `validate_schema` quality gate.
#[derive(Parser, Debug)]
#[command(author, version, about = "Validate the weekly JSON artifact against its schema")]
pub struct ValidateArgs {
    /// Path to the JSON data document
    #[arg(default_value = DEFAULT_DATA_PATH)]
    pub data_path: String,

    /// Path to the JSON Schema (draft 2020-12)
    #[arg(default_value = DEFAULT_SCHEMA_PATH)]
    pub schema_path: String,
}
