//! Validator entry point: the quality gate run after aggregation.
//!
//! Usage: `validate_schema [data_path] [schema_path]`. On success prints
//! exactly `Schema validation: OK` and exits 0; any failure (missing file,
//! invalid JSON, schema failing its meta-schema, data violating the schema)
//! prints a diagnostic to stderr and exits non-zero.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt as tfmt};

use scamwatch::cli::ValidateArgs;
use scamwatch::validate::run_validate;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = ValidateArgs::parse();

    if let Err(e) = run_validate(&args.data_path, &args.schema_path) {
        eprintln!("{e}");
        std::process::exit(1);
    }
    println!("Schema validation: OK");
}
