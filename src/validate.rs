//! Schema validation pipeline for the weekly JSON artifact.
//!
//! A strictly linear pipeline: load the schema, load the data, check the
//! schema against the JSON Schema 2020-12 meta-schema, then validate the data
//! document. Any step fails straight to a terminal error; there are no
//! retries and no partial success.
//!
//! The meta-schema pre-check exists to give an actionable message when the
//! schema document itself is broken, instead of a confusing downstream
//! validation failure.

use jsonschema::Draft;
use serde_json::Value;
use std::error::Error;
use tracing::debug;

/// Default data file produced by the aggregator.
pub const DEFAULT_DATA_PATH: &str = "content/scam-of-the-week.json";
/// Default schema document describing the payload shape.
pub const DEFAULT_SCHEMA_PATH: &str = "schema/scam.schema.json";

/// Read and parse a JSON file, naming the path in any failure.
pub fn load_json(path: &str) -> Result<Value, Box<dyn Error>> {
    let text =
        std::fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?;
    let value =
        serde_json::from_str(&text).map_err(|e| format!("{path}: invalid JSON: {e}"))?;
    Ok(value)
}

/// Check that the schema document itself conforms to its meta-schema.
pub fn check_schema(schema: &Value) -> Result<(), Box<dyn Error>> {
    jsonschema::meta::validate(schema)
        .map_err(|e| format!("schema does not conform to the 2020-12 meta-schema: {e}"))?;
    debug!("Schema passed meta-schema check");
    Ok(())
}

/// Validate a data document against the schema, reporting every violation
/// with its instance path.
pub fn validate_document(schema: &Value, data: &Value) -> Result<(), Box<dyn Error>> {
    let validator = jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(schema)
        .map_err(|e| format!("failed to compile schema: {e}"))?;

    let violations: Vec<String> = validator
        .iter_errors(data)
        .map(|e| {
            let path = e.instance_path.to_string();
            let path = if path.is_empty() { "(root)".to_string() } else { path };
            format!("{path}: {e}")
        })
        .collect();

    if violations.is_empty() {
        debug!("Data document conforms to schema");
        Ok(())
    } else {
        Err(format!("validation failed:\n{}", violations.join("\n")).into())
    }
}

/// Run the full pipeline against a data file and a schema file.
pub fn run_validate(data_path: &str, schema_path: &str) -> Result<(), Box<dyn Error>> {
    let schema = load_json(schema_path)?;
    let data = load_json(data_path)?;
    check_schema(&schema)?;
    validate_document(&schema, &data)?;
    Ok(())
}
