//! Schema document loading.
//!
//! RDL schemas are interchanged as JSON documents. Loading is a plain
//! serde deserialization; structural validation beyond the document
//! shape is the schema checker's job and happens upstream.

use crate::error::SchemaError;
use crate::types::Schema;
use std::path::Path;

/// Parses a schema from a JSON string.
///
/// # Errors
/// Returns `SchemaError::Json` if the document does not deserialize.
pub fn parse_schema(json: &str) -> Result<Schema, SchemaError> {
    Ok(serde_json::from_str(json)?)
}

/// Parses a schema from a JSON file.
///
/// # Errors
/// Returns `SchemaError` if reading or deserializing fails.
pub fn parse_schema_file(path: &Path) -> Result<Schema, SchemaError> {
    let json = std::fs::read_to_string(path)?;
    parse_schema(&json)
}
