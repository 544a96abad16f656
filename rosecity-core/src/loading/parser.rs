use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::Error;

/// One untyped record from a zone data file. Field types are checked during
/// normalization, not here: a record survives parsing as long as the file's
/// top level is an array of objects.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub id: Value,
    pub street_name: Value,
    pub connection_type: Value,
    pub coordinates: Value,
}

/// Parse one source's bytes into raw records.
///
/// # Errors
///
/// `Error::ParseError` if the bytes are not a JSON array of objects.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<RawRecord>, Error> {
    serde_json::from_slice(bytes).map_err(|e| Error::ParseError(e.to_string()))
}

/// Read and parse one source file.
///
/// # Errors
///
/// `Error::IoError` if the file cannot be read, `Error::ParseError` if its
/// top-level shape is malformed.
pub fn read_source(path: &Path) -> Result<Vec<RawRecord>, Error> {
    let bytes = fs::read(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to read '{}': {e}", path.display()),
        )
    })?;
    parse_records(&bytes)
}
