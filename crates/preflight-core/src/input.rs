//! Loading assembler inputs from snapshot JSON.
//!
//! The platform fetcher (or a CI job) writes one JSON object per validation
//! run, shaped like the matching input record in [`crate::validate`].

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{PreflightError, Result};

/// Parse an input record from JSON text. The top level must be an object.
pub fn parse_input<T: DeserializeOwned>(json: &str) -> Result<T> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_object() {
        return Err(PreflightError::InvalidInput(
            "snapshot must be a JSON object".to_string(),
        ));
    }
    Ok(serde_json::from_value(value)?)
}

/// Read and parse an input record from `path`.
pub fn load_input<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!(path = %path.display(), "loading validation input");
    let json = std::fs::read_to_string(path).map_err(|source| PreflightError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_input(&json)
}
