//! Contact payload files.
//!
//! A payload is a [`ContactForm`] serialized with the form's field names
//! (`firstName`, `lastName`, ...). Files ending in `.json` are read as JSON;
//! everything else as TOML. Missing fields default to empty.

use std::path::Path;

use vortex_core::VortexError;
use vortex_forms::ContactForm;

/// Parses a payload from JSON text.
pub fn from_json_str(json: &str) -> Result<ContactForm, VortexError> {
    serde_json::from_str(json)
        .map_err(|e| VortexError::SerializationError(format!("Invalid JSON payload: {e}")))
}

/// Parses a payload from TOML text.
pub fn from_toml_str(toml_str: &str) -> Result<ContactForm, VortexError> {
    toml::from_str(toml_str)
        .map_err(|e| VortexError::SerializationError(format!("Invalid TOML payload: {e}")))
}

/// Loads a payload file, picking the format from its extension.
pub fn load(path: impl AsRef<Path>) -> Result<ContactForm, VortexError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        from_json_str(&content)
    } else {
        from_toml_str(&content)
    }
}
