//! Settings loading from configuration files.
//!
//! This module provides functions to load [`Settings`] from TOML files, JSON
//! files, and to apply environment variable overrides.
//!
//! ## Loading Order
//!
//! 1. Start with default settings.
//! 2. Load from a TOML or JSON file (deep-merged over the defaults).
//! 3. Apply environment variable overrides (highest priority).
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `VORTEX_DEBUG` | `debug` |
//! | `VORTEX_LOG_LEVEL` | `log_level` |
//! | `VORTEX_DEBOUNCE_MS` | `form.debounce_ms` |
//! | `VORTEX_MESSAGE_MAX_LENGTH` | `form.message_max_length` |
//! | `VORTEX_LOADING_LABEL` | `form.loading_label` |
//! | `VORTEX_TRANSPORT_LATENCY_MS` | `transport.latency_ms` |
//! | `VORTEX_TRANSPORT_FAILURE_RATE` | `transport.failure_rate` |
//!
//! ## Examples
//!
//! ```rust,no_run
//! use vortex_core::settings_loader;
//!
//! let settings = settings_loader::from_file_with_env("vortex.toml").unwrap();
//! ```

use std::path::Path;

use crate::error::VortexError;
use crate::settings::Settings;

/// Loads settings from a TOML string.
///
/// Any fields not present in the TOML keep their default values, including
/// fields of nested tables.
///
/// # Errors
///
/// Returns an error if the TOML is malformed or cannot be deserialized.
pub fn from_toml_str(toml_str: &str) -> Result<Settings, VortexError> {
    let toml_value: toml::Value = toml::from_str(toml_str)
        .map_err(|e| VortexError::ConfigurationError(format!("Failed to parse TOML: {e}")))?;

    merge_over_defaults(toml_to_json(toml_value), "TOML")
}

/// Loads settings from a JSON string.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or cannot be deserialized.
pub fn from_json_str(json_str: &str) -> Result<Settings, VortexError> {
    let json_value: serde_json::Value = serde_json::from_str(json_str)
        .map_err(|e| VortexError::ConfigurationError(format!("Failed to parse JSON: {e}")))?;

    merge_over_defaults(json_value, "JSON")
}

/// Loads settings from a file, picking the format from its extension.
///
/// Files ending in `.json` are parsed as JSON; everything else as TOML.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is malformed.
pub fn from_file(path: impl AsRef<Path>) -> Result<Settings, VortexError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        VortexError::ConfigurationError(format!(
            "Failed to read settings file '{}': {e}",
            path.display()
        ))
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        from_json_str(&content)
    } else {
        from_toml_str(&content)
    }
}

/// Loads settings from a file and then applies environment variable overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is malformed.
pub fn from_file_with_env(path: impl AsRef<Path>) -> Result<Settings, VortexError> {
    let mut settings = from_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from just environment variables (starting from defaults).
pub fn from_env() -> Settings {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings);
    settings
}

/// Applies environment variable overrides to a settings struct.
///
/// Numeric variables that fail to parse are ignored with a warning.
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(val) = std::env::var("VORTEX_DEBUG") {
        settings.debug = matches!(val.to_lowercase().as_str(), "true" | "1" | "yes");
    }

    if let Ok(val) = std::env::var("VORTEX_LOG_LEVEL") {
        settings.log_level = val;
    }

    if let Some(ms) = parse_env("VORTEX_DEBOUNCE_MS") {
        settings.form.debounce_ms = ms;
    }

    if let Some(len) = parse_env("VORTEX_MESSAGE_MAX_LENGTH") {
        settings.form.message_max_length = len;
    }

    if let Ok(val) = std::env::var("VORTEX_LOADING_LABEL") {
        settings.form.loading_label = val;
    }

    if let Some(ms) = parse_env("VORTEX_TRANSPORT_LATENCY_MS") {
        settings.transport.latency_ms = ms;
    }

    if let Some(rate) = parse_env("VORTEX_TRANSPORT_FAILURE_RATE") {
        settings.transport.failure_rate = rate;
    }
}

// ============================================================
// Helpers
// ============================================================

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    if let Ok(value) = raw.trim().parse() {
        Some(value)
    } else {
        tracing::warn!(variable = name, value = %raw, "ignoring unparsable environment override");
        None
    }
}

fn merge_over_defaults(value: serde_json::Value, format: &str) -> Result<Settings, VortexError> {
    let default_json = serde_json::to_value(Settings::default()).map_err(|e| {
        VortexError::ConfigurationError(format!("Failed to serialize default settings: {e}"))
    })?;

    let merged = merge_json(default_json, value);
    serde_json::from_value(merged).map_err(|e| {
        VortexError::ConfigurationError(format!(
            "Failed to deserialize settings from {format}: {e}"
        ))
    })
}

/// Converts a TOML value to a `serde_json::Value`.
fn toml_to_json(value: toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s),
        toml::Value::Integer(i) => serde_json::json!(i),
        toml::Value::Float(f) => serde_json::json!(f),
        toml::Value::Boolean(b) => serde_json::Value::Bool(b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => {
            let map: serde_json::Map<String, serde_json::Value> = table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect();
            serde_json::Value::Object(map)
        }
    }
}

/// Deep-merges two JSON values. The `override_val` takes precedence.
fn merge_json(base: serde_json::Value, override_val: serde_json::Value) -> serde_json::Value {
    match (base, override_val) {
        (serde_json::Value::Object(mut base_map), serde_json::Value::Object(override_map)) => {
            for (key, override_v) in override_map {
                let merged = if let Some(base_v) = base_map.remove(&key) {
                    merge_json(base_v, override_v)
                } else {
                    override_v
                };
                base_map.insert(key, merged);
            }
            serde_json::Value::Object(base_map)
        }
        (_, override_val) => override_val,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // ── TOML loading ────────────────────────────────────────────────

    #[test]
    fn test_from_toml_str_basic() {
        let toml = r#"
            debug = false
            log_level = "warn"
        "#;

        let settings = from_toml_str(toml).unwrap();
        assert!(!settings.debug);
        assert_eq!(settings.log_level, "warn");
        // Defaults preserved
        assert_eq!(settings.form.debounce_ms, 300);
    }

    #[test]
    fn test_from_toml_str_nested_tables_keep_defaults() {
        let toml = r#"
            [form]
            debounce_ms = 150

            [transport]
            failure_rate = 0.1
        "#;

        let settings = from_toml_str(toml).unwrap();
        assert_eq!(settings.form.debounce_ms, 150);
        assert_eq!(settings.form.loading_label, "Sending...");
        assert!((settings.transport.failure_rate - 0.1).abs() < f64::EPSILON);
        assert_eq!(settings.transport.latency_ms, 2000);
    }

    #[test]
    fn test_from_toml_str_messages() {
        let toml = r#"
            [messages]
            success = "Thanks!"
        "#;

        let settings = from_toml_str(toml).unwrap();
        assert_eq!(settings.messages.success, "Thanks!");
        assert_eq!(settings.messages.correct_errors, "Please correct the errors above.");
    }

    #[test]
    fn test_from_toml_str_empty() {
        let settings = from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_from_toml_str_invalid() {
        let result = from_toml_str("debug = ");
        assert!(matches!(result, Err(VortexError::ConfigurationError(_))));
    }

    #[test]
    fn test_from_toml_str_wrong_type() {
        let result = from_toml_str("[form]\ndebounce_ms = \"soon\"");
        assert!(result.is_err());
    }

    // ── JSON loading ────────────────────────────────────────────────

    #[test]
    fn test_from_json_str_basic() {
        let json = r#"{"debug": false, "form": {"loading_label": "Please wait"}}"#;
        let settings = from_json_str(json).unwrap();
        assert!(!settings.debug);
        assert_eq!(settings.form.loading_label, "Please wait");
        assert_eq!(settings.form.message_max_length, 1000);
    }

    #[test]
    fn test_from_json_str_empty_object() {
        let settings = from_json_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_from_json_str_invalid() {
        assert!(from_json_str("{not json").is_err());
    }

    // ── Files ───────────────────────────────────────────────────────

    #[test]
    fn test_from_file_toml() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "log_level = \"debug\"").unwrap();

        let settings = from_file(file.path()).unwrap();
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn test_from_file_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"transport": {{"latency_ms": 10}}}}"#).unwrap();

        let settings = from_file(file.path()).unwrap();
        assert_eq!(settings.transport.latency_ms, 10);
    }

    #[test]
    fn test_from_file_missing() {
        let result = from_file("/nonexistent/vortex.toml");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to read settings file"));
    }

    // ── Environment ─────────────────────────────────────────────────

    #[test]
    fn test_apply_env_overrides() {
        std::env::set_var("VORTEX_DEBUG", "false");
        std::env::set_var("VORTEX_DEBOUNCE_MS", "120");
        std::env::set_var("VORTEX_TRANSPORT_FAILURE_RATE", "0.25");
        std::env::set_var("VORTEX_MESSAGE_MAX_LENGTH", "not-a-number");

        let settings = from_env();
        assert!(!settings.debug);
        assert_eq!(settings.form.debounce_ms, 120);
        assert!((settings.transport.failure_rate - 0.25).abs() < f64::EPSILON);
        assert_eq!(settings.form.message_max_length, 1000);

        std::env::remove_var("VORTEX_DEBUG");
        std::env::remove_var("VORTEX_DEBOUNCE_MS");
        std::env::remove_var("VORTEX_TRANSPORT_FAILURE_RATE");
        std::env::remove_var("VORTEX_MESSAGE_MAX_LENGTH");
    }

    // ── Helpers ─────────────────────────────────────────────────────

    #[test]
    fn test_merge_json_deep() {
        let base = serde_json::json!({"a": 1, "b": {"c": 2, "d": 3}});
        let over = serde_json::json!({"b": {"c": 20}});
        let merged = merge_json(base, over);
        assert_eq!(merged, serde_json::json!({"a": 1, "b": {"c": 20, "d": 3}}));
    }
}
