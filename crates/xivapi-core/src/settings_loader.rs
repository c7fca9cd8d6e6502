//! Settings loading from configuration files.
//!
//! ## Loading Order
//!
//! 1. Start with default settings.
//! 2. Load from a TOML file (overriding defaults).
//! 3. Apply environment variable overrides (highest priority).
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `XIVAPI_BASE_URL` | `base_url` |
//! | `XIVAPI_TIMEOUT_SECS` | `timeout_secs` |
//! | `XIVAPI_USER_AGENT` | `user_agent` |
//! | `XIVAPI_LANGUAGE` | `language` |
//! | `XIVAPI_SCHEMA` | `schema` |
//! | `XIVAPI_LOG_LEVEL` | `log_level` |
//! | `XIVAPI_DEBUG` | `debug` |
//!
//! ## Examples
//!
//! ```rust,no_run
//! use xivapi_core::settings_loader;
//!
//! let settings = settings_loader::from_toml_file_with_env("xivapi.toml").unwrap();
//! ```

use std::path::Path;

use crate::error::XivError;
use crate::language::Language;
use crate::settings::ClientSettings;

/// Loads settings from a TOML string.
///
/// Keys missing from the document keep their default values.
///
/// # Errors
///
/// Returns [`XivError::Configuration`] if the TOML is malformed or a value
/// has the wrong type.
pub fn from_toml_str(toml_str: &str) -> Result<ClientSettings, XivError> {
    // Merge through serde_json so that absent keys fall back to defaults.
    let toml_value: toml::Value = toml::from_str(toml_str)
        .map_err(|e| XivError::Configuration(format!("Failed to parse TOML: {e}")))?;

    let json_value = toml_to_json(toml_value);
    let default_json = serde_json::to_value(ClientSettings::default()).map_err(|e| {
        XivError::Configuration(format!("Failed to serialize default settings: {e}"))
    })?;

    let merged = merge_json(default_json, json_value);
    serde_json::from_value(merged).map_err(|e| {
        XivError::Configuration(format!("Failed to deserialize settings from TOML: {e}"))
    })
}

/// Loads settings from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the TOML is malformed.
pub fn from_toml_file(path: impl AsRef<Path>) -> Result<ClientSettings, XivError> {
    let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
        XivError::Configuration(format!(
            "Failed to read TOML file '{}': {e}",
            path.as_ref().display()
        ))
    })?;
    from_toml_str(&content)
}

/// Loads settings from a TOML file and then applies environment variable overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the TOML is malformed, or an
/// environment variable holds an invalid value.
pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> Result<ClientSettings, XivError> {
    let mut settings = from_toml_file(path)?;
    apply_env_overrides(&mut settings)?;
    Ok(settings)
}

/// Loads settings from just environment variables (starting from defaults).
///
/// # Errors
///
/// Returns an error if an environment variable holds an invalid value.
pub fn from_env() -> Result<ClientSettings, XivError> {
    let mut settings = ClientSettings::default();
    apply_env_overrides(&mut settings)?;
    Ok(settings)
}

/// Applies `XIVAPI_*` environment variable overrides to a settings struct.
///
/// # Errors
///
/// Returns [`XivError::Configuration`] if `XIVAPI_TIMEOUT_SECS` is not an
/// integer or `XIVAPI_LANGUAGE` is not a supported language code.
pub fn apply_env_overrides(settings: &mut ClientSettings) -> Result<(), XivError> {
    apply_overrides(settings, |key| std::env::var(key).ok())
}

/// Applies overrides read through `lookup`, which maps a variable name to its value.
///
/// Empty `XIVAPI_LANGUAGE` and `XIVAPI_SCHEMA` values clear the setting.
///
/// # Errors
///
/// See [`apply_env_overrides`].
pub fn apply_overrides<F>(settings: &mut ClientSettings, lookup: F) -> Result<(), XivError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("XIVAPI_BASE_URL") {
        settings.base_url = val;
    }

    if let Some(val) = lookup("XIVAPI_TIMEOUT_SECS") {
        settings.timeout_secs = val.trim().parse().map_err(|_| {
            XivError::Configuration(format!("XIVAPI_TIMEOUT_SECS must be an integer, got '{val}'"))
        })?;
    }

    if let Some(val) = lookup("XIVAPI_USER_AGENT") {
        settings.user_agent = val;
    }

    if let Some(val) = lookup("XIVAPI_LANGUAGE") {
        settings.language = if val.is_empty() {
            None
        } else {
            Some(
                val.parse::<Language>()
                    .map_err(|e| XivError::Configuration(format!("XIVAPI_LANGUAGE: {e}")))?,
            )
        };
    }

    if let Some(val) = lookup("XIVAPI_SCHEMA") {
        settings.schema = (!val.is_empty()).then_some(val);
    }

    if let Some(val) = lookup("XIVAPI_LOG_LEVEL") {
        settings.log_level = val;
    }

    if let Some(val) = lookup("XIVAPI_DEBUG") {
        settings.debug = matches!(val.to_lowercase().as_str(), "true" | "1" | "yes");
    }

    Ok(())
}

// ============================================================
// Helpers
// ============================================================

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
