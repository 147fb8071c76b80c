//! The optional `~/.sshlaunch.json` preferences file.

use crate::error::SettingsError;
use crate::preferences::Preferences;
use jsonschema::Validator;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, info};

const DEFAULT_JSON: &str = include_str!("../../../../assets/sshlaunch.default.json");
const SCHEMA_JSON: &str = include_str!("../../../../assets/sshlaunch.schema.json");

static VALIDATOR: LazyLock<Validator> = LazyLock::new(|| {
    let schema: Value =
        serde_json::from_str(SCHEMA_JSON).expect("embedded schema should be valid JSON");
    Validator::new(&schema).expect("embedded schema should be a valid JSON Schema")
});

/// Returns one `path: message` entry per schema violation.
fn violations(value: &Value) -> Vec<String> {
    VALIDATOR
        .iter_errors(value)
        .map(|e| match e.instance_path.to_string() {
            path if path.is_empty() => e.to_string(),
            path => format!("{path}: {e}"),
        })
        .collect()
}

/// Returns the default preferences file path (~/.sshlaunch.json).
pub fn preferences_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".sshlaunch.json"))
}

/// Ensures the preferences file exists, creating a default one if missing.
///
/// # Errors
///
/// Returns an error if writing the default preferences file fails.
pub fn ensure_preferences_exist(path: &Path) -> Result<(), SettingsError> {
    if !path.exists() {
        fs::write(path, DEFAULT_JSON)?;
        info!(path = %path.display(), "created default preferences");
    }

    Ok(())
}

/// Loads preferences from a string.
///
/// Validates against the schema first, then deserializes. Missing keys
/// keep their defaults.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or fails schema validation.
pub fn load_from_str(s: &str) -> Result<Preferences, SettingsError> {
    let value: Value = serde_json::from_str(s)?;

    let errors = violations(&value);
    if !errors.is_empty() {
        return Err(SettingsError::ConfigValidation(errors));
    }

    Ok(serde_json::from_value(value)?)
}

/// Loads preferences from a specific path.
///
/// A missing file yields the defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or is invalid.
pub fn load_from_path(path: &Path) -> Result<Preferences, SettingsError> {
    if !path.exists() {
        debug!(path = %path.display(), "no preferences file, using defaults");
        return Ok(Preferences::default());
    }

    let contents = fs::read_to_string(path)?;
    load_from_str(&contents)
}
