use std::io;
use thiserror::Error;

/// Error type for preference loading and updates.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Preferences file I/O error.
    #[error("failed to read preferences: {0}")]
    ConfigIo(#[from] io::Error),

    /// Preferences JSON parse error (not valid JSON at all).
    #[error("invalid JSON: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Schema violations, one `path: message` entry each.
    #[error("preferences validation failed: {}", .0.join("; "))]
    ConfigValidation(Vec<String>),

    /// Update for a preference id this extension does not have.
    #[error("unknown preference: {0}")]
    UnknownPreference(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_joined() {
        let err = SettingsError::ConfigValidation(vec![
            "first".into(),
            "/ssh_launcher_terminal: second".into(),
        ]);
        assert_eq!(
            err.to_string(),
            "preferences validation failed: first; /ssh_launcher_terminal: second"
        );
    }

    #[test]
    fn test_unknown_preference_display() {
        let err = SettingsError::UnknownPreference("kw".into());
        assert_eq!(err.to_string(), "unknown preference: kw");
    }
}
