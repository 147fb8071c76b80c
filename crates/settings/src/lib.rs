mod error;
mod preferences;
mod sources;

pub use error::SettingsError;
pub use preferences::Preferences;
pub use sources::file::{ensure_preferences_exist, load_from_path, preferences_path};
