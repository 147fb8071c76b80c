use std::io;
use thiserror::Error;

/// Error type for terminal launches.
#[derive(Error, Debug)]
pub enum LaunchError {
    /// The configured terminal is not an executable on `PATH` or on disk.
    #[error("terminal '{terminal}' not found: {source}")]
    TerminalNotFound {
        terminal: String,
        #[source]
        source: which::Error,
    },

    /// The terminal process could not be started.
    #[error("failed to launch {terminal}: {source}")]
    Spawn {
        terminal: String,
        #[source]
        source: io::Error,
    },
}
