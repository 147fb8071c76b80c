//! Locations of the host files and how they are read.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// The two files hosts are discovered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSources {
    /// SSH client configuration, usually `~/.ssh/config`.
    pub config: PathBuf,
    /// Known hosts file, usually `~/.ssh/known_hosts`.
    pub known_hosts: PathBuf,
}

impl HostSources {
    /// Host files inside the given `.ssh` directory.
    pub fn in_dir(ssh_dir: &Path) -> Self {
        Self {
            config: ssh_dir.join("config"),
            known_hosts: ssh_dir.join("known_hosts"),
        }
    }

    /// Host files inside `~/.ssh`, or `None` if the home directory is unknown.
    pub fn from_home() -> Option<Self> {
        dirs::home_dir().map(|home| Self::in_dir(&home.join(".ssh")))
    }
}

/// Result of reading a host file.
///
/// A missing file is expected and silent. Any other I/O error is kept so it
/// can be reported, but callers still treat it as "no hosts".
#[derive(Debug)]
pub enum ReadOutcome {
    Loaded(String),
    Absent,
    Failed(io::Error),
}

impl ReadOutcome {
    /// Returns the file contents, logging why there are none otherwise.
    pub fn into_contents(self, path: &Path) -> Option<String> {
        match self {
            ReadOutcome::Loaded(contents) => Some(contents),
            ReadOutcome::Absent => {
                debug!(path = %path.display(), "host file not found");
                None
            }
            ReadOutcome::Failed(e) => {
                warn!(path = %path.display(), error = %e, "failed to read host file");
                None
            }
        }
    }
}

/// Reads a host file, classifying the failure modes.
pub fn read_source(path: &Path) -> ReadOutcome {
    match fs::read_to_string(path) {
        Ok(contents) => ReadOutcome::Loaded(contents),
        Err(e) if e.kind() == io::ErrorKind::NotFound => ReadOutcome::Absent,
        Err(e) => ReadOutcome::Failed(e),
    }
}
