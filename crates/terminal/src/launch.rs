//! Opening a terminal that runs the SSH command.

use std::env;
use std::process::Command;

use tracing::{debug, info, warn};

use crate::error::LaunchError;

const SHELL_PLACEHOLDER: &str = "%SHELL";
const CONN_PLACEHOLDER: &str = "%CONN";
const FALLBACK_SHELL: &str = "/bin/sh";

/// How to start a terminal for a connection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminalLaunchSpec {
    /// Terminal executable, as a name on `PATH` or a path. Empty disables launching.
    pub terminal: String,
    /// Flag telling the terminal to run a command, e.g. `-e`.
    pub arg: String,
    /// Command template with `%SHELL` and `%CONN` placeholders.
    pub command: String,
}

/// Outcome of a successful [`launch`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launch {
    /// The terminal was started with this process id.
    Spawned(u32),
    /// No terminal is configured, nothing was started.
    Disabled,
}

impl TerminalLaunchSpec {
    pub fn is_enabled(&self) -> bool {
        !self.terminal.trim().is_empty()
    }

    /// Substitutes the shell and connection string into the command template.
    pub fn shell_command(&self, shell: &str, conn: &str) -> String {
        self.command
            .replace(SHELL_PLACEHOLDER, shell)
            .replace(CONN_PLACEHOLDER, conn)
    }

    /// Arguments passed to the terminal: the configured flag exactly as
    /// given, then the substituted command.
    pub fn args(&self, shell: &str, conn: &str) -> Vec<String> {
        vec![self.arg.clone(), self.shell_command(shell, conn)]
    }
}

/// The user's login shell from `$SHELL`.
fn user_shell() -> String {
    env::var("SHELL").unwrap_or_else(|_| {
        warn!("SHELL is not set, using {FALLBACK_SHELL}");
        FALLBACK_SHELL.to_string()
    })
}

/// Opens a terminal connected to `conn`, working in the home directory.
///
/// Does nothing if no terminal is configured.
///
/// # Errors
///
/// Returns an error if the terminal cannot be found or fails to start.
pub fn launch(conn: &str, spec: &TerminalLaunchSpec) -> Result<Launch, LaunchError> {
    if !spec.is_enabled() {
        debug!(conn, "no terminal configured, skipping launch");
        return Ok(Launch::Disabled);
    }

    let terminal = spec.terminal.trim();
    let program = which::which(terminal).map_err(|source| LaunchError::TerminalNotFound {
        terminal: terminal.to_string(),
        source,
    })?;

    let mut command = Command::new(&program);
    command.args(spec.args(&user_shell(), conn));
    if let Some(home) = dirs::home_dir() {
        command.current_dir(home);
    }

    debug!(?command, "launching terminal");
    let child = command.spawn().map_err(|source| LaunchError::Spawn {
        terminal: terminal.to_string(),
        source,
    })?;

    info!(conn, pid = child.id(), "opened terminal");
    Ok(Launch::Spawned(child.id()))
}
