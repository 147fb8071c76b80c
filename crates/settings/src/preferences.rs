//! The three user preferences that control terminal launches.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SettingsError;

/// Identifier of a single preference, as sent by the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceId {
    Terminal,
    TerminalArg,
    TerminalCmd,
}

impl PreferenceId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Terminal => "ssh_launcher_terminal",
            Self::TerminalArg => "ssh_launcher_terminal_arg",
            Self::TerminalCmd => "ssh_launcher_terminal_cmd",
        }
    }
}

impl fmt::Display for PreferenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreferenceId {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ssh_launcher_terminal" => Ok(Self::Terminal),
            "ssh_launcher_terminal_arg" => Ok(Self::TerminalArg),
            "ssh_launcher_terminal_cmd" => Ok(Self::TerminalCmd),
            other => Err(SettingsError::UnknownPreference(other.to_string())),
        }
    }
}

/// Terminal launch preferences.
///
/// Replaced wholesale by a snapshot, or one field at a time by updates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Preferences {
    /// Terminal executable. Empty disables launching.
    #[serde(rename = "ssh_launcher_terminal")]
    pub terminal: String,
    /// Flag telling the terminal to run a command.
    #[serde(rename = "ssh_launcher_terminal_arg")]
    pub terminal_arg: String,
    /// Command template with `%SHELL` and `%CONN` placeholders.
    #[serde(rename = "ssh_launcher_terminal_cmd")]
    pub terminal_cmd: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            terminal: Self::DEFAULT_TERMINAL.to_string(),
            terminal_arg: Self::DEFAULT_TERMINAL_ARG.to_string(),
            terminal_cmd: Self::DEFAULT_TERMINAL_CMD.to_string(),
        }
    }
}

impl Preferences {
    pub const DEFAULT_TERMINAL: &'static str = "x-terminal-emulator";
    pub const DEFAULT_TERMINAL_ARG: &'static str = "-e";
    pub const DEFAULT_TERMINAL_CMD: &'static str = "%SHELL -c \"ssh %CONN\"";

    /// Sets a single preference.
    fn set(&mut self, id: PreferenceId, value: String) {
        debug!(%id, %value, "preference updated");
        match id {
            PreferenceId::Terminal => self.terminal = value,
            PreferenceId::TerminalArg => self.terminal_arg = value,
            PreferenceId::TerminalCmd => self.terminal_cmd = value,
        }
    }

    /// Sets a single preference by its host-application id.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::UnknownPreference` if `id` is not one of the
    /// three preference ids. Nothing is changed in that case.
    pub fn update(&mut self, id: &str, value: String) -> Result<(), SettingsError> {
        self.set(id.parse()?, value);
        Ok(())
    }
}
