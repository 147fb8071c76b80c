mod error;
mod launch;

pub use error::LaunchError;
pub use launch::{Launch, TerminalLaunchSpec, launch};
