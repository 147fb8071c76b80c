//! Handles host-application events one at a time.

use std::io::{self, BufRead, Write};

use hosts::{HostCatalog, HostSources};
use query::{ResultItem, resolve};
use settings::Preferences;
use terminal::{Launch, TerminalLaunchSpec, launch};
use tracing::{debug, error, warn};

use crate::protocol::{Event, Response};

/// Launcher extension state.
///
/// Owns the preferences; events mutate them only through `&mut self`, so
/// queries and launches always see a consistent snapshot.
#[derive(Debug)]
pub struct Extension {
    sources: HostSources,
    preferences: Preferences,
}

impl Extension {
    pub fn new(sources: HostSources, preferences: Preferences) -> Self {
        Self {
            sources,
            preferences,
        }
    }

    pub fn handle(&mut self, event: Event) -> Option<Response> {
        match event {
            Event::Preferences { preferences } => {
                self.preferences = preferences;
                None
            }
            Event::PreferencesUpdate { id, new_value } => {
                if let Err(e) = self.preferences.update(&id, new_value) {
                    warn!("ignoring preference update: {e}");
                }
                None
            }
            Event::KeywordQuery { argument } => Some(Response::RenderResultList {
                items: self.query(argument.as_deref()),
            }),
            Event::ItemEnter { data } => Some(self.connect(&data)),
        }
    }

    /// Results for launcher input, read from the host files on every call.
    pub fn query(&self, input: Option<&str>) -> Vec<ResultItem> {
        let catalog = HostCatalog::load(&self.sources);
        resolve(input, &catalog)
    }

    /// Opens a terminal for `conn`, reporting failures as a result item.
    pub fn connect(&self, conn: &str) -> Response {
        match launch(conn, &self.launch_spec()) {
            Ok(Launch::Spawned(_) | Launch::Disabled) => Response::HideWindow,
            Err(e) => {
                error!(conn, "{e}");
                Response::RenderResultList {
                    items: vec![ResultItem::error(
                        format!("Could not connect to '{conn}'"),
                        e.to_string(),
                    )],
                }
            }
        }
    }

    pub fn launch_spec(&self) -> TerminalLaunchSpec {
        TerminalLaunchSpec {
            terminal: self.preferences.terminal.clone(),
            arg: self.preferences.terminal_arg.clone(),
            command: self.preferences.terminal_cmd.clone(),
        }
    }

    /// Reads one JSON event per line from `input` and writes one JSON
    /// response per line to `output`, until `input` ends.
    ///
    /// Malformed lines are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn serve<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let event: Event = match serde_json::from_str(&line) {
                Ok(event) => event,
                Err(e) => {
                    warn!("skipping malformed event: {e}");
                    continue;
                }
            };
            debug!(?event, "received event");

            if let Some(response) = self.handle(event) {
                serde_json::to_writer(&mut output, &response)?;
                output.write_all(b"\n")?;
                output.flush()?;
            }
        }

        Ok(())
    }
}
