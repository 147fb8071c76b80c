//! JSON messages exchanged with the host application.

use query::ResultItem;
use serde::{Deserialize, Serialize};
use settings::Preferences;

/// An event delivered by the host application.
#[derive(Debug, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// Full preferences snapshot, sent once at startup.
    Preferences { preferences: Preferences },
    /// A single preference changed.
    PreferencesUpdate { id: String, new_value: String },
    /// The user typed after the keyword. `argument` is absent until they do.
    KeywordQuery {
        #[serde(default)]
        argument: Option<String>,
    },
    /// The user selected a result carrying `data`.
    ItemEnter { data: String },
}

/// What the host application should do in reply.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Response {
    RenderResultList { items: Vec<ResultItem> },
    HideWindow,
}
