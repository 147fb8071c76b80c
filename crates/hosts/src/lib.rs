//! SSH host discovery from `~/.ssh/config` and `~/.ssh/known_hosts`.

mod catalog;
mod config_file;
mod known_hosts;
mod source;

pub use catalog::HostCatalog;
pub use config_file::{parse_config_file, parse_config_str};
pub use known_hosts::{parse_known_hosts, parse_known_hosts_str};
pub use source::HostSources;
