//! The merged, sorted list of hosts a query is matched against.

use tracing::debug;

use crate::config_file::parse_config_file;
use crate::known_hosts::parse_known_hosts;
use crate::source::HostSources;

/// Sorted, duplicate-free host records from every source.
///
/// Built fresh for each query; nothing is cached between builds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostCatalog {
    hosts: Vec<String>,
}

impl HostCatalog {
    /// Merges config hosts and known hosts, then sorts the combined list.
    ///
    /// Records are lowercase already, so exact duplicates are removed after
    /// sorting.
    pub fn from_parts(config_hosts: Vec<String>, known_hosts: Vec<String>) -> Self {
        let mut hosts = config_hosts;
        hosts.extend(known_hosts);
        hosts.sort();
        hosts.dedup();
        Self { hosts }
    }

    /// Reads and parses both host files.
    pub fn load(sources: &HostSources) -> Self {
        let config_hosts = parse_config_file(&sources.config);
        let known_hosts = parse_known_hosts(&sources.known_hosts);
        debug!(
            config = config_hosts.len(),
            known_hosts = known_hosts.len(),
            "loaded hosts"
        );
        Self::from_parts(config_hosts, known_hosts)
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.hosts.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

impl FromIterator<String> for HostCatalog {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::from_parts(iter.into_iter().collect(), Vec::new())
    }
}
