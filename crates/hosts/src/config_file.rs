//! Host aliases from an SSH client configuration file.
//!
//! Only `Host` lines are consumed. Every other directive, including
//! `Include` and `Match` blocks, is ignored.

use std::path::Path;

use crate::source::read_source;

/// Parses the SSH config file at `path`.
///
/// Returns an empty list if the file is missing or unreadable.
pub fn parse_config_file(path: &Path) -> Vec<String> {
    read_source(path)
        .into_contents(path)
        .map(|contents| parse_config_str(&contents))
        .unwrap_or_default()
}

/// Extracts one lowercase record per qualifying `Host` line, in file order.
///
/// A line with several aliases yields a single record holding all of them.
pub fn parse_config_str(contents: &str) -> Vec<String> {
    contents.lines().filter_map(host_line).collect()
}

fn host_line(line: &str) -> Option<String> {
    let line = line.to_lowercase();

    // Wildcard patterns and *KeyAlgorithms options never name a host
    if line.contains('*') || line.contains("keyalgorithms") {
        return None;
    }

    let (directive, args) = split_directive(line.trim_start());
    if directive != "host" {
        return None;
    }

    let aliases = args.trim();
    (!aliases.is_empty()).then(|| aliases.to_string())
}

/// Splits a line into its directive keyword and the remaining arguments.
///
/// OpenSSH accepts both `Host alias` and `Host=alias`.
fn split_directive(line: &str) -> (&str, &str) {
    let end = line
        .find(|c: char| c.is_whitespace() || c == '=')
        .unwrap_or(line.len());
    let (directive, rest) = line.split_at(end);
    let rest = rest.trim_start();
    (directive, rest.strip_prefix('=').unwrap_or(rest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_simple_host() {
        assert_eq!(parse_config_str("Host prod\n"), vec!["prod"]);
    }

    #[test]
    fn test_host_is_lowercased() {
        assert_eq!(parse_config_str("HOST Prod-Server\n"), vec!["prod-server"]);
    }

    #[test]
    fn test_multi_alias_line_is_one_record() {
        assert_eq!(
            parse_config_str("Host web1 web2   web3\n"),
            vec!["web1 web2   web3"]
        );
    }

    #[test]
    fn test_wildcards_are_skipped() {
        let config = "Host *\nHost foo *\nHost *.example.com\nHost bar\n";
        assert_eq!(parse_config_str(config), vec!["bar"]);
    }

    #[test]
    fn test_wildcard_anywhere_skips_line() {
        assert!(parse_config_str("  IdentityFile ~/.ssh/*\n").is_empty());
    }

    #[test]
    fn test_key_algorithm_lines_are_skipped() {
        let config = "HostKeyAlgorithms ssh-ed25519\nHostbasedKeyAlgorithms ssh-rsa\n";
        assert!(parse_config_str(config).is_empty());
    }

    #[test]
    fn test_hostname_is_not_a_host() {
        let config = "Host prod\n    HostName 10.0.0.5\nHostname other\n";
        assert_eq!(parse_config_str(config), vec!["prod"]);
    }

    #[test]
    fn test_other_host_prefixed_directives_are_not_hosts() {
        let config = "HostKeyAlias alias\nHostbasedAuthentication yes\n";
        assert!(parse_config_str(config).is_empty());
    }

    #[test]
    fn test_equals_syntax() {
        let config = "Host=alpha\nHost = beta\n";
        assert_eq!(parse_config_str(config), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_indented_host() {
        assert_eq!(parse_config_str("   Host gamma  \n"), vec!["gamma"]);
    }

    #[test]
    fn test_host_without_alias_is_skipped() {
        assert!(parse_config_str("Host\nHost   \n").is_empty());
    }

    #[test]
    fn test_alias_containing_host_letters_is_kept_whole() {
        assert_eq!(parse_config_str("Host ghost\n"), vec!["ghost"]);
    }

    #[test]
    fn test_comments_and_other_directives_ignored() {
        let config = "# Host commented\nUser admin\nPort 22\nInclude ~/.ssh/conf.d/x\n";
        assert!(parse_config_str(config).is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(parse_config_str("Host one\r\nHost two\r\n"), vec!["one", "two"]);
    }

    #[test]
    fn test_file_order_is_kept() {
        let config = "Host zeta\nHost alpha\n";
        assert_eq!(parse_config_str(config), vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_parse_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(parse_config_file(&dir.path().join("config")).is_empty());
    }

    #[test]
    fn test_parse_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config");
        fs::write(
            &path,
            "Host *\n    ServerAliveInterval 60\n\nHost Build\n    HostName build.internal\n    User ci\n",
        )
        .unwrap();
        assert_eq!(parse_config_file(&path), vec!["build"]);
    }
}
