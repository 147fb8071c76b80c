//! Host identifiers from an OpenSSH `known_hosts` file.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::source::read_source;

/// Leading `host[,alias...]` field followed by whitespace.
///
/// The leading host name must be non-empty. Hashed (`|1|...`), bracketed
/// (`[host]:port`) and marker (`@revoked`) entries do not match.
static HOST_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z0-9.\-]+(?:,\S*)*)\s").expect("host field pattern should be valid")
});

/// Parses the known hosts file at `path`.
///
/// Returns an empty list if the file is missing or unreadable.
pub fn parse_known_hosts(path: &Path) -> Vec<String> {
    read_source(path)
        .into_contents(path)
        .map(|contents| parse_known_hosts_str(&contents))
        .unwrap_or_default()
}

/// Extracts the lowercase host field of every matching line, in file order.
pub fn parse_known_hosts_str(contents: &str) -> Vec<String> {
    contents.lines().filter_map(host_field).collect()
}

fn host_field(line: &str) -> Option<String> {
    let line = line.to_lowercase();
    let captures = HOST_FIELD.captures(&line)?;
    captures.get(1).map(|host| host.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_host_with_ip_alias() {
        let line = "alpha.example.com,10.0.0.1 ssh-rsa AAAAB3NzaC1yc2EAAAADAQABAAABAQ==\n";
        assert_eq!(parse_known_hosts_str(line), vec!["alpha.example.com,10.0.0.1"]);
    }

    #[test]
    fn test_single_host() {
        let line = "github.com ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAIOMqqnkVzrm0SdG6UOoqKLsabgH5C9okWi0dh2l9GKJl\n";
        assert_eq!(parse_known_hosts_str(line), vec!["github.com"]);
    }

    #[test]
    fn test_host_is_lowercased() {
        let line = "Build-01.Example.COM ecdsa-sha2-nistp256 AAAAE2Vj\n";
        assert_eq!(parse_known_hosts_str(line), vec!["build-01.example.com"]);
    }

    #[test]
    fn test_tab_separator() {
        assert_eq!(parse_known_hosts_str("db1\tssh-rsa AAAA\n"), vec!["db1"]);
    }

    #[test]
    fn test_hashed_entries_are_skipped() {
        let line = "|1|JfKTdBh7rNbXkVAQCRp4OQoPfmI=|USECr3SWf1JUPsms5AqfD5QfxkM= ssh-rsa AAAA\n";
        assert!(parse_known_hosts_str(line).is_empty());
    }

    #[test]
    fn test_bracketed_port_entries_are_skipped() {
        assert!(parse_known_hosts_str("[gitlab.local]:2222 ssh-ed25519 AAAA\n").is_empty());
    }

    #[test]
    fn test_markers_are_skipped() {
        let contents = "@cert-authority *.example.com ssh-rsa AAAA\n@revoked bad.host ssh-rsa AAAA\n";
        assert!(parse_known_hosts_str(contents).is_empty());
    }

    #[test]
    fn test_empty_match_is_filtered() {
        // Leading whitespace makes the host field zero-length
        let contents = "   ssh-rsa AAAA\n\n";
        assert!(parse_known_hosts_str(contents).is_empty());
    }

    #[test]
    fn test_leading_comma_is_skipped() {
        assert!(parse_known_hosts_str(",10.0.0.1 ssh-rsa AAAA\n").is_empty());
    }

    #[test]
    fn test_line_without_key_is_skipped() {
        assert!(parse_known_hosts_str("bare-host\nbare-host").is_empty());
    }

    #[test]
    fn test_comment_lines_are_skipped() {
        assert!(parse_known_hosts_str("# comment line\n").is_empty());
    }

    #[test]
    fn test_file_order_is_kept() {
        let contents = "zeta.net ssh-rsa A\nalpha.net ssh-rsa B\n";
        assert_eq!(parse_known_hosts_str(contents), vec!["zeta.net", "alpha.net"]);
    }

    #[test]
    fn test_parse_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(parse_known_hosts(&dir.path().join("known_hosts")).is_empty());
    }

    #[test]
    fn test_parse_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("known_hosts");
        fs::write(
            &path,
            "web.example.org,192.168.1.20 ssh-ed25519 AAAA\n|1|abc=|def= ssh-rsa AAAA\n",
        )
        .unwrap();
        assert_eq!(parse_known_hosts(&path), vec!["web.example.org,192.168.1.20"]);
    }
}
