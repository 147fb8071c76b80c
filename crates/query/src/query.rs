/// User input split into a connection prefix and a search term.
///
/// The prefix runs up to and including the first `@` that is not the
/// first character, e.g. `root@` in `root@web`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query<'a> {
    raw: &'a str,
    prefix: &'a str,
    term: &'a str,
    needle: String,
}

impl<'a> Query<'a> {
    /// Splits `raw` at its first `@` past position 0.
    ///
    /// Returns `None` when there is no such `@`.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let (at, _) = raw.char_indices().skip(1).find(|&(_, c)| c == '@')?;
        let (prefix, term) = raw.split_at(at + 1);
        Some(Self {
            raw,
            prefix,
            term,
            needle: term.to_lowercase(),
        })
    }

    /// The input exactly as typed.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Everything up to and including the `@`.
    pub fn prefix(&self) -> &'a str {
        self.prefix
    }

    /// Everything after the `@`. May be empty.
    pub fn term(&self) -> &'a str {
        self.term
    }

    /// Whether `host` matches the search term.
    ///
    /// An empty term matches every host. Matching is a case-insensitive
    /// substring test; hosts are stored lowercase.
    pub fn matches(&self, host: &str) -> bool {
        host.contains(&self.needle)
    }

    /// The connection string for `host`: prefix followed by the host.
    pub fn connection(&self, host: &str) -> String {
        format!("{}{host}", self.prefix)
    }
}
