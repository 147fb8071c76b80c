use hosts::HostCatalog;
use tracing::trace;

use crate::item::ResultItem;
use crate::query::Query;

/// Resolves launcher input against the catalog.
///
/// - No input, or input without an `@` past its first character, yields
///   no results.
/// - Otherwise every host containing the search term becomes a result
///   whose connection string is the prefix plus the host. An empty term
///   lists the whole catalog.
/// - When nothing matches, the raw input is offered as-is so arbitrary
///   addresses can still be reached.
pub fn resolve(input: Option<&str>, catalog: &HostCatalog) -> Vec<ResultItem> {
    let Some(query) = input.and_then(Query::parse) else {
        return Vec::new();
    };

    let mut items: Vec<ResultItem> = catalog
        .iter()
        .filter(|host| query.matches(host))
        .map(|host| ResultItem::connect(host, query.connection(host)))
        .collect();

    if items.is_empty() {
        items.push(ResultItem::connect(query.raw(), query.raw().to_string()));
    }

    trace!(input = query.raw(), results = items.len(), "resolved query");
    items
}
