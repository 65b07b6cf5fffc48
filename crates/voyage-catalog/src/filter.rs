//! Case-insensitive substring filter over the destination catalog.

use serde::Serialize;

/// Result of filtering the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchOutcome<'a> {
    /// No query yet: the whole catalog in catalog order
    Unfiltered { entries: Vec<&'a str> },
    /// Query matched at least one entry
    Matches { query: String, entries: Vec<&'a str> },
    /// Query matched nothing
    NoResults { query: String },
}

impl<'a> SearchOutcome<'a> {
    /// Entries to display (empty for `NoResults`)
    pub fn entries(&self) -> &[&'a str] {
        match self {
            Self::Unfiltered { entries } | Self::Matches { entries, .. } => entries,
            Self::NoResults { .. } => &[],
        }
    }

    pub fn is_no_results(&self) -> bool {
        matches!(self, Self::NoResults { .. })
    }

    /// Message shown when nothing matched
    pub fn empty_message(&self) -> Option<&'static str> {
        match self {
            Self::NoResults { .. } => Some("No destinations found. Try a different search term."),
            _ => None,
        }
    }
}

/// Ordered subsequence of `catalog` whose names contain `query`, ignoring case.
/// An empty query returns the catalog unchanged.
pub fn filter<'a, S: AsRef<str>>(query: &str, catalog: &'a [S]) -> Vec<&'a str> {
    if query.is_empty() {
        return catalog.iter().map(AsRef::as_ref).collect();
    }

    let needle = query.to_lowercase();
    catalog
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| name.to_lowercase().contains(&needle))
        .collect()
}

/// Filter and classify the result
pub fn search<'a, S: AsRef<str>>(query: &str, catalog: &'a [S]) -> SearchOutcome<'a> {
    if query.is_empty() {
        return SearchOutcome::Unfiltered {
            entries: filter(query, catalog),
        };
    }

    let entries = filter(query, catalog);
    if entries.is_empty() {
        SearchOutcome::NoResults {
            query: query.to_string(),
        }
    } else {
        SearchOutcome::Matches {
            query: query.to_string(),
            entries,
        }
    }
}
