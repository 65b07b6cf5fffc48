//! Property checks for the destination filter over the reference catalog.

use voyage_catalog::{filter, DestinationCatalog, SearchOutcome};

/// Queries: every two-letter lowercase pair plus a few mixed-case and spaced ones
fn queries() -> Vec<String> {
    let mut out = Vec::new();
    for a in 'a'..='z' {
        out.push(a.to_string());
        for b in 'a'..='z' {
            out.push(format!("{}{}", a, b));
        }
    }
    out.extend(
        ["SOUTH", "New Z", "usa", "Zealand", " ", "e g", "Atlantis", "-"]
            .iter()
            .map(|s| s.to_string()),
    );
    out
}

fn is_ordered_subsequence(sub: &[&str], full: &[String]) -> bool {
    let mut it = full.iter();
    sub.iter().all(|s| it.any(|f| f == s))
}

// =============================================================================
// Subsequence / containment
// =============================================================================

#[test]
fn test_filter_is_ordered_subsequence() {
    let catalog = DestinationCatalog::reference();

    for q in queries() {
        let result = filter(&q, catalog.entries());
        assert!(
            is_ordered_subsequence(&result, catalog.entries()),
            "order broken for query {:?}",
            q
        );
        for name in &result {
            assert!(
                name.to_lowercase().contains(&q.to_lowercase()),
                "{} does not contain {:?}",
                name,
                q
            );
        }
    }
}

#[test]
fn test_filter_is_complete() {
    let catalog = DestinationCatalog::reference();

    for q in queries() {
        let result = filter(&q, catalog.entries());
        let expected = catalog
            .entries()
            .iter()
            .filter(|n| n.to_lowercase().contains(&q.to_lowercase()))
            .count();
        assert_eq!(result.len(), expected, "missing entries for {:?}", q);
    }
}

#[test]
fn test_empty_query_is_identity() {
    let catalog = DestinationCatalog::reference();
    let result = filter("", catalog.entries());
    assert_eq!(result, catalog.entries().iter().map(String::as_str).collect::<Vec<_>>());
}

// =============================================================================
// Outcome classification
// =============================================================================

#[test]
fn test_no_results_is_explicit() {
    let catalog = DestinationCatalog::reference();

    match catalog.search("xyz") {
        SearchOutcome::NoResults { query } => assert_eq!(query, "xyz"),
        other => panic!("expected NoResults, got {:?}", other),
    }
}

#[test]
fn test_unfiltered_differs_from_matches_all() {
    let catalog = DestinationCatalog::reference();

    let unfiltered = catalog.search("");
    assert!(matches!(unfiltered, SearchOutcome::Unfiltered { .. }));
    assert_eq!(unfiltered.entries().len(), 20);
}
