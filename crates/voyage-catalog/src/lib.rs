//! Voyage Catalog: destination picker
//!
//! Searches the fixed destination catalog and resolves a picked entry into
//! the `DestinationName` the itinerary wizard starts from.
//!
//! # Example
//!
//! ```ignore
//! use voyage_catalog::DestinationCatalog;
//!
//! let catalog = DestinationCatalog::reference();
//! for name in catalog.search("an").entries() {
//!     println!("{}", name);
//! }
//! let picked = catalog.select("Japan")?;
//! ```

pub mod filter;
pub mod search;

pub use filter::{filter, SearchOutcome};
pub use search::DestinationSearch;

use thiserror::Error;
use voyage_core::{CatalogConfig, DestinationName, VoyageError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown destination: {0}")]
    UnknownDestination(String),
}

impl From<CatalogError> for VoyageError {
    fn from(err: CatalogError) -> Self {
        VoyageError::CatalogError(err.to_string())
    }
}

/// Fixed, ordered destination list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationCatalog {
    entries: Vec<String>,
}

impl DestinationCatalog {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.destinations.clone())
    }

    pub fn reference() -> Self {
        Self::from_config(&CatalogConfig::reference())
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn search(&self, query: &str) -> SearchOutcome<'_> {
        filter::search(query, &self.entries)
    }

    /// Resolve a listed entry; the match is exact
    pub fn select(&self, name: &str) -> Result<DestinationName, CatalogError> {
        match self.entries.iter().find(|entry| entry.as_str() == name) {
            Some(entry) => {
                tracing::debug!(destination = %entry, "destination selected");
                Ok(DestinationName::new(entry.clone()))
            }
            None => Err(CatalogError::UnknownDestination(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_order_is_preserved() {
        let catalog = DestinationCatalog::reference();
        assert_eq!(catalog.len(), 20);
        assert_eq!(catalog.entries()[0], "Maldives");
        assert_eq!(catalog.entries()[19], "Turkey");
    }

    #[test]
    fn test_select() {
        let catalog = DestinationCatalog::reference();
        let name = catalog.select("South Africa").unwrap();
        assert_eq!(name.slug(), "south-africa");

        let err = catalog.select("south africa").unwrap_err();
        assert_eq!(err, CatalogError::UnknownDestination("south africa".to_string()));
    }
}
