//! Live search state bound to a catalog.

use crate::filter::SearchOutcome;
use crate::DestinationCatalog;
use std::sync::Arc;

/// Query state for the destination picker
#[derive(Debug, Clone)]
pub struct DestinationSearch {
    catalog: Arc<DestinationCatalog>,
    query: String,
}

impl DestinationSearch {
    pub fn new(catalog: Arc<DestinationCatalog>) -> Self {
        Self {
            catalog,
            query: String::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    /// Current outcome for the live query
    pub fn outcome(&self) -> SearchOutcome<'_> {
        self.catalog.search(&self.query)
    }
}
