//! Voyage Feed: remote record normalization
//!
//! Fetches loosely-typed destination, banner and featured-destination
//! records and shapes them into the fully populated display model from
//! `voyage-core`, substituting deterministic defaults for anything absent.
//!
//! # Flow
//!
//! ```text
//! RecordSource ──► raw readers ──► normalize_* ──► PageState
//!  (HTTP/static)    (Value)         (views)        (Loading/Ready/Empty/Failed)
//! ```
//!
//! `DestinationLoader` and `BannerCarousel` are host-side state holders: a
//! page host drives them across loads and timer ticks, while the HTTP API
//! only serves the snapshots they start from (`HomeFeed::carousel`).
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use voyage_feed::{DestinationNormalizer, HttpSource};
//!
//! let source = HttpSource::new("https://example.org", Duration::from_secs(30))?;
//! let normalizer = DestinationNormalizer::new(Arc::new(source), Arc::new(CatalogConfig::reference()));
//! let page = normalizer.load_page("south-africa").await;
//! ```

pub mod carousel;
pub mod client;
pub mod destination;
pub mod home;
pub mod loader;
pub mod raw;
pub mod source;

pub use carousel::BannerCarousel;
pub use client::{HttpSource, DEFAULT_UPSTREAM_URL};
pub use destination::{normalize_destination, DestinationNormalizer};
pub use home::{HomeFeed, HomeLoader};
pub use loader::{DestinationLoader, Ticket};
pub use source::{paths, FeedError, RecordSource, StaticSource};
