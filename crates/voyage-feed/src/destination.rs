//! Destination page normalization: raw `/destination/{slug}` payload to
//! `DestinationView`.

use crate::raw::{self, RawList, RawTrip};
use crate::source::{paths, FeedError, RecordSource};
use serde_json::Value;
use std::sync::Arc;
use voyage_core::{CatalogConfig, DestinationView, PageState, TripCosmetics, TripView};

pub const DEFAULT_TRIP_NAME: &str = "Untitled trip";
pub const DEFAULT_TRIP_DURATION: &str = "Flexible";
pub const DEFAULT_TRIP_PRICE: &str = "Price on request";

/// User-facing message for a failed destination load
pub const DESTINATION_FAILURE_MESSAGE: &str =
    "Failed to load destination data. Please try again later.";

/// Message for a destination with no trips
pub const NO_TRIPS_MESSAGE: &str = "No trips are available for this destination yet.";

/// "south-africa" -> "South africa": first character uppercased, the rest
/// with hyphens turned into spaces
pub fn display_name(slug: &str) -> String {
    let mut chars = slug.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.map(|c| if c == '-' { ' ' } else { c }))
            .collect(),
        None => String::new(),
    }
}

pub fn destination_description(slug: &str) -> String {
    format!(
        "Explore the magic of {} with our specially curated trips that combine adventure, culture, and relaxation.",
        slug.replace('-', " ")
    )
}

pub fn trip_description(slug: &str) -> String {
    format!(
        "Experience the wonders of {} with this amazing trip package.",
        slug
    )
}

/// Pure transform of a fetched payload
pub fn normalize_destination(
    slug: &str,
    payload: &Value,
    catalog: &CatalogConfig,
) -> Result<DestinationView, FeedError> {
    let path = paths::destination(slug);
    if payload.is_null() {
        return Err(FeedError::Parse {
            path,
            reason: "empty response body".to_string(),
        });
    }

    // Non-object payloads carry no `trips` key and read as zero trips
    let items = match raw::list(payload, "trips") {
        RawList::Missing => &[][..],
        RawList::Items(items) => items,
        RawList::Malformed => {
            return Err(FeedError::Parse {
                path,
                reason: "`trips` is not an array".to_string(),
            })
        }
    };

    let trips = items
        .iter()
        .enumerate()
        .map(|(index, item)| normalize_trip(slug, index, RawTrip(item), catalog))
        .collect();

    Ok(DestinationView {
        name: display_name(slug),
        description: destination_description(slug),
        banner_image_url: catalog.banner_for(slug).to_string(),
        trips,
    })
}

fn normalize_trip(slug: &str, index: usize, trip: RawTrip<'_>, catalog: &CatalogConfig) -> TripView {
    TripView {
        id: index as u32 + 1,
        name: trip.name().unwrap_or_else(|| DEFAULT_TRIP_NAME.to_string()),
        duration: trip
            .duration()
            .unwrap_or_else(|| DEFAULT_TRIP_DURATION.to_string()),
        price: trip.price().unwrap_or_else(|| DEFAULT_TRIP_PRICE.to_string()),
        amenities: trip.amenities(),
        cosmetics: TripCosmetics {
            image_url: catalog.trip_image(index).to_string(),
            description: trip_description(slug),
        },
    }
}

/// Map a load result onto the page state the view renders
pub fn page_state(result: Result<DestinationView, FeedError>) -> PageState<DestinationView> {
    match result {
        Ok(view) if view.is_empty() => PageState::Empty { data: view },
        Ok(view) => PageState::Ready { data: view },
        Err(err) => {
            tracing::warn!(error = %err, "destination load failed");
            PageState::Failed {
                message: DESTINATION_FAILURE_MESSAGE.to_string(),
            }
        }
    }
}

/// Fetches and normalizes destination pages. No caching: every `load`
/// is exactly one upstream fetch.
#[derive(Clone)]
pub struct DestinationNormalizer {
    source: Arc<dyn RecordSource>,
    catalog: Arc<CatalogConfig>,
}

impl DestinationNormalizer {
    pub fn new(source: Arc<dyn RecordSource>, catalog: Arc<CatalogConfig>) -> Self {
        Self { source, catalog }
    }

    pub fn catalog(&self) -> &CatalogConfig {
        &self.catalog
    }

    pub async fn load(&self, slug: &str) -> Result<DestinationView, FeedError> {
        let payload = self.source.get(&paths::destination(slug)).await?;
        let view = normalize_destination(slug, &payload, &self.catalog)?;
        tracing::debug!(slug, trips = view.trips.len(), "destination normalized");
        Ok(view)
    }

    pub async fn load_page(&self, slug: &str) -> PageState<DestinationView> {
        page_state(self.load(slug).await)
    }
}
