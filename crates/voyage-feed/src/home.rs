//! Home page feed: rotating banners and featured destination cards.

use crate::carousel::BannerCarousel;
use crate::raw::{self, RawList};
use crate::source::{paths, FeedError, RecordSource};
use rand::Rng;
use serde::Serialize;
use serde_json::Value;
use std::ops::Range;
use std::sync::Arc;
use voyage_core::{BannerView, CatalogConfig, DestinationName, FeaturedDestinationView, PageState};

pub const BANNER_TITLE: &str = "Explore Amazing Destinations";
pub const BANNER_DESCRIPTION: &str =
    "Discover beautiful places around the world with our experienced travel guides.";

pub const HOME_FAILURE_MESSAGE: &str = "Failed to load data. Please try again later.";
pub const NO_FEATURED_MESSAGE: &str =
    "No destinations available at the moment. Please check back later.";

/// Range of the generated teaser price, in dollars
pub const TEASER_PRICE_RANGE: Range<u32> = 500..1500;

const DEFAULT_FEATURED_TITLE: &str = "Featured destination";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeFeed {
    pub banners: Vec<BannerView>,
    pub featured: Vec<FeaturedDestinationView>,
    pub carousel_interval_ms: u64,
}

impl HomeFeed {
    /// Rotation state for the banner slides, starting on the first one
    pub fn carousel(&self) -> BannerCarousel {
        BannerCarousel::from_interval_ms(self.banners.len(), self.carousel_interval_ms)
    }
}

/// Remote banners, or the configured defaults when the list is missing,
/// malformed or empty
pub fn normalize_banners(payload: &Value, catalog: &CatalogConfig) -> Vec<BannerView> {
    let items = match raw::list(payload, "banners") {
        RawList::Items(items) if !items.is_empty() => items,
        _ => return catalog.home_banners.clone(),
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| BannerView {
            id: index as u32 + 1,
            image_url: raw::text(item, "img").unwrap_or_else(|| catalog.default_banner.clone()),
            title: BANNER_TITLE.to_string(),
            description: BANNER_DESCRIPTION.to_string(),
        })
        .collect()
}

/// Remote featured destinations; missing or malformed lists yield no cards
pub fn normalize_featured<R: Rng>(
    payload: &Value,
    catalog: &CatalogConfig,
    rng: &mut R,
) -> Vec<FeaturedDestinationView> {
    let items = match raw::list(payload, "destination") {
        RawList::Items(items) => items,
        _ => return Vec::new(),
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let name = raw::text(item, "title").unwrap_or_else(|| DEFAULT_FEATURED_TITLE.to_string());
            let handle = raw::text(item, "handle")
                .unwrap_or_else(|| DestinationName::new(name.as_str()).slug());
            FeaturedDestinationView {
                id: index as u32 + 1,
                description: format!(
                    "Experience the wonders of {} with our curated travel packages.",
                    name
                ),
                image_url: raw::text(item, "img").unwrap_or_else(|| catalog.default_banner.clone()),
                teaser_price: format!("${}", rng.gen_range(TEASER_PRICE_RANGE)),
                name,
                handle,
            }
        })
        .collect()
}

pub fn page_state(result: Result<HomeFeed, FeedError>) -> PageState<HomeFeed> {
    match result {
        Ok(feed) if feed.featured.is_empty() => PageState::Empty { data: feed },
        Ok(feed) => PageState::Ready { data: feed },
        Err(err) => {
            tracing::warn!(error = %err, "home feed load failed");
            PageState::Failed {
                message: HOME_FAILURE_MESSAGE.to_string(),
            }
        }
    }
}

/// Loads banners and featured destinations together
#[derive(Clone)]
pub struct HomeLoader {
    source: Arc<dyn RecordSource>,
    catalog: Arc<CatalogConfig>,
}

impl HomeLoader {
    pub fn new(source: Arc<dyn RecordSource>, catalog: Arc<CatalogConfig>) -> Self {
        Self { source, catalog }
    }

    /// Both fetches run concurrently; either failing fails the feed
    pub async fn load(&self) -> Result<HomeFeed, FeedError> {
        let (banners, featured) = tokio::try_join!(
            self.source.get(paths::BANNERS),
            self.source.get(paths::FEATURED),
        )?;
        Ok(self.assemble(&banners, &featured, &mut rand::thread_rng()))
    }

    pub async fn load_page(&self) -> PageState<HomeFeed> {
        page_state(self.load().await)
    }

    pub fn assemble<R: Rng>(&self, banners: &Value, featured: &Value, rng: &mut R) -> HomeFeed {
        HomeFeed {
            banners: normalize_banners(banners, &self.catalog),
            featured: normalize_featured(featured, &self.catalog, rng),
            carousel_interval_ms: self.catalog.carousel_interval_ms,
        }
    }
}
