//! Catalog configuration: static destination list, banner map and image pools.
//!
//! Loaded once at startup (YAML or the built-in reference catalog) and shared
//! immutably afterwards.

use crate::data_model::BannerView;
use crate::error::VoyageError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Auto-advance interval for the home banner carousel
pub const DEFAULT_CAROUSEL_INTERVAL_MS: u64 = 5_000;

static REFERENCE: Lazy<CatalogConfig> = Lazy::new(|| CatalogConfig {
    destinations: [
        "Maldives", "Egypt", "Bali", "Dubai", "Japan",
        "Australia", "Thailand", "Singapore", "Switzerland",
        "Greece", "Italy", "France", "Spain", "USA",
        "Canada", "New Zealand", "South Africa", "Brazil",
        "Morocco", "Turkey",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect(),
    banner_images: [
        ("egypt", "https://res.cloudinary.com/dradkp5i6/image/upload/v1739004325/egypt_scwdiy.jpg"),
        ("bhutan", "https://res.cloudinary.com/dradkp5i6/image/upload/v1739004579/bhutan_qw3z0m.jpg"),
        ("turkey", "https://res.cloudinary.com/dradkp5i6/image/upload/v1739004393/turkey_urabbl.jpg"),
        ("kenya", "https://res.cloudinary.com/dradkp5i6/image/upload/v1739004527/kenya_eaeull.jpg"),
        ("south-africa", "https://res.cloudinary.com/dradkp5i6/image/upload/v1739004461/south-africa_ifpult.jpg"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect(),
    default_banner:
        "https://res.cloudinary.com/dradkp5i6/image/upload/v1739002714/ocean-7890172_1280_wikk5e.jpg"
            .to_string(),
    trip_images: vec![
        "https://picsum.photos/800/500?travel".to_string(),
        "https://picsum.photos/800/500?egypt".to_string(),
        "https://picsum.photos/800/500?bhutan".to_string(),
        "https://picsum.photos/800/500?travel".to_string(),
        "https://picsum.photos/800/500?travel".to_string(),
    ],
    home_banners: vec![
        BannerView {
            id: 1,
            image_url: "https://res.cloudinary.com/dradkp5i6/image/upload/v1739002714/ocean-7890172_1280_wikk5e.jpg".to_string(),
            title: "Explore Amazing Destinations".to_string(),
            description: "Discover beautiful places around the world with our experienced travel guides.".to_string(),
        },
        BannerView {
            id: 2,
            image_url: "https://res.cloudinary.com/dradkp5i6/image/upload/v1739002955/hot-air-ballons_vlbpaw.jpg".to_string(),
            title: "Unforgettable Experiences".to_string(),
            description: "Create memories that will last a lifetime with our special travel packages.".to_string(),
        },
        BannerView {
            id: 3,
            image_url: "https://res.cloudinary.com/dradkp5i6/image/upload/v1739003014/germany_j885ao.jpg".to_string(),
            title: "Adventure Awaits".to_string(),
            description: "Find your next adventure with customized travel plans for every type of traveler.".to_string(),
        },
    ],
    carousel_interval_ms: DEFAULT_CAROUSEL_INTERVAL_MS,
});

/// Static catalog data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Destination names in display order
    pub destinations: Vec<String>,

    /// Banner image by slug (exact, case-sensitive)
    #[serde(default)]
    pub banner_images: HashMap<String, String>,

    /// Banner used for any slug missing from `banner_images`
    pub default_banner: String,

    /// Trip image pool, cycled by trip index
    pub trip_images: Vec<String>,

    /// Home banners used when the remote banner list is unusable
    #[serde(default)]
    pub home_banners: Vec<BannerView>,

    #[serde(default = "default_carousel_interval")]
    pub carousel_interval_ms: u64,
}

fn default_carousel_interval() -> u64 {
    DEFAULT_CAROUSEL_INTERVAL_MS
}

impl CatalogConfig {
    /// The reference catalog (20 destinations, 5 banners + default, 5 trip images)
    pub fn reference() -> Self {
        REFERENCE.clone()
    }

    /// Load catalog from a YAML file
    pub fn load(path: &str) -> Result<Self, VoyageError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            VoyageError::ConfigError(format!("failed to read catalog {}: {}", path, e))
        })?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            path,
            destinations = config.destinations.len(),
            "loaded catalog"
        );
        Ok(config)
    }

    /// Parse and validate catalog YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, VoyageError> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| VoyageError::ConfigError(format!("invalid catalog yaml: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), VoyageError> {
        if self.destinations.is_empty() {
            return Err(VoyageError::ConfigError(
                "destination list must not be empty".to_string(),
            ));
        }
        if self.trip_images.is_empty() {
            return Err(VoyageError::ConfigError(
                "trip image pool must not be empty".to_string(),
            ));
        }
        if self.default_banner.trim().is_empty() {
            return Err(VoyageError::ConfigError(
                "default banner must be set".to_string(),
            ));
        }
        Ok(())
    }

    /// Banner for a slug, falling back to the default banner
    pub fn banner_for(&self, slug: &str) -> &str {
        self.banner_images
            .get(slug)
            .map(String::as_str)
            .unwrap_or(&self.default_banner)
    }

    /// Trip image for a 0-based trip index (`index mod pool_size`)
    pub fn trip_image(&self, index: usize) -> &str {
        if self.trip_images.is_empty() {
            return &self.default_banner;
        }
        &self.trip_images[index % self.trip_images.len()]
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_catalog_shape() {
        let config = CatalogConfig::reference();
        assert_eq!(config.destinations.len(), 20);
        assert_eq!(config.banner_images.len(), 5);
        assert_eq!(config.trip_images.len(), 5);
        assert_eq!(config.home_banners.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_banner_lookup_is_exact() {
        let config = CatalogConfig::reference();
        assert!(config.banner_for("egypt").contains("egypt"));
        assert_eq!(config.banner_for("Egypt"), config.default_banner);
        assert_eq!(config.banner_for("atlantis"), config.default_banner);
    }

    #[test]
    fn test_trip_image_cycles() {
        let config = CatalogConfig::reference();
        assert_eq!(config.trip_image(6), config.trip_images[1]);
        assert_eq!(config.trip_image(5), config.trip_images[0]);
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
destinations: ["Iceland", "Peru"]
banner_images:
  iceland: "https://img/iceland.jpg"
default_banner: "https://img/default.jpg"
trip_images: ["https://img/a.jpg"]
"#;
        let config = CatalogConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.destinations, vec!["Iceland", "Peru"]);
        assert_eq!(config.carousel_interval_ms, DEFAULT_CAROUSEL_INTERVAL_MS);
        assert!(config.home_banners.is_empty());
        assert_eq!(config.trip_image(3), "https://img/a.jpg");
    }

    #[test]
    fn test_rejects_empty_pool() {
        let yaml = r#"
destinations: ["Iceland"]
default_banner: "https://img/default.jpg"
trip_images: []
"#;
        let err = CatalogConfig::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().starts_with("CONFIG/"));
    }

    #[test]
    fn test_shipped_catalog_matches_reference() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../config/catalog.yaml");
        let config = CatalogConfig::load(path).unwrap();
        assert_eq!(config, CatalogConfig::reference());
    }
}
