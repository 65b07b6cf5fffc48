//! Data Model: DestinationView, TripView, PageState
use serde::{Deserialize, Serialize};
use std::fmt;

/// Nome de destino vindo do catálogo fixo (ex: "South Africa")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DestinationName(String);

impl DestinationName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URL slug: lowercase, whitespace runs collapsed to a single hyphen
    pub fn slug(&self) -> String {
        self.0
            .split_whitespace()
            .map(|word| word.to_lowercase())
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl fmt::Display for DestinationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DestinationName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationView {
    pub name: String,
    /// Texto sintetizado a partir do slug
    pub description: String,
    pub banner_image_url: String,
    pub trips: Vec<TripView>,
}

impl DestinationView {
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripView {
    /// Posição 1-based dentro do fetch
    pub id: u32,
    pub name: String,
    pub duration: String,
    pub price: String,
    pub amenities: Vec<String>,
    #[serde(flatten)]
    pub cosmetics: TripCosmetics,
}

/// Campos de apresentação: não vêm do payload remoto
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripCosmetics {
    pub image_url: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerView {
    pub id: u32,
    pub image_url: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedDestinationView {
    pub id: u32,
    pub name: String,
    pub handle: String,
    pub image_url: String,
    pub description: String,
    /// Preço de vitrine, gerado; nunca vem da fonte
    pub teaser_price: String,
}

/// Estado de uma página que depende de fetch remoto
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PageState<T> {
    Idle,
    Loading,
    Ready { data: T },
    Empty { data: T },
    Failed { message: String },
}

impl<T> PageState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready { data } | Self::Empty { data } => Some(data),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_slug_from_name() {
        assert_eq!(DestinationName::new("South Africa").slug(), "south-africa");
        assert_eq!(DestinationName::new("New  Zealand ").slug(), "new-zealand");
        assert_eq!(DestinationName::new("USA").slug(), "usa");
    }

    #[test]
    fn test_trip_view_serializes_flat() {
        let trip = TripView {
            id: 1,
            name: "Nile Cruise".to_string(),
            duration: "5 days".to_string(),
            price: "$999".to_string(),
            amenities: vec!["Breakfast".to_string()],
            cosmetics: TripCosmetics {
                image_url: "https://img/1".to_string(),
                description: "nice".to_string(),
            },
        };

        let value = serde_json::to_value(&trip).unwrap();
        assert_eq!(value["imageUrl"], json!("https://img/1"));
        assert_eq!(value["description"], json!("nice"));
        assert!(value.get("cosmetics").is_none());
    }

    #[test]
    fn test_page_state_tagging() {
        let state: PageState<u32> = PageState::Failed { message: "boom".to_string() };
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value, json!({ "status": "failed", "message": "boom" }));
        assert_eq!(state.message(), Some("boom"));

        let ready = PageState::Ready { data: 3u32 };
        assert_eq!(ready.data(), Some(&3));
        assert!(!ready.is_empty());
    }
}
