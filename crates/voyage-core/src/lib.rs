//! Voyage Core: Data Model, Configuração e Erros
//!
//! Tipos compartilhados por todos os crates do fluxo de configuração de
//! roteiros: entidades normalizadas, catálogo estático e erro unificado.

pub mod config;
pub mod data_model;
pub mod error;

pub use config::CatalogConfig;
pub use data_model::{
    BannerView, DestinationName, DestinationView, FeaturedDestinationView, PageState,
    TripCosmetics, TripView,
};
pub use error::VoyageError;

/// Versão do motor Voyage
pub const VOYAGE_VERSION: &str = "1.0.0";
