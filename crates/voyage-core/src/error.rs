//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VoyageError {
    #[error("CONFIG/{0}")]
    ConfigError(String),

    #[error("CATALOG/{0}")]
    CatalogError(String),

    #[error("FETCH/{0}")]
    FetchError(String),

    #[error("PARSE/{0}")]
    ParseError(String),

    #[error("WIZARD/{0}")]
    WizardError(String),
}

impl VoyageError {
    /// Short code prefix, e.g. "FETCH"
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError(_) => "CONFIG",
            Self::CatalogError(_) => "CATALOG",
            Self::FetchError(_) => "FETCH",
            Self::ParseError(_) => "PARSE",
            Self::WizardError(_) => "WIZARD",
        }
    }
}
