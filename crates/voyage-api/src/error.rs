//! API error type and its HTTP mapping.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use crate::contact::ContactFieldError;
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;
use voyage_catalog::CatalogError;
use voyage_core::VoyageError;
use voyage_wizard::WizardError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("wizard session {0} not found")]
    SessionNotFound(Uuid),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Wizard(#[from] WizardError),

    #[error(transparent)]
    Core(#[from] VoyageError),

    #[error("invalid contact request ({} field(s))", .0.len())]
    InvalidContact(Vec<ContactFieldError>),

    #[error("CONFIG/{0}")]
    Config(String),

    #[error("metrics: {0}")]
    Metrics(#[from] prometheus::Error),

    #[error("serialization: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::SessionNotFound(_) => StatusCode::NOT_FOUND,
            Self::Catalog(CatalogError::UnknownDestination(_)) => StatusCode::NOT_FOUND,
            Self::Wizard(WizardError::NotOnStep { .. }) => StatusCode::CONFLICT,
            Self::Wizard(WizardError::InvalidChoice(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidContact(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::SessionNotFound(_) => "SESSION",
            Self::Catalog(err) => VoyageError::from(err.clone()).code(),
            Self::Wizard(err) => VoyageError::from(err.clone()).code(),
            Self::InvalidContact(_) => "CONTACT",
            Self::Core(err) => err.code(),
            Self::Config(_) => "CONFIG",
            Self::Metrics(_) | Self::Serialize(_) | Self::Io(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let mut body = json!({ "error": self.code(), "message": self.to_string() });
        if let Self::InvalidContact(errors) = &self {
            body["fields"] = errors
                .iter()
                .map(|e| json!({ "field": e.field(), "message": e.to_string() }))
                .collect();
        }
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voyage_wizard::Step;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::SessionNotFound(Uuid::nil()).status(), StatusCode::NOT_FOUND);
        let conflict = ApiError::from(WizardError::NotOnStep {
            expected: Step::Rooms,
            actual: Step::Duration,
        });
        assert_eq!(conflict.status(), StatusCode::CONFLICT);
        assert_eq!(conflict.code(), "WIZARD");
        assert_eq!(
            ApiError::from(CatalogError::UnknownDestination("Atlantis".into())).code(),
            "CATALOG"
        );
        let contact = ApiError::InvalidContact(vec![ContactFieldError::InvalidEmail]);
        assert_eq!(contact.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(contact.code(), "CONTACT");
        assert_eq!(
            ApiError::from(VoyageError::ConfigError("x".into())).code(),
            "CONFIG"
        );
    }
}
