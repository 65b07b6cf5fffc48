//! API Handlers
use crate::contact::{ContactRequest, CONTACT_CONFIRMATION};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;
use voyage_core::{PageState, VOYAGE_VERSION};
use voyage_wizard::{Navigation, WizardAction};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct StartWizard {
    pub destination: String,
}

pub async fn health() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok", "version": VOYAGE_VERSION })))
}

pub async fn search_destinations(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>, ApiError> {
    let outcome = state.catalog.search(&params.q);
    Ok(Json(serde_json::to_value(&outcome)?))
}

fn page_status<T>(page: &PageState<T>) -> StatusCode {
    if page.is_failed() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    }
}

pub async fn get_destination(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let page = state.destinations.load_page(&slug).await;
    (page_status(&page), Json(page))
}

pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let page = state.home.load_page().await;
    (page_status(&page), Json(page))
}

pub async fn start_wizard(
    State(state): State<AppState>,
    Json(payload): Json<StartWizard>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let destination = state.catalog.select(&payload.destination)?;
    let wizard = state.start_wizard(destination);
    let snapshot = wizard.snapshot(&state.renderer)?;

    let (id, started_at) = state.sessions.insert(wizard).await;
    state.metrics.active_sessions.inc();
    tracing::info!(%id, destination = %payload.destination, "itinerary wizard opened");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": id, "startedAt": started_at, "wizard": snapshot })),
    ))
}

pub async fn get_wizard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let renderer = state.renderer.clone();
    state
        .sessions
        .with(id, |session| {
            let snapshot = session.wizard.snapshot(&renderer)?;
            Ok(Json(json!({
                "id": id,
                "startedAt": session.started_at,
                "wizard": snapshot,
            })))
        })
        .await
}

/// Forwards one action; an exit closes the session
pub async fn wizard_action(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(action): Json<WizardAction>,
) -> Result<Json<Value>, ApiError> {
    let renderer = state.renderer.clone();
    let (navigation, snapshot) = state
        .sessions
        .with(id, |session| {
            let navigation = session.wizard.apply(action)?;
            let snapshot = session.wizard.snapshot(&renderer)?;
            Ok((navigation, snapshot))
        })
        .await?;

    let open = match navigation {
        Navigation::Exited { .. } => {
            if state.sessions.remove(id).await {
                state.metrics.active_sessions.dec();
            }
            false
        }
        _ => true,
    };

    Ok(Json(json!({
        "id": id,
        "navigation": navigation,
        "open": open,
        "wizard": snapshot,
    })))
}

/// Validates a get-in-touch form and hands the lead to the travel experts
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let lead = match request.validate() {
        Ok(lead) => lead,
        Err(errors) => {
            state.metrics.contact_requests.with_label_values(&["rejected"]).inc();
            return Err(ApiError::InvalidContact(errors));
        }
    };

    let id = Uuid::new_v4();
    state.metrics.contact_requests.with_label_values(&["accepted"]).inc();
    tracing::info!(%id, budget = lead.budget.value(), "contact request received");

    Ok((
        StatusCode::ACCEPTED,
        Json(json!({
            "id": id,
            "status": "received",
            "message": CONTACT_CONFIRMATION,
            "budgetLabel": lead.budget.label(),
            "lead": lead,
        })),
    ))
}

pub async fn metrics(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let body = state.metrics.encode()?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    ))
}
