//! API Handlers
//!
//! HTTP request handlers for each mapping service endpoint. Each handler is
//! stateless across invocations: parse input, one store call, format the
//! response.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::error::{Result, ServiceError};
use crate::models::{CreateRequest, CreateResponse, HealthResponse};
use crate::store::{Mapping, MappingStore};
use crate::token;

/// Application state shared across all handlers.
///
/// Holds the injected mapping store; handlers keep no other state.
#[derive(Clone)]
pub struct AppState {
    /// The mapping store backend
    pub store: Arc<dyn MappingStore>,
}

impl AppState {
    /// Creates a new AppState around the given store.
    pub fn new(store: Arc<dyn MappingStore>) -> Self {
        Self { store }
    }
}

/// Handler for POST /shorten
///
/// Generates a short token for the submitted URL, writes the mapping to the
/// store, and returns the token.
pub async fn create_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateRequest>, JsonRejection>,
) -> Result<Json<CreateResponse>> {
    // A body that fails JSON extraction is an internal fault; only the
    // missing/empty field case is a validation failure.
    let Json(req) = payload.map_err(|e| ServiceError::Internal(e.to_string()))?;

    let original_url = req
        .into_original_url()
        .ok_or_else(|| ServiceError::Validation("OriginalURL is required".to_string()))?;

    let short_url = token::generate();
    state
        .store
        .put(Mapping::new(short_url.clone(), original_url))
        .await?;

    info!(%short_url, "Created mapping");
    Ok(Json(CreateResponse::new(short_url)))
}

/// Handler for GET /:short_url
///
/// Looks up the mapping for the token and redirects to the original URL
/// with an empty body.
pub async fn resolve_handler(
    State(state): State<AppState>,
    Path(short_url): Path<String>,
) -> Result<Response> {
    match state.store.get(&short_url).await? {
        Some(mapping) => {
            info!(%short_url, original_url = %mapping.original_url, "Redirecting");
            Ok((StatusCode::FOUND, [(header::LOCATION, mapping.original_url)]).into_response())
        }
        None => Err(ServiceError::NotFound(short_url)),
    }
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
