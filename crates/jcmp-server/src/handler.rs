use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Json;
use serde::Serialize;
use tracing::info;

use jcmp_core::{Comparer, ComparerResponse};
use jcmp_store::{decode_document, DocumentStore, Side};

use crate::error::{ServerError, ServerResult};

/// Body returned once a document has been stored.
pub const SAVED_MESSAGE: &str = "Your input has been successfully saved!";

/// Body returned once the documents of an id have been dropped.
pub const REMOVED_MESSAGE: &str = "Your input has been successfully removed!";

/// Shared state behind every handler.
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub comparer: Comparer,
}

/// Health check response.
#[derive(Clone, Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Store the Base64 body as the left or right document of `id`.
pub async fn submit_handler(
    State(state): State<Arc<AppState>>,
    Path((id, side)): Path<(String, String)>,
    Json(encoded): Json<String>,
) -> ServerResult<Json<&'static str>> {
    let side: Side = side.parse().map_err(|_| ServerError::UnknownSide(side))?;
    state.store.put(&id, side, encoded)?;
    Ok(Json(SAVED_MESSAGE))
}

/// Decode both documents of `id` and compare them.
pub async fn diff_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ServerResult<Json<ComparerResponse>> {
    let (left, right) = state
        .store
        .pair(&id)?
        .ok_or_else(|| ServerError::MissingDocument { id: id.clone() })?;

    // Decoding and comparing run on the blocking pool.
    let comparer = state.comparer.clone();
    let response = tokio::task::spawn_blocking(move || -> ServerResult<ComparerResponse> {
        let left = decode_document(Side::Left, &left)?;
        let right = decode_document(Side::Right, &right)?;
        Ok(comparer.compare(&left, &right)?)
    })
    .await
    .map_err(|err| ServerError::Internal(err.to_string()))??;

    info!(%id, outcome = response.outcome.label(), "diff computed");
    Ok(Json(response))
}

/// Drop both documents of `id`.
pub async fn remove_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ServerResult<Json<&'static str>> {
    if !state.store.remove(&id)? {
        return Err(ServerError::UnknownId { id });
    }
    info!(%id, "documents removed");
    Ok(Json(REMOVED_MESSAGE))
}
