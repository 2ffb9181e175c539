//! Axum route handlers for the Response Types API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::response_types::registry::ResponseType;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct InstructionsRequest {
    /// Null or absent is treated as the empty string.
    #[serde(default)]
    pub response_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InstructionsResponse {
    pub response_type: String,
    pub instructions: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ListResponseTypesResponse {
    pub response_types: Vec<&'static str>,
    pub default_response_type: ResponseType,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/response-types
///
/// Lists every registered response type name in catalogue order.
pub async fn handle_list_response_types(
    State(state): State<AppState>,
) -> Json<ListResponseTypesResponse> {
    Json(ListResponseTypesResponse {
        response_types: state.registry.names(),
        default_response_type: ResponseType::default(),
    })
}

/// GET /api/v1/response-types/:name/instructions
///
/// Always succeeds; unknown names get the default instructions.
pub async fn handle_get_instructions(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<InstructionsResponse> {
    Json(lookup(&state, name))
}

/// POST /api/v1/response-types/instructions
///
/// Body variant of the lookup. Accepts names a path segment cannot carry,
/// including the empty string.
pub async fn handle_post_instructions(
    State(state): State<AppState>,
    payload: Result<Json<InstructionsRequest>, JsonRejection>,
) -> Result<Json<InstructionsResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let name = request.response_type.unwrap_or_default();

    Ok(Json(lookup(&state, name)))
}

fn lookup(state: &AppState, name: String) -> InstructionsResponse {
    if !state.registry.contains(&name) {
        tracing::debug!(response_type = %name, "Unknown response type, using default instructions");
    }
    let instructions = state.registry.instructions_for(&name);
    InstructionsResponse {
        response_type: name,
        instructions,
    }
}
