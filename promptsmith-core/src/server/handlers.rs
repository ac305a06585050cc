use axum::{Json, body::Bytes, extract::State};
use chrono::Utc;
use serde_json::{Value, json};

use super::{ApiError, ServerState};
use crate::registry::get_available_models_by_modality;
use crate::request::{self, GenerateRequest, GenerateResponse};

pub(super) async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

pub(super) async fn models() -> Json<Value> {
    Json(json!({ "models": get_available_models_by_modality() }))
}

pub(super) async fn generate(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<Json<GenerateResponse>, ApiError> {
    let request = GenerateRequest::from_body(&body, &state.limits).map_err(|err| {
        tracing::warn!(error = %err, "rejected generate request");
        ApiError::bad_request(err.to_string())
    })?;

    tracing::info!(
        model = %request.model,
        modality = %request.modality,
        "generating prompt"
    );

    let response = request::generate(&request, &state.compiler).map_err(|err| {
        tracing::warn!(model = %request.model, error = %err, "prompt generation failed");
        ApiError::from(err)
    })?;

    tracing::debug!(model = %response.model, chars = response.prompt.len(), "prompt generated");
    Ok(Json(response))
}

pub(super) async fn not_found() -> ApiError {
    ApiError::not_found()
}

pub(super) async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}
