//! Route handlers.

use super::{ApiError, ApiResponse, AppState};
use crate::{server_state::domain::ServerState, vocab::domain::VocabEntry};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// Query parameters accepted by the autocomplete endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct VocabSearchParams {
    filter: Option<String>,
    limit: Option<usize>,
}

/// Body for adding a vocabulary word.
#[derive(Debug, Deserialize)]
pub struct AddWordRequest {
    word: String,
}

/// Body for recording a server status.
#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    status: bool,
}

pub async fn health_check() -> Json<ApiResponse<Value>> {
    Json(ApiResponse::ok(json!({ "status": "ok" })))
}

pub async fn search_vocab(
    State(state): State<AppState>,
    params: Result<Query<VocabSearchParams>, QueryRejection>,
) -> ApiResult<Vec<VocabEntry>> {
    let Query(params) = params?;
    let entries = state
        .vocab
        .autocomplete(params.filter.as_deref(), params.limit)
        .await?;
    Ok(Json(ApiResponse::ok(entries)))
}

pub async fn add_vocab_word(
    State(state): State<AppState>,
    request: Result<Json<AddWordRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<VocabEntry>>), ApiError> {
    let Json(request) = request?;
    let entry = state.vocab.add_word(&request.word).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(entry))))
}

pub async fn list_server_states(State(state): State<AppState>) -> ApiResult<Vec<ServerState>> {
    let states = state.server_state.list_all().await?;
    Ok(Json(ApiResponse::ok(states)))
}

pub async fn get_server_state(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<ServerState> {
    let Path(id) = id?;
    let found = state.server_state.find(&id).await?;
    found
        .map(|server_state| Json(ApiResponse::ok(server_state)))
        .ok_or_else(|| ApiError::NotFound(format!("server state not found: {id}")))
}

pub async fn track_server_state(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<ServerState> {
    let Path(id) = id?;
    let tracked = state.server_state.track(&id).await?;
    Ok(Json(ApiResponse::ok(tracked)))
}

pub async fn record_server_status(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    request: Result<Json<StatusUpdateRequest>, JsonRejection>,
) -> ApiResult<ServerState> {
    let Path(id) = id?;
    let Json(request) = request?;
    let updated = state.server_state.record_status(&id, request.status).await?;
    Ok(Json(ApiResponse::ok(updated)))
}

pub async fn admin_not_found() -> ApiError {
    ApiError::NotFound("no such administrative route".to_owned())
}
