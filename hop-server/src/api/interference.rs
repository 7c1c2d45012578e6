//! Interference endpoints

use axum::extract::{RawQuery, State};
use axum::Json;

use hop_common::format::{format_interference, InterferenceResponse};
use hop_common::normalize::normalize;

use crate::api::error::ApiResult;
use crate::api::request::{objectives_from_query, ObjectivesRequest};
use crate::AppState;

/// POST /api/interference
///
/// Returns the interference score and breakdown for the selected
/// objectives. An empty selection returns the zero-valued default payload.
pub async fn interference(
    State(state): State<AppState>,
    Json(request): Json<ObjectivesRequest>,
) -> ApiResult<Json<InterferenceResponse>> {
    let key = normalize(&state.catalog, &request.objectives)?;
    Ok(Json(format_interference(&state.interference, &key)?))
}

/// GET /api/interference?objectives=a&objectives=b
///
/// Query-parameter transport for the same payload.
pub async fn interference_query(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> ApiResult<Json<InterferenceResponse>> {
    let objectives = objectives_from_query(query.as_deref());
    let key = normalize(&state.catalog, &objectives)?;
    Ok(Json(format_interference(&state.interference, &key)?))
}
