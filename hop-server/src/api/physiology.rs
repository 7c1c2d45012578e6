//! Physiological profile endpoints

use axum::extract::{RawQuery, State};
use axum::Json;

use hop_common::format::{format_physiology, format_radar, PhysiologyResponse, RadarResponse};
use hop_common::normalize::normalize;

use crate::api::error::ApiResult;
use crate::api::request::{objectives_from_query, ObjectivesRequest};
use crate::AppState;

/// POST /api/radar
///
/// Returns the aggregated physiological profile for the selected
/// objectives, with labels/values arrays in fixed axis order. An empty
/// selection returns all five axes at zero.
pub async fn radar(
    State(state): State<AppState>,
    Json(request): Json<ObjectivesRequest>,
) -> ApiResult<Json<RadarResponse>> {
    let key = normalize(&state.catalog, &request.objectives)?;
    Ok(Json(format_radar(&state.physiology, &key)?))
}

/// GET /api/physiology?objectives=a&objectives=b
///
/// Minimal payload shape: objectives, axes map, metadata.
pub async fn physiology_query(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> ApiResult<Json<PhysiologyResponse>> {
    let objectives = objectives_from_query(query.as_deref());
    let key = normalize(&state.catalog, &objectives)?;
    Ok(Json(format_physiology(&state.physiology, &key)?))
}
