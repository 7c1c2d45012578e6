//! Response formatting over looked-up records
//!
//! The formatters are tolerant of loosely-shaped records: malformed
//! breakdown entries are dropped, missing numeric fields default to zero,
//! and metadata passes through only when it is a JSON object.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::axes;
use crate::error::{Error, Result};
use crate::index::RecordIndex;
use crate::normalize::CanonicalKey;

/// One projected interference breakdown entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownEntry {
    pub axis: Option<String>,
    pub label: Option<String>,
    pub contribution: Option<f64>,
    pub interference: Option<f64>,
}

/// Interference score payload for a normalized objective combination
#[derive(Debug, Serialize)]
pub struct InterferenceResponse {
    pub objectives: Vec<String>,
    pub score: f64,
    pub score_base: f64,
    pub breakdown: Vec<BreakdownEntry>,
    pub redundancy_flags: Vec<String>,
}

/// Radar payload: parallel labels/values arrays in fixed axis order plus
/// the axes map
#[derive(Debug, Serialize)]
pub struct RadarResponse {
    pub objectives: Vec<String>,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub axes: BTreeMap<&'static str, f64>,
    pub meta: Map<String, Value>,
}

/// Minimal physiology payload, without the presentation arrays
#[derive(Debug, Serialize)]
pub struct PhysiologyResponse {
    pub objectives: Vec<String>,
    pub axes: BTreeMap<&'static str, f64>,
    pub meta: Map<String, Value>,
}

/// Shape an interference record into the stable response schema.
///
/// The empty key is the "no selection" case: a zero-valued payload, no
/// lookup attempted. A missing record is [`Error::RecordNotFound`].
pub fn format_interference(
    index: &RecordIndex,
    key: &CanonicalKey,
) -> Result<InterferenceResponse> {
    if key.is_empty() {
        return Ok(InterferenceResponse {
            objectives: Vec::new(),
            score: 0.0,
            score_base: 0.0,
            breakdown: Vec::new(),
            redundancy_flags: Vec::new(),
        });
    }

    let record = index.get(key).ok_or_else(|| Error::RecordNotFound {
        kind: index.kind(),
        objectives: key.to_vec(),
    })?;

    Ok(InterferenceResponse {
        objectives: key.to_vec(),
        score: number_field(record, "score"),
        score_base: number_field(record, "score_base"),
        breakdown: project_breakdown(record),
        redundancy_flags: redundancy_flags(record),
    })
}

/// Shape a physiology record into the radar response.
///
/// All five axes always appear, in fixed order, defaulting to 0.0 when the
/// record omits one.
pub fn format_radar(index: &RecordIndex, key: &CanonicalKey) -> Result<RadarResponse> {
    if key.is_empty() {
        return Ok(RadarResponse {
            objectives: Vec::new(),
            labels: axes::labels(),
            values: vec![0.0; axes::AXES.len()],
            axes: axes::AXES.iter().map(|axis| (axis.id, 0.0)).collect(),
            meta: Map::new(),
        });
    }

    let record = index.get(key).ok_or_else(|| Error::RecordNotFound {
        kind: index.kind(),
        objectives: key.to_vec(),
    })?;

    let values: Vec<f64> = axes::AXES
        .iter()
        .map(|axis| {
            record
                .get("axes")
                .and_then(|payload| payload.get(axis.id))
                .and_then(Value::as_f64)
                .unwrap_or(0.0)
        })
        .collect();
    let axes_map: BTreeMap<&'static str, f64> = axes::AXES
        .iter()
        .zip(values.iter())
        .map(|(axis, value)| (axis.id, *value))
        .collect();

    Ok(RadarResponse {
        objectives: key.to_vec(),
        labels: axes::labels(),
        values,
        axes: axes_map,
        meta: object_field(record, "meta"),
    })
}

/// The minimal physiology shape, projected from the radar formatting so
/// both transports share one policy.
pub fn format_physiology(index: &RecordIndex, key: &CanonicalKey) -> Result<PhysiologyResponse> {
    let radar = format_radar(index, key)?;
    Ok(PhysiologyResponse {
        objectives: radar.objectives,
        axes: radar.axes,
        meta: radar.meta,
    })
}

/// Non-object breakdown items are dropped rather than surfaced.
fn project_breakdown(record: &Value) -> Vec<BreakdownEntry> {
    record
        .get("breakdown")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter(|item| item.is_object())
                .map(|item| BreakdownEntry {
                    axis: string_field(item, "axis"),
                    label: string_field(item, "label"),
                    contribution: item.get("contribution").and_then(Value::as_f64),
                    interference: item.get("interference").and_then(Value::as_f64),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Redundancy flags live under `triple.flags`; anything that is not a list
/// collapses to empty, and non-string elements are dropped.
fn redundancy_flags(record: &Value) -> Vec<String> {
    record
        .get("triple")
        .and_then(|triple| triple.get("flags"))
        .and_then(Value::as_array)
        .map(|flags| {
            flags
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn number_field(record: &Value, field: &str) -> f64 {
    record.get(field).and_then(Value::as_f64).unwrap_or(0.0)
}

fn string_field(item: &Value, field: &str) -> Option<String> {
    item.get(field).and_then(Value::as_str).map(str::to_string)
}

fn object_field(record: &Value, field: &str) -> Map<String, Value> {
    record
        .get(field)
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}
