//! Shared request extraction for the objective-selection endpoints

use serde::Deserialize;

/// Objective selection request body (POST transport)
#[derive(Debug, Deserialize)]
pub struct ObjectivesRequest {
    #[serde(default)]
    pub objectives: Vec<String>,
}

/// Collect every `objectives` parameter from a raw query string
/// (GET transport).
///
/// `axum::extract::Query` cannot deserialize repeated keys into a Vec, so
/// the pairs are split and percent-decoded here. Undecodable values are
/// dropped.
pub fn objectives_from_query(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    raw.split('&')
        .filter_map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            if name != "objectives" {
                return None;
            }
            let value = value.replace('+', " ");
            urlencoding::decode(&value)
                .ok()
                .map(|decoded| decoded.into_owned())
        })
        .collect()
}
