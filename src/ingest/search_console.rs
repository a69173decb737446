//! Search Console `searchanalytics.query` responses, one row per query

use super::{count, fraction_to_percent, metric, text};
use crate::{KeywordMetrics, KeywordRecord, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    rows: Vec<QueryRow>,
}

#[derive(Debug, Deserialize)]
struct QueryRow {
    #[serde(default)]
    keys: Vec<Value>,
    clicks: Option<Value>,
    impressions: Option<Value>,
    ctr: Option<Value>,
    position: Option<Value>,
}

/// Read and parse a saved `searchanalytics.query` response
pub fn read_report(path: &Path) -> Result<Vec<KeywordRecord>> {
    let content = fs::read_to_string(path)?;
    parse_report(&content)
}

/// Parse a `searchanalytics.query` response body into scored keywords (in report order)
pub fn parse_report(json: &str) -> Result<Vec<KeywordRecord>> {
    let response: QueryResponse = serde_json::from_str(json)?;
    tracing::debug!(rows = response.rows.len(), "parsing Search Console report");
    response
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| parse_row(index, row))
        .collect()
}

fn parse_row(index: usize, row: &QueryRow) -> Result<KeywordRecord> {
    let parsed = KeywordMetrics {
        keyword: text(index, "query", row.keys.first())?,
        clicks: count(index, "clicks", row.clicks.as_ref())?,
        impressions: count(index, "impressions", row.impressions.as_ref())?,
        ctr: fraction_to_percent(metric(index, "ctr", row.ctr.as_ref())?),
        position: metric(index, "position", row.position.as_ref())?,
    };
    KeywordRecord::new(parsed).map_err(|e| e.at_row(index))
}
