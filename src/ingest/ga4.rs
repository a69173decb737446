//! GA4 Data API `runReport` responses
//!
//! Expected layout: two dimensions (channel grouping, source/medium) and six
//! metrics in the order requested by [`super::request::ga4_traffic_request`].
//! The conversions metric is optional and defaults to zero.

use super::{count, fraction_to_percent, metric, text};
use crate::{Error, Result, TrafficMetrics, TrafficSourceRecord};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RunReportResponse {
    #[serde(default)]
    rows: Vec<ReportRow>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportRow {
    #[serde(default)]
    dimension_values: Vec<CellValue>,
    #[serde(default)]
    metric_values: Vec<CellValue>,
}

#[derive(Debug, Deserialize)]
struct CellValue {
    #[serde(default)]
    value: Option<Value>,
}

fn cell(cells: &[CellValue], index: usize) -> Option<&Value> {
    cells.get(index).and_then(|c| c.value.as_ref())
}

/// Read and parse a saved `runReport` response
pub fn read_report(path: &Path) -> Result<Vec<TrafficSourceRecord>> {
    let content = fs::read_to_string(path)?;
    parse_report(&content)
}

/// Parse a `runReport` response body into scored traffic sources (in report order)
pub fn parse_report(json: &str) -> Result<Vec<TrafficSourceRecord>> {
    let response: RunReportResponse = serde_json::from_str(json)?;
    tracing::debug!(rows = response.rows.len(), "parsing GA4 report");
    response
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| parse_row(index, row))
        .collect()
}

fn parse_row(index: usize, row: &ReportRow) -> Result<TrafficSourceRecord> {
    let dims = &row.dimension_values;
    let metrics = &row.metric_values;

    let conversions = match cell(metrics, 5) {
        Some(value) => count(index, "conversions", Some(value))?,
        None => 0,
    };

    let parsed = TrafficMetrics {
        source: text(index, "sessionDefaultChannelGrouping", cell(dims, 0))?,
        source_medium: text(index, "sessionSourceMedium", cell(dims, 1))?,
        sessions: count(index, "sessions", cell(metrics, 0))?,
        users: count(index, "totalUsers", cell(metrics, 1))?,
        bounce_rate: fraction_to_percent(metric(index, "bounceRate", cell(metrics, 2))?),
        avg_session_duration: metric(index, "averageSessionDuration", cell(metrics, 3))?,
        pages_per_session: metric(index, "screenPageViewsPerSession", cell(metrics, 4))?,
        conversions,
    };

    TrafficSourceRecord::new(parsed).map_err(|e: Error| e.at_row(index))
}
