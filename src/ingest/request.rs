//! Request bodies for the reporting APIs
//!
//! The tool itself never calls the APIs; these bodies document (and let a
//! caller reproduce) the exact report shape the parsers expect.

use super::normalize_property_id;
use crate::DateRange;
use serde_json::{json, Value};

/// Rows requested from GA4, ordered by sessions
pub const GA4_ROW_LIMIT: u32 = 10;
/// Queries requested from Search Console
pub const SEARCH_CONSOLE_ROW_LIMIT: u32 = 20;

pub const GA4_DIMENSIONS: [&str; 2] = ["sessionDefaultChannelGrouping", "sessionSourceMedium"];
pub const GA4_METRICS: [&str; 6] = [
    "sessions",
    "totalUsers",
    "bounceRate",
    "averageSessionDuration",
    "screenPageViewsPerSession",
    "conversions",
];

/// `runReport` body for the traffic-source report
pub fn ga4_traffic_request(property_id: &str, range: &DateRange) -> Value {
    let dimensions: Vec<Value> = GA4_DIMENSIONS
        .iter()
        .map(|name| json!({ "name": name }))
        .collect();
    let metrics: Vec<Value> = GA4_METRICS
        .iter()
        .map(|name| json!({ "name": name }))
        .collect();

    json!({
        "property": normalize_property_id(property_id),
        "dateRanges": [{ "startDate": range.start(), "endDate": range.end() }],
        "dimensions": dimensions,
        "metrics": metrics,
        "orderBys": [{ "metric": { "metricName": "sessions" }, "desc": true }],
        "limit": GA4_ROW_LIMIT,
    })
}

/// `searchanalytics.query` body for the keyword report
pub fn search_console_request(range: &DateRange) -> Value {
    json!({
        "startDate": range.start(),
        "endDate": range.end(),
        "dimensions": ["query"],
        "rowLimit": SEARCH_CONSOLE_ROW_LIMIT,
        "startRow": 0,
    })
}
