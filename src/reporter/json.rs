//! JSON reporter for machine-readable output
//!
//! Success and failure share one envelope shape keyed by `success`, so a
//! consumer can branch on a single field.

use super::HtmlReporter;
use crate::{
    DateRange, KeywordAnalysis, KeywordRecord, KeywordSummary, TrafficAnalysis,
    TrafficSourceRecord,
};
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    html: HtmlReporter,
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Narratives are embedded as fragments rendered by `html`
    pub fn new(html: HtmlReporter) -> Self {
        Self {
            html,
            pretty: false,
        }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    pub fn report_traffic(&self, analysis: &TrafficAnalysis) -> String {
        self.to_string(&TrafficEnvelope {
            success: true,
            property: analysis.property.as_deref(),
            date_range: &analysis.date_range,
            total_sessions: analysis.total_sessions,
            traffic_sources: &analysis.sources,
            insights: self.html.fragment(&analysis.insights),
            recommendations: self.html.fragment(&analysis.recommendations),
        })
    }

    pub fn report_keywords(&self, analysis: &KeywordAnalysis) -> String {
        let keywords = analysis
            .keywords
            .iter()
            .map(|record| KeywordEntry {
                record,
                traffic_potential_label: self
                    .html
                    .catalog()
                    .potential_label(record.traffic_potential()),
            })
            .collect();

        self.to_string(&KeywordEnvelope {
            success: true,
            site_url: analysis.site_url.as_deref(),
            date_range: &analysis.date_range,
            summary: &analysis.summary,
            keywords,
            insights: self.html.fragment(&analysis.insights),
            recommendations: self.html.fragment(&analysis.recommendations),
        })
    }

    /// Failure envelope: `{"success": false, "error": "..."}`
    pub fn report_error(&self, message: &str) -> String {
        self.to_string(&ErrorEnvelope {
            success: false,
            error: message,
        })
    }

    fn to_string<T: Serialize>(&self, value: &T) -> String {
        let fallback = || r#"{"success":false,"error":"serialization failed"}"#.to_string();
        if self.pretty {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| fallback())
        } else {
            serde_json::to_string(value).unwrap_or_else(|_| fallback())
        }
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new(HtmlReporter::default())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TrafficEnvelope<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    property: Option<&'a str>,
    date_range: &'a DateRange,
    total_sessions: u64,
    traffic_sources: &'a [TrafficSourceRecord],
    insights: String,
    recommendations: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct KeywordEnvelope<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    site_url: Option<&'a str>,
    date_range: &'a DateRange,
    summary: &'a KeywordSummary,
    keywords: Vec<KeywordEntry<'a>>,
    insights: String,
    recommendations: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct KeywordEntry<'a> {
    #[serde(flatten)]
    record: &'a KeywordRecord,
    traffic_potential_label: String,
}

#[derive(Serialize)]
struct ErrorEnvelope<'a> {
    success: bool,
    error: &'a str,
}
