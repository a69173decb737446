//! Analysis engine - ranks records and runs the narrative rules

use crate::config::Config;
use crate::ingest::normalize_property_id;
use crate::{
    DateRange, KeywordAnalysis, KeywordRecord, KeywordSummary, TrafficAnalysis,
    TrafficSourceRecord,
};

use super::ranking::{rank_keywords, rank_traffic_sources};
use super::rules::{self, RuleSet};

/// Main analysis engine that orchestrates ranking and rules
#[derive(Debug, Clone, Default)]
pub struct AnalysisEngine {
    rules: RuleSet,
}

impl AnalysisEngine {
    /// Create a new analysis engine with every rule enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with the rule switches from a loaded config
    pub fn from_config(config: &Config) -> Self {
        Self::new().with_rules(config.rule_set())
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Rank traffic sources by quality and derive insights and recommendations
    pub fn analyze_traffic(
        &self,
        records: Vec<TrafficSourceRecord>,
        property: Option<&str>,
        date_range: DateRange,
    ) -> TrafficAnalysis {
        let sources = rank_traffic_sources(records);
        let total_sessions: u64 = sources.iter().map(TrafficSourceRecord::sessions).sum();
        tracing::debug!(
            sources = sources.len(),
            total_sessions,
            start = %date_range.start(),
            end = %date_range.end(),
            "analyzing traffic"
        );

        let insights = rules::traffic_insights(&sources, total_sessions, &self.rules);
        let recommendations = rules::traffic_recommendations(&sources, &self.rules);
        tracing::debug!(
            insights = insights.statements().len(),
            recommendations = recommendations.statements().len(),
            "traffic narrative ready"
        );

        TrafficAnalysis {
            property: property.map(normalize_property_id),
            date_range,
            sources,
            total_sessions,
            insights,
            recommendations,
        }
    }

    /// Rank keywords by clicks and derive insights and recommendations
    pub fn analyze_keywords(
        &self,
        records: Vec<KeywordRecord>,
        site_url: Option<&str>,
        date_range: DateRange,
    ) -> KeywordAnalysis {
        let keywords = rank_keywords(records);
        let summary = KeywordSummary::from_records(&keywords);
        tracing::debug!(
            keywords = keywords.len(),
            total_clicks = summary.total_clicks,
            total_impressions = summary.total_impressions,
            start = %date_range.start(),
            end = %date_range.end(),
            "analyzing keywords"
        );

        let insights = rules::keyword_insights(&keywords, &summary, &self.rules);
        let recommendations = rules::keyword_recommendations(&keywords, &self.rules);
        tracing::debug!(
            insights = insights.statements().len(),
            recommendations = recommendations.statements().len(),
            "keyword narrative ready"
        );

        KeywordAnalysis {
            site_url: site_url.map(str::to_string),
            date_range,
            keywords,
            summary,
            insights,
            recommendations,
        }
    }
}
