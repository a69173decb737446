//! Narrative rules for insights and recommendations
//!
//! Each rule is a pure function from the ranked records to at most one
//! [`Statement`]. Rules are grouped into ordered tables and evaluated top to
//! bottom; every rule sees the full ranked sequence, never the output of the
//! rules before it.

pub mod keyword_insights;
pub mod keyword_recommendations;
pub mod traffic_insights;
pub mod traffic_recommendations;

pub use keyword_insights::KEYWORD_INSIGHTS;
pub use keyword_recommendations::KEYWORD_RECOMMENDATIONS;
pub use traffic_insights::TRAFFIC_INSIGHTS;
pub use traffic_recommendations::TRAFFIC_RECOMMENDATIONS;

use crate::{
    KeywordRecord, KeywordSummary, MessageId, Narrative, RuleId, Statement, TrafficSourceRecord,
};
use std::collections::HashSet;

/// One row of a rule table
pub struct RuleEntry<R, C> {
    pub id: RuleId,
    pub evaluate: fn(&[R], &C) -> Option<Statement>,
}

/// Aggregates available to traffic rules
#[derive(Debug, Clone, Copy)]
pub struct TrafficContext {
    pub total_sessions: u64,
}

/// Aggregates available to keyword rules
#[derive(Debug, Clone, Copy)]
pub struct KeywordContext {
    pub summary: KeywordSummary,
}

/// Which rules are switched on
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    disabled: HashSet<RuleId>,
}

impl RuleSet {
    /// Every rule enabled
    pub fn all() -> Self {
        Self::default()
    }

    pub fn disable(mut self, rule: RuleId) -> Self {
        self.disabled.insert(rule);
        self
    }

    pub fn is_enabled(&self, rule: RuleId) -> bool {
        !self.disabled.contains(&rule)
    }
}

/// Evaluate a rule table over ranked records.
///
/// Empty input short-circuits to the placeholder; no rule runs.
pub fn run_table<R, C>(
    table: &[RuleEntry<R, C>],
    records: &[R],
    context: &C,
    placeholder: MessageId,
    rules: &RuleSet,
) -> Narrative {
    if records.is_empty() {
        return Narrative::Placeholder(placeholder);
    }

    let statements = table
        .iter()
        .filter(|entry| rules.is_enabled(entry.id))
        .filter_map(|entry| (entry.evaluate)(records, context))
        .collect();
    Narrative::Statements(statements)
}

/// First record in rank order matching `predicate`
pub fn find_first<R>(records: &[R], predicate: impl Fn(&R) -> bool) -> Option<&R> {
    records.iter().find(|record| predicate(record))
}

/// Insights for ranked traffic sources
pub fn traffic_insights(
    records: &[TrafficSourceRecord],
    total_sessions: u64,
    rules: &RuleSet,
) -> Narrative {
    run_table(
        TRAFFIC_INSIGHTS,
        records,
        &TrafficContext { total_sessions },
        MessageId::TrafficNoData,
        rules,
    )
}

/// Recommendations for ranked traffic sources.
///
/// No recommendation reads the session total, so the context carries none.
pub fn traffic_recommendations(records: &[TrafficSourceRecord], rules: &RuleSet) -> Narrative {
    run_table(
        TRAFFIC_RECOMMENDATIONS,
        records,
        &TrafficContext { total_sessions: 0 },
        MessageId::TrafficNoRecommendations,
        rules,
    )
}

/// Insights for ranked keywords
pub fn keyword_insights(
    records: &[KeywordRecord],
    summary: &KeywordSummary,
    rules: &RuleSet,
) -> Narrative {
    run_table(
        KEYWORD_INSIGHTS,
        records,
        &KeywordContext { summary: *summary },
        MessageId::KeywordNoData,
        rules,
    )
}

/// Recommendations for ranked keywords
pub fn keyword_recommendations(records: &[KeywordRecord], rules: &RuleSet) -> Narrative {
    run_table(
        KEYWORD_RECOMMENDATIONS,
        records,
        &KeywordContext {
            summary: KeywordSummary::from_records(records),
        },
        MessageId::KeywordNoRecommendations,
        rules,
    )
}
