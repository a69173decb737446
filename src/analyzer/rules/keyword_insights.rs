//! Insights about ranked keywords.

use super::{KeywordContext, RuleEntry};
use crate::messages::{format_count, format_decimal};
use crate::{KeywordRecord, MessageId, RuleId, Statement};

const TOP_THREE: f64 = 3.0;
const FIRST_PAGE: f64 = 10.0;
const HIGH_CTR: f64 = 5.0;
/// Impressions above which a page-two keyword is worth pushing
const GOLDEN_IMPRESSIONS: u64 = 1000;

pub const KEYWORD_INSIGHTS: &[RuleEntry<KeywordRecord, KeywordContext>] = &[
    RuleEntry {
        id: RuleId::TopKeyword,
        evaluate: top_keyword,
    },
    RuleEntry {
        id: RuleId::PositionTier,
        evaluate: position_tier,
    },
    RuleEntry {
        id: RuleId::HighCtr,
        evaluate: high_ctr,
    },
    RuleEntry {
        id: RuleId::GoldenOpportunity,
        evaluate: golden_opportunity,
    },
    RuleEntry {
        id: RuleId::SearchSummary,
        evaluate: search_summary,
    },
];

pub fn top_keyword(records: &[KeywordRecord], _ctx: &KeywordContext) -> Option<Statement> {
    let top = records.first()?;
    Some(
        Statement::new(RuleId::TopKeyword, MessageId::TopKeyword)
            .arg("keyword", top.keyword())
            .arg("clicks", format_count(top.clicks())),
    )
}

/// Where the top keyword sits: top three, first page, or beyond
pub fn position_tier(records: &[KeywordRecord], _ctx: &KeywordContext) -> Option<Statement> {
    let top = records.first()?;
    let position = top.rounded_position();
    let message = if position <= TOP_THREE {
        MessageId::PositionExcellent
    } else if position <= FIRST_PAGE {
        MessageId::PositionImprovable
    } else {
        MessageId::PositionPoor
    };
    Some(
        Statement::new(RuleId::PositionTier, message)
            .arg("keyword", top.keyword())
            .arg("position", format_decimal(position, 1)),
    )
}

pub fn high_ctr(records: &[KeywordRecord], _ctx: &KeywordContext) -> Option<Statement> {
    let count = records.iter().filter(|r| r.rounded_ctr() > HIGH_CTR).count();
    (count > 0).then(|| {
        Statement::new(RuleId::HighCtr, MessageId::HighCtr).arg("count", count.to_string())
    })
}

pub fn golden_opportunity(records: &[KeywordRecord], _ctx: &KeywordContext) -> Option<Statement> {
    let count = records
        .iter()
        .filter(|r| r.impressions() > GOLDEN_IMPRESSIONS && r.rounded_position() > FIRST_PAGE)
        .count();
    (count > 0).then(|| {
        Statement::new(RuleId::GoldenOpportunity, MessageId::GoldenOpportunity)
            .arg("count", count.to_string())
    })
}

pub fn search_summary(records: &[KeywordRecord], ctx: &KeywordContext) -> Option<Statement> {
    if records.is_empty() {
        return None;
    }
    let summary = &ctx.summary;
    Some(
        Statement::new(RuleId::SearchSummary, MessageId::SearchSummary)
            .arg("clicks", format_count(summary.total_clicks))
            .arg("impressions", format_count(summary.total_impressions))
            .arg("ctr", format_decimal(summary.average_ctr, 2)),
    )
}
