//! Ranking of scored records
//!
//! Traffic sources rank by quality score while keywords rank by raw clicks,
//! so the keyword table leads with volume. Both sorts are stable.

use crate::{KeywordRecord, TrafficSourceRecord};

/// Order traffic sources by quality score, best first
pub fn rank_traffic_sources(mut records: Vec<TrafficSourceRecord>) -> Vec<TrafficSourceRecord> {
    records.sort_by(|a, b| b.quality_score().cmp(&a.quality_score()));
    records
}

/// Order keywords by clicks, most clicked first
pub fn rank_keywords(mut records: Vec<KeywordRecord>) -> Vec<KeywordRecord> {
    records.sort_by(|a, b| b.clicks().cmp(&a.clicks()));
    records
}
