//! Quality score calculation for traffic sources and keywords

use crate::{KeywordScoreBreakdown, TrafficPotential, TrafficScoreBreakdown};

/// Session duration that earns a full duration score (10 minutes)
const DURATION_CAP_SECS: f64 = 600.0;
/// Pages per session that earn a full pages score
const PAGES_CAP: f64 = 10.0;
/// Conversion rate multiplier: a 10% conversion rate saturates the sub-score
const CONVERSION_RATE_FACTOR: f64 = 10.0;

const WEIGHT_DURATION: f64 = 0.30;
const WEIGHT_BOUNCE: f64 = 0.30;
const WEIGHT_PAGES: f64 = 0.20;
const WEIGHT_CONVERSION: f64 = 0.20;

/// CTR multiplier: a 20% CTR saturates the sub-score
const CTR_FACTOR: f64 = 5.0;
const CLICKS_CAP: f64 = 1000.0;
const IMPRESSIONS_CAP: f64 = 10_000.0;

const WEIGHT_CTR: f64 = 0.40;
const WEIGHT_POSITION: f64 = 0.30;
const WEIGHT_CLICKS: f64 = 0.20;
const WEIGHT_IMPRESSIONS: f64 = 0.10;

/// CTR assumed reachable once a keyword ranks in the top three
const POTENTIAL_CTR: f64 = 25.0;
/// Positions at or above this are considered fully realized
const TOP_POSITION: f64 = 3.0;
const MEDIUM_POTENTIAL_MIN: f64 = 10.0;
const HIGH_POTENTIAL_MIN: f64 = 100.0;

/// Calculator for quality scores and traffic potential
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Sub-scores for a traffic source, each clamped to 0-100
    pub fn traffic_breakdown(
        avg_duration_secs: f64,
        bounce_rate: f64,
        pages_per_session: f64,
        conversions: u64,
        sessions: u64,
    ) -> TrafficScoreBreakdown {
        let conversion_rate = if sessions > 0 {
            conversions as f64 / sessions as f64 * 100.0
        } else {
            0.0
        };

        TrafficScoreBreakdown {
            duration: clamp_score((avg_duration_secs / DURATION_CAP_SECS).min(1.0) * 100.0),
            bounce: clamp_score(100.0 - bounce_rate),
            pages: clamp_score((pages_per_session / PAGES_CAP).min(1.0) * 100.0),
            conversion: clamp_score(conversion_rate * CONVERSION_RATE_FACTOR),
        }
    }

    /// Quality score (0-100) of a traffic source
    pub fn traffic_quality(
        avg_duration_secs: f64,
        bounce_rate: f64,
        pages_per_session: f64,
        conversions: u64,
        sessions: u64,
    ) -> u8 {
        Self::traffic_breakdown(
            avg_duration_secs,
            bounce_rate,
            pages_per_session,
            conversions,
            sessions,
        )
        .total()
    }

    /// Sub-scores for a search keyword, each clamped to 0-100
    pub fn keyword_breakdown(
        clicks: u64,
        impressions: u64,
        ctr: f64,
        position: f64,
    ) -> KeywordScoreBreakdown {
        let clicks_score = if clicks > 0 {
            clicks as f64 / CLICKS_CAP * 100.0
        } else {
            0.0
        };
        let impressions_score = if impressions > 0 {
            impressions as f64 / IMPRESSIONS_CAP * 100.0
        } else {
            0.0
        };

        KeywordScoreBreakdown {
            ctr: clamp_score(ctr * CTR_FACTOR),
            position: clamp_score(110.0 - position * 10.0),
            clicks: clamp_score(clicks_score),
            impressions: clamp_score(impressions_score),
        }
    }

    /// Quality score (0-100) of a search keyword
    pub fn keyword_quality(clicks: u64, impressions: u64, ctr: f64, position: f64) -> u8 {
        Self::keyword_breakdown(clicks, impressions, ctr, position).total()
    }

    /// Additional clicks a keyword could gain by reaching the top three
    pub fn traffic_potential(
        impressions: u64,
        position: f64,
        current_ctr: f64,
    ) -> TrafficPotential {
        if position <= TOP_POSITION {
            return TrafficPotential::FullyRealized;
        }

        let impressions = impressions as f64;
        let potential_clicks = impressions * (POTENTIAL_CTR / 100.0);
        let current_clicks = impressions * (current_ctr / 100.0);
        let additional = (potential_clicks - current_clicks).max(0.0);

        if additional < MEDIUM_POTENTIAL_MIN {
            TrafficPotential::Low
        } else if additional < HIGH_POTENTIAL_MIN {
            TrafficPotential::Medium {
                additional_clicks: additional.floor() as u64,
            }
        } else {
            TrafficPotential::High {
                additional_clicks: additional.floor() as u64,
            }
        }
    }
}

impl TrafficScoreBreakdown {
    /// Weighted total, rounded and clamped to 0-100
    pub fn total(&self) -> u8 {
        let weighted = self.duration * WEIGHT_DURATION
            + self.bounce * WEIGHT_BOUNCE
            + self.pages * WEIGHT_PAGES
            + self.conversion * WEIGHT_CONVERSION;
        weighted.round().clamp(0.0, 100.0) as u8
    }
}

impl KeywordScoreBreakdown {
    /// Weighted total, rounded and clamped to 0-100
    pub fn total(&self) -> u8 {
        let weighted = self.ctr * WEIGHT_CTR
            + self.position * WEIGHT_POSITION
            + self.clicks * WEIGHT_CLICKS
            + self.impressions * WEIGHT_IMPRESSIONS;
        weighted.round().clamp(0.0, 100.0) as u8
    }
}

/// NaN collapses to zero so a degenerate input can never escape the range
fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}
