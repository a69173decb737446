//! Recommendations for ranked traffic sources.
//!
//! Each rule cites at most one source: the first match in rank order.

use super::{find_first, RuleEntry, TrafficContext};
use crate::messages::format_decimal;
use crate::{MessageId, RuleId, Statement, TrafficSourceRecord};

const HIGH_BOUNCE_RATE: f64 = 60.0;
const SHALLOW_PAGES_PER_SESSION: f64 = 2.0;
/// Sessions above which missing conversions look like missing tracking
const UNTRACKED_SESSIONS: u64 = 100;

pub const TRAFFIC_RECOMMENDATIONS: &[RuleEntry<TrafficSourceRecord, TrafficContext>] = &[
    RuleEntry {
        id: RuleId::InvestTopSource,
        evaluate: invest_top_source,
    },
    RuleEntry {
        id: RuleId::ReduceBounce,
        evaluate: reduce_bounce,
    },
    RuleEntry {
        id: RuleId::DeepenContent,
        evaluate: deepen_content,
    },
    RuleEntry {
        id: RuleId::TrackConversions,
        evaluate: track_conversions,
    },
];

pub fn invest_top_source(
    records: &[TrafficSourceRecord],
    _ctx: &TrafficContext,
) -> Option<Statement> {
    let best = records.first()?;
    Some(
        Statement::new(RuleId::InvestTopSource, MessageId::InvestTopSource)
            .arg("source", best.source()),
    )
}

pub fn reduce_bounce(records: &[TrafficSourceRecord], _ctx: &TrafficContext) -> Option<Statement> {
    let record = find_first(records, |r| r.rounded_bounce_rate() > HIGH_BOUNCE_RATE)?;
    Some(
        Statement::new(RuleId::ReduceBounce, MessageId::ReduceBounce)
            .arg("source", record.source())
            .arg("bounce_rate", format_decimal(record.rounded_bounce_rate(), 1)),
    )
}

pub fn deepen_content(records: &[TrafficSourceRecord], _ctx: &TrafficContext) -> Option<Statement> {
    let record = find_first(records, |r| {
        r.rounded_pages_per_session() < SHALLOW_PAGES_PER_SESSION
    })?;
    Some(
        Statement::new(RuleId::DeepenContent, MessageId::DeepenContent)
            .arg("source", record.source())
            .arg("pages", format_decimal(record.rounded_pages_per_session(), 1)),
    )
}

pub fn track_conversions(
    records: &[TrafficSourceRecord],
    _ctx: &TrafficContext,
) -> Option<Statement> {
    let record = find_first(records, |r| {
        r.sessions() > UNTRACKED_SESSIONS && r.conversions() == 0
    })?;
    Some(
        Statement::new(RuleId::TrackConversions, MessageId::TrackConversions)
            .arg("source", record.source()),
    )
}

#[cfg(test)]
mod tests {
    use super::super::testutil::{metrics, source};
    use super::super::{traffic_recommendations, RuleSet};
    use super::*;
    use crate::TrafficMetrics;

    const CTX: TrafficContext = TrafficContext { total_sessions: 0 };

    #[test]
    fn test_invest_names_rank_zero() {
        let records = vec![source(metrics("Email", 10)), source(metrics("Direct", 500))];
        let s = invest_top_source(&records, &CTX).unwrap();
        assert_eq!(s.get("source"), Some("Email"));
    }

    #[test]
    fn test_reduce_bounce_picks_first_match() {
        let records = vec![
            source(metrics("Email", 10)),
            source(TrafficMetrics {
                bounce_rate: 61.26,
                ..metrics("Social", 10)
            }),
            source(TrafficMetrics {
                bounce_rate: 95.0,
                ..metrics("Display", 10)
            }),
        ];
        let s = reduce_bounce(&records, &CTX).unwrap();
        assert_eq!(s.get("source"), Some("Social"));
        assert_eq!(s.get("bounce_rate"), Some("61.3"));
    }

    #[test]
    fn test_reduce_bounce_threshold_is_exclusive() {
        let records = vec![source(TrafficMetrics {
            bounce_rate: 60.0,
            ..metrics("Social", 10)
        })];
        assert!(reduce_bounce(&records, &CTX).is_none());
    }

    #[test]
    fn test_reduce_bounce_compares_at_one_decimal() {
        let records = vec![source(TrafficMetrics {
            bounce_rate: 60.04,
            ..metrics("Referral", 10)
        })];
        assert!(reduce_bounce(&records, &CTX).is_none());

        let records = vec![source(TrafficMetrics {
            bounce_rate: 60.06,
            ..metrics("Referral", 10)
        })];
        let s = reduce_bounce(&records, &CTX).unwrap();
        assert_eq!(s.get("bounce_rate"), Some("60.1"));
    }

    #[test]
    fn test_deepen_content_compares_at_one_decimal() {
        let records = vec![source(TrafficMetrics {
            pages_per_session: 1.96,
            ..metrics("Referral", 10)
        })];
        assert!(deepen_content(&records, &CTX).is_none());

        let records = vec![source(TrafficMetrics {
            pages_per_session: 1.94,
            ..metrics("Referral", 10)
        })];
        let s = deepen_content(&records, &CTX).unwrap();
        assert_eq!(s.get("pages"), Some("1.9"));
    }

    #[test]
    fn test_deepen_content_cites_pages() {
        let records = vec![source(TrafficMetrics {
            pages_per_session: 1.46,
            ..metrics("Referral", 10)
        })];
        let s = deepen_content(&records, &CTX).unwrap();
        assert_eq!(s.get("pages"), Some("1.5"));

        let records = vec![source(TrafficMetrics {
            pages_per_session: 2.0,
            ..metrics("Referral", 10)
        })];
        assert!(deepen_content(&records, &CTX).is_none());
    }

    #[test]
    fn test_track_conversions_needs_volume_and_zero_conversions() {
        let few = vec![source(TrafficMetrics {
            conversions: 0,
            ..metrics("Direct", 100)
        })];
        assert!(track_conversions(&few, &CTX).is_none());

        let converting = vec![source(metrics("Direct", 5000))];
        assert!(track_conversions(&converting, &CTX).is_none());

        let untracked = vec![source(TrafficMetrics {
            conversions: 0,
            ..metrics("Direct", 101)
        })];
        let s = track_conversions(&untracked, &CTX).unwrap();
        assert_eq!(s.get("source"), Some("Direct"));
    }

    #[test]
    fn test_recommendations_ignore_session_total() {
        let records = vec![
            source(TrafficMetrics {
                bounce_rate: 72.0,
                pages_per_session: 1.2,
                conversions: 0,
                ..metrics("Social", 800)
            }),
            source(metrics("Direct", 300)),
        ];
        let busy = TrafficContext {
            total_sessions: 1_100,
        };
        for entry in TRAFFIC_RECOMMENDATIONS {
            let statement = (entry.evaluate)(&records, &CTX);
            assert!(statement.is_some(), "{} did not fire", entry.id.as_str());
            assert_eq!(statement, (entry.evaluate)(&records, &busy));
        }
    }

    #[test]
    fn test_unremarkable_sources_only_get_investment_advice() {
        let records = vec![source(metrics("Direct", 300))];
        let narrative = traffic_recommendations(&records, &RuleSet::all());
        let rules: Vec<RuleId> = narrative.statements().iter().map(|s| s.rule).collect();
        assert_eq!(rules, vec![RuleId::InvestTopSource]);
    }
}
