//! Insights about ranked traffic sources.

use super::{RuleEntry, TrafficContext};
use crate::messages::{format_count, format_decimal};
use crate::{MessageId, RuleId, Statement, TrafficSourceRecord};

/// Sessions longer than this (3 minutes) are worth calling out
const LONG_SESSION_SECS: f64 = 180.0;
/// Bounce rates below this are worth calling out
const LOW_BOUNCE_RATE: f64 = 30.0;
/// Share of total sessions above which the weakest source matters
const HIGH_VOLUME_SHARE: f64 = 0.1;

pub const TRAFFIC_INSIGHTS: &[RuleEntry<TrafficSourceRecord, TrafficContext>] = &[
    RuleEntry {
        id: RuleId::TopSource,
        evaluate: top_source,
    },
    RuleEntry {
        id: RuleId::LongSessions,
        evaluate: long_sessions,
    },
    RuleEntry {
        id: RuleId::LowBounce,
        evaluate: low_bounce,
    },
    RuleEntry {
        id: RuleId::VolumeLeader,
        evaluate: volume_leader,
    },
    RuleEntry {
        id: RuleId::WeakHighVolume,
        evaluate: weak_high_volume,
    },
];

/// The best-quality source, with its score and sessions
pub fn top_source(records: &[TrafficSourceRecord], _ctx: &TrafficContext) -> Option<Statement> {
    let best = records.first()?;
    Some(
        Statement::new(RuleId::TopSource, MessageId::TopSource)
            .arg("source", best.source())
            .arg("score", best.quality_score().to_string())
            .arg("sessions", format_count(best.sessions())),
    )
}

pub fn long_sessions(records: &[TrafficSourceRecord], _ctx: &TrafficContext) -> Option<Statement> {
    let best = records.first()?;
    (best.avg_session_duration_secs() > LONG_SESSION_SECS).then(|| {
        Statement::new(RuleId::LongSessions, MessageId::LongSessions)
            .arg("source", best.source())
            .arg("duration", best.avg_session_duration())
    })
}

pub fn low_bounce(records: &[TrafficSourceRecord], _ctx: &TrafficContext) -> Option<Statement> {
    let best = records.first()?;
    (best.rounded_bounce_rate() < LOW_BOUNCE_RATE).then(|| {
        Statement::new(RuleId::LowBounce, MessageId::LowBounce)
            .arg("source", best.source())
            .arg("bounce_rate", format_decimal(best.rounded_bounce_rate(), 1))
    })
}

/// Fires when the source with the most sessions is not the best-quality one.
/// Ties on sessions resolve to the earliest record in rank order.
pub fn volume_leader(records: &[TrafficSourceRecord], _ctx: &TrafficContext) -> Option<Statement> {
    let max_sessions = records.iter().map(TrafficSourceRecord::sessions).max()?;
    let (rank, leader) = records
        .iter()
        .enumerate()
        .find(|(_, record)| record.sessions() == max_sessions)?;
    if rank == 0 {
        return None;
    }
    Some(
        Statement::new(RuleId::VolumeLeader, MessageId::VolumeLeader)
            .arg("source", leader.source())
            .arg("sessions", format_count(leader.sessions())),
    )
}

/// The lowest-quality source still carries a meaningful share of traffic
pub fn weak_high_volume(
    records: &[TrafficSourceRecord],
    ctx: &TrafficContext,
) -> Option<Statement> {
    if records.len() < 2 {
        return None;
    }
    let worst = records.last()?;
    (worst.sessions() as f64 > ctx.total_sessions as f64 * HIGH_VOLUME_SHARE).then(|| {
        Statement::new(RuleId::WeakHighVolume, MessageId::WeakHighVolume)
            .arg("source", worst.source())
            .arg("sessions", format_count(worst.sessions()))
    })
}
