//! siteinsight: traffic and keyword quality analysis
//!
//! This library scores Google Analytics traffic sources and Search Console
//! keywords, ranks them, and derives natural-language insights and
//! recommendations that a dashboard can render directly.

pub mod analyzer;
pub mod config;
pub mod date_range;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod messages;
pub mod reporter;

pub use date_range::{DateRange, DateRangePreset};
pub use error::{Error, Result};
pub use messages::{Markup, MessageCatalog, MessageId};

use analyzer::ScoreCalculator;
use serde::Serialize;

/// Raw metrics for one traffic source, as delivered by the reporting API
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficMetrics {
    /// Channel grouping (e.g. "Organic Search")
    pub source: String,
    /// Detailed source / medium (e.g. "google / organic")
    pub source_medium: String,
    pub sessions: u64,
    pub users: u64,
    /// Bounce rate as a percentage (0-100)
    pub bounce_rate: f64,
    /// Average session duration in seconds
    pub avg_session_duration: f64,
    pub pages_per_session: f64,
    pub conversions: u64,
}

/// A scored traffic source. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficSourceRecord {
    source: String,
    source_medium: String,
    sessions: u64,
    users: u64,
    bounce_rate: f64,
    /// Formatted as M:SS
    avg_session_duration: String,
    avg_session_duration_seconds: f64,
    pages_per_session: f64,
    conversions: u64,
    quality_score: u8,
}

impl TrafficSourceRecord {
    /// Validate the metrics and compute the quality score
    pub fn new(metrics: TrafficMetrics) -> Result<Self> {
        check_percentage("bounce rate", metrics.bounce_rate)?;
        check_non_negative("average session duration", metrics.avg_session_duration)?;
        check_non_negative("pages per session", metrics.pages_per_session)?;

        let quality_score = ScoreCalculator::traffic_quality(
            metrics.avg_session_duration,
            metrics.bounce_rate,
            metrics.pages_per_session,
            metrics.conversions,
            metrics.sessions,
        );

        Ok(Self {
            avg_session_duration: format_duration(metrics.avg_session_duration),
            source: metrics.source,
            source_medium: metrics.source_medium,
            sessions: metrics.sessions,
            users: metrics.users,
            bounce_rate: metrics.bounce_rate,
            avg_session_duration_seconds: metrics.avg_session_duration,
            pages_per_session: metrics.pages_per_session,
            conversions: metrics.conversions,
            quality_score,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn source_medium(&self) -> &str {
        &self.source_medium
    }

    pub fn sessions(&self) -> u64 {
        self.sessions
    }

    pub fn users(&self) -> u64 {
        self.users
    }

    pub fn bounce_rate(&self) -> f64 {
        self.bounce_rate
    }

    pub fn avg_session_duration_secs(&self) -> f64 {
        self.avg_session_duration_seconds
    }

    /// Average session duration as M:SS
    pub fn avg_session_duration(&self) -> &str {
        &self.avg_session_duration
    }

    pub fn pages_per_session(&self) -> f64 {
        self.pages_per_session
    }

    /// Bounce rate at report precision (1 decimal); rules compare this value
    pub fn rounded_bounce_rate(&self) -> f64 {
        round_to(self.bounce_rate, 1)
    }

    /// Pages per session at report precision (1 decimal)
    pub fn rounded_pages_per_session(&self) -> f64 {
        round_to(self.pages_per_session, 1)
    }

    pub fn conversions(&self) -> u64 {
        self.conversions
    }

    /// Quality score (0-100)
    pub fn quality_score(&self) -> u8 {
        self.quality_score
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.quality_score)
    }

    /// Sub-scores behind the quality score
    pub fn breakdown(&self) -> TrafficScoreBreakdown {
        ScoreCalculator::traffic_breakdown(
            self.avg_session_duration_seconds,
            self.bounce_rate,
            self.pages_per_session,
            self.conversions,
            self.sessions,
        )
    }
}

/// Raw metrics for one search query, as delivered by the search API
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordMetrics {
    pub keyword: String,
    pub clicks: u64,
    pub impressions: u64,
    /// Click-through rate as a percentage (0-100)
    pub ctr: f64,
    /// Average ranking position (1 = top)
    pub position: f64,
}

/// A scored search keyword. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordRecord {
    keyword: String,
    clicks: u64,
    impressions: u64,
    ctr: f64,
    position: f64,
    quality_score: u8,
    traffic_potential: TrafficPotential,
}

impl KeywordRecord {
    /// Validate the metrics and compute quality score and traffic potential.
    /// Clicks above impressions are accepted as reported.
    pub fn new(metrics: KeywordMetrics) -> Result<Self> {
        check_percentage("ctr", metrics.ctr)?;
        if !metrics.position.is_finite() || metrics.position < 1.0 {
            return Err(Error::InvalidRecord {
                field: "position",
                reason: format!("expected a finite value >= 1, got {}", metrics.position),
            });
        }

        let quality_score = ScoreCalculator::keyword_quality(
            metrics.clicks,
            metrics.impressions,
            metrics.ctr,
            metrics.position,
        );
        let traffic_potential =
            ScoreCalculator::traffic_potential(metrics.impressions, metrics.position, metrics.ctr);

        Ok(Self {
            keyword: metrics.keyword,
            clicks: metrics.clicks,
            impressions: metrics.impressions,
            ctr: metrics.ctr,
            position: metrics.position,
            quality_score,
            traffic_potential,
        })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn clicks(&self) -> u64 {
        self.clicks
    }

    pub fn impressions(&self) -> u64 {
        self.impressions
    }

    pub fn ctr(&self) -> f64 {
        self.ctr
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// CTR at report precision (2 decimals); rules compare this value
    pub fn rounded_ctr(&self) -> f64 {
        round_to(self.ctr, 2)
    }

    /// Position at report precision (1 decimal)
    pub fn rounded_position(&self) -> f64 {
        round_to(self.position, 1)
    }

    /// Quality score (0-100)
    pub fn quality_score(&self) -> u8 {
        self.quality_score
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.quality_score)
    }

    pub fn traffic_potential(&self) -> TrafficPotential {
        self.traffic_potential
    }

    /// Sub-scores behind the quality score
    pub fn breakdown(&self) -> KeywordScoreBreakdown {
        ScoreCalculator::keyword_breakdown(self.clicks, self.impressions, self.ctr, self.position)
    }
}

/// Estimated extra clicks if a keyword moved into the top three
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TrafficPotential {
    /// Already ranking in the top three
    FullyRealized,
    /// Fewer than 10 additional clicks
    Low,
    #[serde(rename_all = "camelCase")]
    Medium { additional_clicks: u64 },
    #[serde(rename_all = "camelCase")]
    High { additional_clicks: u64 },
}

impl TrafficPotential {
    /// Numeric estimate, when the category carries one
    pub fn estimate(&self) -> Option<u64> {
        match self {
            TrafficPotential::Medium { additional_clicks }
            | TrafficPotential::High { additional_clicks } => Some(*additional_clicks),
            TrafficPotential::FullyRealized | TrafficPotential::Low => None,
        }
    }
}

/// Sub-scores of a traffic source quality score (each 0-100)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficScoreBreakdown {
    /// Weight 30%
    pub duration: f64,
    /// Weight 30%
    pub bounce: f64,
    /// Weight 20%
    pub pages: f64,
    /// Weight 20%
    pub conversion: f64,
}

/// Sub-scores of a keyword quality score (each 0-100)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordScoreBreakdown {
    /// Weight 40%
    pub ctr: f64,
    /// Weight 30%
    pub position: f64,
    /// Weight 20%
    pub clicks: f64,
    /// Weight 10%
    pub impressions: f64,
}

/// Display band of a quality score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            70..=u8::MAX => ScoreBand::High,
            40..=69 => ScoreBand::Medium,
            _ => ScoreBand::Low,
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreBand::High => write!(f, "high"),
            ScoreBand::Medium => write!(f, "medium"),
            ScoreBand::Low => write!(f, "low"),
        }
    }
}

/// Narrative rules, addressable from config by their kebab-case id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    // Traffic insights
    TopSource,
    LongSessions,
    LowBounce,
    VolumeLeader,
    WeakHighVolume,
    // Traffic recommendations
    InvestTopSource,
    ReduceBounce,
    DeepenContent,
    TrackConversions,
    // Keyword insights
    TopKeyword,
    PositionTier,
    HighCtr,
    GoldenOpportunity,
    SearchSummary,
    // Keyword recommendations
    StrengthenTopKeyword,
    ImproveRanking,
    ImproveSnippet,
    PushToFirstPage,
    BroadenCoverage,
}

impl RuleId {
    pub const ALL: [RuleId; 19] = [
        RuleId::TopSource,
        RuleId::LongSessions,
        RuleId::LowBounce,
        RuleId::VolumeLeader,
        RuleId::WeakHighVolume,
        RuleId::InvestTopSource,
        RuleId::ReduceBounce,
        RuleId::DeepenContent,
        RuleId::TrackConversions,
        RuleId::TopKeyword,
        RuleId::PositionTier,
        RuleId::HighCtr,
        RuleId::GoldenOpportunity,
        RuleId::SearchSummary,
        RuleId::StrengthenTopKeyword,
        RuleId::ImproveRanking,
        RuleId::ImproveSnippet,
        RuleId::PushToFirstPage,
        RuleId::BroadenCoverage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::TopSource => "top-source",
            RuleId::LongSessions => "long-sessions",
            RuleId::LowBounce => "low-bounce",
            RuleId::VolumeLeader => "volume-leader",
            RuleId::WeakHighVolume => "weak-high-volume",
            RuleId::InvestTopSource => "invest-top-source",
            RuleId::ReduceBounce => "reduce-bounce",
            RuleId::DeepenContent => "deepen-content",
            RuleId::TrackConversions => "track-conversions",
            RuleId::TopKeyword => "top-keyword",
            RuleId::PositionTier => "position-tier",
            RuleId::HighCtr => "high-ctr",
            RuleId::GoldenOpportunity => "golden-opportunity",
            RuleId::SearchSummary => "search-summary",
            RuleId::StrengthenTopKeyword => "strengthen-top-keyword",
            RuleId::ImproveRanking => "improve-ranking",
            RuleId::ImproveSnippet => "improve-snippet",
            RuleId::PushToFirstPage => "push-to-first-page",
            RuleId::BroadenCoverage => "broaden-coverage",
        }
    }

    /// Look up a rule by its kebab-case id
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|rule| rule.as_str() == id)
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One generated insight or recommendation, before it is put into words
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// Rule that produced the statement
    pub rule: RuleId,
    /// Catalog entry used to render it
    pub message: MessageId,
    /// Named, pre-formatted template arguments
    pub args: Vec<(&'static str, String)>,
}

impl Statement {
    pub fn new(rule: RuleId, message: MessageId) -> Self {
        Self {
            rule,
            message,
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.args.push((name, value.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.args
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Generated insights or recommendations
#[derive(Debug, Clone, PartialEq)]
pub enum Narrative {
    /// No records to talk about: a single fixed sentence
    Placeholder(MessageId),
    /// Statements in rule-table order
    Statements(Vec<Statement>),
}

impl Narrative {
    pub fn statements(&self) -> &[Statement] {
        match self {
            Narrative::Placeholder(_) => &[],
            Narrative::Statements(statements) => statements,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Narrative::Placeholder(_))
    }
}

/// Result of analysing a traffic source report
#[derive(Debug, Clone)]
pub struct TrafficAnalysis {
    /// GA4 property (`properties/<id>`), if known
    pub property: Option<String>,
    pub date_range: DateRange,
    /// Ranked by quality score, best first
    pub sources: Vec<TrafficSourceRecord>,
    pub total_sessions: u64,
    pub insights: Narrative,
    pub recommendations: Narrative,
}

/// Result of analysing a search keyword report
#[derive(Debug, Clone)]
pub struct KeywordAnalysis {
    /// Search Console site URL, if known
    pub site_url: Option<String>,
    pub date_range: DateRange,
    /// Ranked by clicks, most clicked first
    pub keywords: Vec<KeywordRecord>,
    pub summary: KeywordSummary,
    pub insights: Narrative,
    pub recommendations: Narrative,
}

/// Aggregate totals of a keyword report
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordSummary {
    pub total_clicks: u64,
    pub total_impressions: u64,
    /// Clicks over impressions as a percentage, rounded to two decimals
    pub average_ctr: f64,
    pub total_keywords: usize,
}

impl KeywordSummary {
    pub fn from_records(records: &[KeywordRecord]) -> Self {
        let total_clicks: u64 = records.iter().map(|k| k.clicks).sum();
        let total_impressions: u64 = records.iter().map(|k| k.impressions).sum();
        let average_ctr = if total_impressions > 0 {
            round_to(total_clicks as f64 / total_impressions as f64 * 100.0, 2)
        } else {
            0.0
        };
        Self {
            total_clicks,
            total_impressions,
            average_ctr,
            total_keywords: records.len(),
        }
    }
}

/// Public API: analyze a GA4 traffic report file.
///
/// * `path` - GA4 `runReport` response saved as JSON
/// * `config` - loaded configuration (locale, rules, date range)
/// * `property` - optional property id, normalized to `properties/<id>`
pub fn analyze_traffic_file(
    path: &std::path::Path,
    config: &config::Config,
    property: Option<&str>,
) -> anyhow::Result<TrafficAnalysis> {
    let rows = ingest::ga4::read_report(path)?;
    let engine = analyzer::AnalysisEngine::from_config(config);
    Ok(engine.analyze_traffic(rows, property, DateRange::today(config.date_range())))
}

/// Public API: analyze a Search Console keyword report file.
pub fn analyze_keyword_file(
    path: &std::path::Path,
    config: &config::Config,
    site_url: Option<&str>,
) -> anyhow::Result<KeywordAnalysis> {
    let rows = ingest::search_console::read_report(path)?;
    let engine = analyzer::AnalysisEngine::from_config(config);
    Ok(engine.analyze_keywords(rows, site_url, DateRange::today(config.date_range())))
}

fn check_non_negative(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidRecord {
            field,
            reason: format!("expected a finite value >= 0, got {}", value),
        })
    }
}

fn check_percentage(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidRecord {
            field,
            reason: format!("expected a percentage between 0 and 100, got {}", value),
        })
    }
}

/// Round half away from zero to `places` decimals
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Seconds as M:SS (both parts floored)
pub fn format_duration(seconds: f64) -> String {
    let minutes = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{}:{:02}", minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traffic_metrics() -> TrafficMetrics {
        TrafficMetrics {
            source: "Organic Search".to_string(),
            source_medium: "google / organic".to_string(),
            sessions: 100,
            users: 90,
            bounce_rate: 20.0,
            avg_session_duration: 650.0,
            pages_per_session: 12.0,
            conversions: 5,
        }
    }

    #[test]
    fn test_traffic_record_scores_on_construction() {
        let record = TrafficSourceRecord::new(traffic_metrics()).unwrap();
        assert_eq!(record.quality_score(), 84);
        assert_eq!(record.band(), ScoreBand::High);
        assert_eq!(record.avg_session_duration(), "10:50");
    }

    #[test]
    fn test_traffic_record_rejects_nan_bounce() {
        let err = TrafficSourceRecord::new(TrafficMetrics {
            bounce_rate: f64::NAN,
            ..traffic_metrics()
        })
        .unwrap_err();
        assert!(err.to_string().contains("bounce rate"));
    }

    #[test]
    fn test_traffic_record_rejects_negative_duration() {
        let result = TrafficSourceRecord::new(TrafficMetrics {
            avg_session_duration: -1.0,
            ..traffic_metrics()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_keyword_record_rejects_position_below_one() {
        let result = KeywordRecord::new(KeywordMetrics {
            keyword: "rust".to_string(),
            clicks: 1,
            impressions: 10,
            ctr: 10.0,
            position: 0.0,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_keyword_record_accepts_clicks_above_impressions() {
        let record = KeywordRecord::new(KeywordMetrics {
            keyword: "rust".to_string(),
            clicks: 20,
            impressions: 10,
            ctr: 100.0,
            position: 1.0,
        })
        .unwrap();
        assert_eq!(record.clicks(), 20);
    }

    #[test]
    fn test_keyword_record_potential() {
        let record = KeywordRecord::new(KeywordMetrics {
            keyword: "rust".to_string(),
            clicks: 500,
            impressions: 5000,
            ctr: 10.0,
            position: 2.0,
        })
        .unwrap();
        assert_eq!(record.traffic_potential(), TrafficPotential::FullyRealized);
        assert_eq!(record.traffic_potential().estimate(), None);
    }

    #[test]
    fn test_rounded_accessors_keep_raw_values() {
        let record = TrafficSourceRecord::new(TrafficMetrics {
            bounce_rate: 60.04,
            pages_per_session: 1.96,
            ..traffic_metrics()
        })
        .unwrap();
        assert_eq!(record.bounce_rate(), 60.04);
        assert_eq!(record.rounded_bounce_rate(), 60.0);
        assert_eq!(record.rounded_pages_per_session(), 2.0);

        let keyword = KeywordRecord::new(KeywordMetrics {
            keyword: "rust".to_string(),
            clicks: 1,
            impressions: 100,
            ctr: 1.996,
            position: 10.04,
        })
        .unwrap();
        assert_eq!(keyword.rounded_ctr(), 2.0);
        assert_eq!(keyword.rounded_position(), 10.0);
        assert_eq!(keyword.position(), 10.04);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "0:00");
        assert_eq!(format_duration(59.9), "0:59");
        assert_eq!(format_duration(185.4), "3:05");
        assert_eq!(format_duration(3600.0), "60:00");
    }

    #[test]
    fn test_score_band_thresholds() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::High);
        assert_eq!(ScoreBand::from_score(70), ScoreBand::High);
        assert_eq!(ScoreBand::from_score(69), ScoreBand::Medium);
        assert_eq!(ScoreBand::from_score(40), ScoreBand::Medium);
        assert_eq!(ScoreBand::from_score(39), ScoreBand::Low);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::Low);
    }

    #[test]
    fn test_rule_id_round_trips_through_parse() {
        for rule in RuleId::ALL {
            assert_eq!(RuleId::parse(rule.as_str()), Some(rule));
        }
        assert_eq!(RuleId::parse("no-such-rule"), None);
    }

    #[test]
    fn test_keyword_summary_average_ctr() {
        let records: Vec<KeywordRecord> = [(10, 300), (5, 0)]
            .iter()
            .map(|&(clicks, impressions)| {
                KeywordRecord::new(KeywordMetrics {
                    keyword: format!("k{}", clicks),
                    clicks,
                    impressions,
                    ctr: 0.0,
                    position: 5.0,
                })
                .unwrap()
            })
            .collect();
        let summary = KeywordSummary::from_records(&records);
        assert_eq!(summary.total_clicks, 15);
        assert_eq!(summary.total_impressions, 300);
        assert_eq!(summary.average_ctr, 5.0);
        assert_eq!(summary.total_keywords, 2);
    }

    #[test]
    fn test_keyword_summary_no_impressions() {
        let summary = KeywordSummary::from_records(&[]);
        assert_eq!(summary.average_ctr, 0.0);
        assert_eq!(summary.total_keywords, 0);
    }

    #[test]
    fn test_traffic_potential_serializes_tagged() {
        let json = serde_json::to_value(TrafficPotential::Medium {
            additional_clicks: 40,
        })
        .unwrap();
        assert_eq!(json["kind"], "medium");
        assert_eq!(json["additionalClicks"], 40);
    }
}
