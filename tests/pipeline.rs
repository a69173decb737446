//! Library pipeline tests: ingest, score, rank, narrate, render.

use siteinsight::analyzer::AnalysisEngine;
use siteinsight::config::Config;
use siteinsight::ingest::{ga4, search_console};
use siteinsight::messages::Locale;
use siteinsight::reporter::{HtmlReporter, JsonReporter};
use siteinsight::{
    analyze_keyword_file, analyze_traffic_file, DateRange, DateRangePreset, Markup, MessageCatalog,
    MessageId, RuleId,
};
use std::path::Path;

const TRAFFIC_REPORT: &str = "test-data/ga4-traffic.json";
const KEYWORD_REPORT: &str = "test-data/gsc-keywords.json";

fn range() -> DateRange {
    DateRange::ending(
        DateRangePreset::Last30Days,
        chrono::NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
    )
}

fn config(json: &str) -> Config {
    serde_json::from_str(json).unwrap()
}

#[test]
fn traffic_report_keeps_report_order_until_ranked() {
    let records = ga4::read_report(Path::new(TRAFFIC_REPORT)).unwrap();
    let sources: Vec<&str> = records.iter().map(|r| r.source()).collect();
    assert_eq!(sources, ["Direct", "Organic Search", "Email", "Referral"]);

    let analysis = AnalysisEngine::new().analyze_traffic(records, Some("properties/42"), range());
    assert_eq!(analysis.sources[0].source(), "Email");
    assert_eq!(analysis.property.as_deref(), Some("properties/42"));
    assert_eq!(analysis.date_range.start(), "2024-03-01");
}

#[test]
fn traffic_rules_fire_in_table_order() {
    let analysis =
        analyze_traffic_file(Path::new(TRAFFIC_REPORT), &Config::default(), None).unwrap();
    let rules: Vec<RuleId> = analysis.insights.statements().iter().map(|s| s.rule).collect();
    assert_eq!(
        rules,
        [RuleId::TopSource, RuleId::LongSessions, RuleId::LowBounce, RuleId::VolumeLeader]
    );

    let rules: Vec<RuleId> = analysis
        .recommendations
        .statements()
        .iter()
        .map(|s| s.rule)
        .collect();
    assert_eq!(
        rules,
        [
            RuleId::InvestTopSource,
            RuleId::ReduceBounce,
            RuleId::DeepenContent,
            RuleId::TrackConversions
        ]
    );
}

#[test]
fn keyword_rules_fire_in_table_order() {
    let records = search_console::read_report(Path::new(KEYWORD_REPORT)).unwrap();
    let analysis = AnalysisEngine::new().analyze_keywords(records, None, range());
    let rules: Vec<RuleId> = analysis.insights.statements().iter().map(|s| s.rule).collect();
    assert_eq!(
        rules,
        [
            RuleId::TopKeyword,
            RuleId::PositionTier,
            RuleId::HighCtr,
            RuleId::GoldenOpportunity,
            RuleId::SearchSummary
        ]
    );
    assert_eq!(analysis.recommendations.statements().len(), 5);
}

#[test]
fn disabled_rules_are_skipped() {
    let cfg = config(r#"{ "rules": { "top-keyword": "off", "broaden-coverage": "off" } }"#);
    let analysis = analyze_keyword_file(Path::new(KEYWORD_REPORT), &cfg, None).unwrap();
    let insight_rules: Vec<RuleId> =
        analysis.insights.statements().iter().map(|s| s.rule).collect();
    assert!(!insight_rules.contains(&RuleId::TopKeyword));
    assert_eq!(analysis.recommendations.statements().len(), 4);
}

#[test]
fn all_rules_off_yields_empty_list_not_placeholder() {
    let cfg = config(
        r#"{ "rules": { "invest-top-source": "off", "reduce-bounce": "off",
                        "deepen-content": "off", "track-conversions": "off" } }"#,
    );
    let analysis = analyze_traffic_file(Path::new(TRAFFIC_REPORT), &cfg, None).unwrap();
    assert!(!analysis.recommendations.is_placeholder());
    assert!(analysis.recommendations.statements().is_empty());
}

#[test]
fn message_override_applies_to_every_renderer() {
    let cfg = config(r#"{ "messages": { "top-source": "Best: {source}" } }"#);
    let analysis = analyze_traffic_file(Path::new(TRAFFIC_REPORT), &cfg, None).unwrap();
    let catalog = cfg.catalog();

    let lines = catalog.render_narrative(&analysis.insights, Markup::Plain);
    assert_eq!(lines[0], "Best: Email");

    let json = JsonReporter::new(HtmlReporter::new(catalog)).report_traffic(&analysis);
    assert!(json.contains("<li>Best: Email</li>"));
}

#[test]
fn hebrew_page_is_right_to_left() {
    let cfg = config(r#"{ "locale": "he" }"#);
    let analysis = analyze_keyword_file(Path::new(KEYWORD_REPORT), &cfg, None).unwrap();
    let page = HtmlReporter::new(cfg.catalog()).keyword_page(&analysis);
    assert!(page.contains("lang=\"he\""));
    assert!(page.contains("dir=\"rtl\""));
    assert!(page.contains("learn rust"));
}

#[test]
fn statements_render_in_both_locales() {
    let analysis =
        analyze_keyword_file(Path::new(KEYWORD_REPORT), &Config::default(), None).unwrap();
    for locale in [Locale::En, Locale::He] {
        let catalog = MessageCatalog::new(locale);
        for line in catalog.render_narrative(&analysis.recommendations, Markup::Html) {
            assert!(!line.contains('{'), "unfilled placeholder in {line}");
        }
    }
}

#[test]
fn placeholder_messages_differ_per_narrative() {
    let catalog = MessageCatalog::default();
    assert_eq!(catalog.template(MessageId::TrafficNoData), "No data found for analysis");
    assert_eq!(
        catalog.template(MessageId::KeywordNoRecommendations),
        "Not enough data for recommendations"
    );
}
