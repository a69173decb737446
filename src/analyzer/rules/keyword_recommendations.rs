//! Recommendations for ranked keywords.

use super::{find_first, KeywordContext, RuleEntry};
use crate::messages::format_decimal;
use crate::{KeywordRecord, MessageId, RuleId, Statement};

const RANKING_IMPRESSIONS: u64 = 500;
const SNIPPET_IMPRESSIONS: u64 = 1000;
const LOW_CTR: f64 = 2.0;
/// Keyword sets smaller than this are considered narrow
const NARROW_COVERAGE: usize = 50;

pub const KEYWORD_RECOMMENDATIONS: &[RuleEntry<KeywordRecord, KeywordContext>] = &[
    RuleEntry {
        id: RuleId::StrengthenTopKeyword,
        evaluate: strengthen_top_keyword,
    },
    RuleEntry {
        id: RuleId::ImproveRanking,
        evaluate: improve_ranking,
    },
    RuleEntry {
        id: RuleId::ImproveSnippet,
        evaluate: improve_snippet,
    },
    RuleEntry {
        id: RuleId::PushToFirstPage,
        evaluate: push_to_first_page,
    },
    RuleEntry {
        id: RuleId::BroadenCoverage,
        evaluate: broaden_coverage,
    },
];

pub fn strengthen_top_keyword(
    records: &[KeywordRecord],
    _ctx: &KeywordContext,
) -> Option<Statement> {
    let top = records.first()?;
    Some(
        Statement::new(RuleId::StrengthenTopKeyword, MessageId::StrengthenTopKeyword)
            .arg("keyword", top.keyword()),
    )
}

/// Visible keyword stuck between the lower first page and page two
pub fn improve_ranking(records: &[KeywordRecord], _ctx: &KeywordContext) -> Option<Statement> {
    let record = find_first(records, |r| {
        let position = r.rounded_position();
        r.impressions() > RANKING_IMPRESSIONS && position > 5.0 && position <= 20.0
    })?;
    Some(
        Statement::new(RuleId::ImproveRanking, MessageId::ImproveRanking)
            .arg("keyword", record.keyword())
            .arg("position", format_decimal(record.rounded_position(), 1)),
    )
}

pub fn improve_snippet(records: &[KeywordRecord], _ctx: &KeywordContext) -> Option<Statement> {
    let record = find_first(records, |r| {
        r.impressions() > SNIPPET_IMPRESSIONS && r.rounded_ctr() < LOW_CTR
    })?;
    Some(
        Statement::new(RuleId::ImproveSnippet, MessageId::ImproveSnippet)
            .arg("keyword", record.keyword())
            .arg("ctr", format_decimal(record.rounded_ctr(), 2)),
    )
}

pub fn push_to_first_page(records: &[KeywordRecord], _ctx: &KeywordContext) -> Option<Statement> {
    let record = find_first(records, |r| (4.0..=10.0).contains(&r.rounded_position()))?;
    Some(
        Statement::new(RuleId::PushToFirstPage, MessageId::PushToFirstPage)
            .arg("keyword", record.keyword())
            .arg("position", format_decimal(record.rounded_position(), 1)),
    )
}

pub fn broaden_coverage(records: &[KeywordRecord], _ctx: &KeywordContext) -> Option<Statement> {
    (!records.is_empty() && records.len() < NARROW_COVERAGE).then(|| {
        Statement::new(RuleId::BroadenCoverage, MessageId::BroadenCoverage)
            .arg("count", records.len().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::super::testutil::keyword;
    use super::super::{keyword_recommendations, RuleSet};
    use super::*;
    use crate::KeywordSummary;

    fn ctx() -> KeywordContext {
        KeywordContext {
            summary: KeywordSummary::default(),
        }
    }

    #[test]
    fn test_improve_ranking_window() {
        let records = vec![
            keyword("too-high", 50, 900, 5.0, 5.0),
            keyword("too-few", 40, 500, 8.0, 9.0),
            keyword("match", 30, 600, 5.0, 20.0),
            keyword("later", 20, 900, 2.2, 7.0),
        ];
        let s = improve_ranking(&records, &ctx()).unwrap();
        assert_eq!(s.get("keyword"), Some("match"));
        assert_eq!(s.get("position"), Some("20.0"));
    }

    #[test]
    fn test_improve_snippet_requires_low_ctr() {
        let records = vec![
            keyword("fine", 50, 2000, 2.5, 3.0),
            keyword("weak", 15, 1500, 1.0, 6.0),
        ];
        let s = improve_snippet(&records, &ctx()).unwrap();
        assert_eq!(s.get("keyword"), Some("weak"));
        assert_eq!(s.get("ctr"), Some("1.00"));

        let records = vec![keyword("fine", 50, 2000, 2.0, 3.0)];
        assert!(improve_snippet(&records, &ctx()).is_none());
    }

    #[test]
    fn test_improve_snippet_compares_at_two_decimals() {
        let records = vec![keyword("edge", 20, 1500, 1.996, 6.0)];
        assert!(improve_snippet(&records, &ctx()).is_none());

        let records = vec![keyword("edge", 20, 1500, 1.994, 6.0)];
        let s = improve_snippet(&records, &ctx()).unwrap();
        assert_eq!(s.get("ctr"), Some("1.99"));
    }

    #[test]
    fn test_position_windows_compare_at_one_decimal() {
        let records = vec![keyword("edge", 10, 900, 10.0, 5.04)];
        assert!(improve_ranking(&records, &ctx()).is_none());

        for (position, shown) in [(3.96, "4.0"), (10.04, "10.0")] {
            let records = vec![keyword("edge", 10, 100, 10.0, position)];
            let s = push_to_first_page(&records, &ctx()).unwrap();
            assert_eq!(s.get("position"), Some(shown));
        }
    }

    #[test]
    fn test_push_to_first_page_is_inclusive() {
        for position in [4.0, 10.0] {
            let records = vec![keyword("rust", 10, 100, 10.0, position)];
            assert!(push_to_first_page(&records, &ctx()).is_some());
        }
        for position in [3.9, 10.1] {
            let records = vec![keyword("rust", 10, 100, 10.0, position)];
            assert!(push_to_first_page(&records, &ctx()).is_none());
        }
    }

    #[test]
    fn test_broaden_coverage_cutoff() {
        let records: Vec<KeywordRecord> = (0..49)
            .map(|i| keyword(&format!("kw{}", i), 1, 10, 10.0, 1.0))
            .collect();
        let s = broaden_coverage(&records, &ctx()).unwrap();
        assert_eq!(s.get("count"), Some("49"));

        let records: Vec<KeywordRecord> = (0..50)
            .map(|i| keyword(&format!("kw{}", i), 1, 10, 10.0, 1.0))
            .collect();
        assert!(broaden_coverage(&records, &ctx()).is_none());
    }

    #[test]
    fn test_full_table_on_single_keyword() {
        let records = vec![keyword("rust", 20, 1200, 1.5, 7.0)];
        let narrative = keyword_recommendations(&records, &RuleSet::all());
        let rules: Vec<RuleId> = narrative.statements().iter().map(|s| s.rule).collect();
        assert_eq!(
            rules,
            vec![
                RuleId::StrengthenTopKeyword,
                RuleId::ImproveRanking,
                RuleId::ImproveSnippet,
                RuleId::PushToFirstPage,
                RuleId::BroadenCoverage,
            ]
        );
    }
}
