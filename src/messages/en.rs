use super::MessageId;

pub(super) const TEMPLATES: &[(MessageId, &str)] = &[
    (MessageId::TrafficNoData, "No data found for analysis"),
    (
        MessageId::TrafficNoRecommendations,
        "Not enough data for recommendations",
    ),
    (
        MessageId::TopSource,
        "<strong>{source}</strong> is your highest-quality traffic source (score {score}) with {sessions} sessions",
    ),
    (
        MessageId::LongSessions,
        "Average session duration from {source} is excellent ({duration})",
    ),
    (
        MessageId::LowBounce,
        "Bounce rate from {source} is very low ({bounce_rate}%) - excellent!",
    ),
    (
        MessageId::VolumeLeader,
        "<strong>{source}</strong> brings the most traffic ({sessions} sessions) but not necessarily the highest quality",
    ),
    (
        MessageId::WeakHighVolume,
        "There is room to improve <strong>{source}</strong> - it brings a lot of traffic ({sessions}) but at lower quality",
    ),
    (
        MessageId::InvestTopSource,
        "<strong>Increase investment in {source}</strong> - it is your highest-quality source",
    ),
    (
        MessageId::ReduceBounce,
        "<strong>Improve the user experience for {source}</strong> - high bounce rate ({bounce_rate}%)",
    ),
    (
        MessageId::DeepenContent,
        "<strong>Improve the content for {source}</strong> - visitors view few pages ({pages})",
    ),
    (
        MessageId::TrackConversions,
        "<strong>Add conversion goals for {source}</strong> - high traffic without conversion tracking",
    ),
    (MessageId::KeywordNoData, "No data found for analysis"),
    (
        MessageId::KeywordNoRecommendations,
        "Not enough data for recommendations",
    ),
    (
        MessageId::TopKeyword,
        "'<strong>{keyword}</strong>' brings the most traffic with {clicks} clicks",
    ),
    (
        MessageId::PositionExcellent,
        "Your site ranks at position {position} for '{keyword}' - excellent!",
    ),
    (
        MessageId::PositionImprovable,
        "Your site ranks at position {position} for '{keyword}' - there is room to improve",
    ),
    (
        MessageId::PositionPoor,
        "Your site ranks at position {position} for '{keyword}' - it needs optimization",
    ),
    (
        MessageId::HighCtr,
        "You have {count} search queries with a high CTR (above 5%) - great!",
    ),
    (
        MessageId::GoldenOpportunity,
        "{count} search queries get many impressions but rank low - a golden opportunity to improve!",
    ),
    (
        MessageId::SearchSummary,
        "Your site received {clicks} clicks from {impressions} impressions (average CTR {ctr}%)",
    ),
    (
        MessageId::StrengthenTopKeyword,
        "<strong>Keep strengthening the content for '{keyword}'</strong> - it is your most productive search query",
    ),
    (
        MessageId::ImproveRanking,
        "<strong>Improve the ranking for '{keyword}'</strong> - currently at position {position} with plenty of potential",
    ),
    (
        MessageId::ImproveSnippet,
        "<strong>Improve the title and meta description for '{keyword}'</strong> - low CTR ({ctr}%) despite many impressions",
    ),
    (
        MessageId::PushToFirstPage,
        "<strong>Push '{keyword}' to the top of page one</strong> - currently at position {position}",
    ),
    (
        MessageId::BroadenCoverage,
        "<strong>Broaden your keyword coverage</strong> - you only have {count} active search queries",
    ),
    (MessageId::PotentialFullyRealized, "fully realized"),
    (MessageId::PotentialLow, "low potential"),
    (MessageId::PotentialMedium, "medium potential (+{clicks})"),
    (MessageId::PotentialHigh, "high potential (+{clicks})"),
    (MessageId::PageTrafficTitle, "Traffic sources"),
    (MessageId::PageKeywordTitle, "Search keywords"),
    (MessageId::PageTrafficMeta, "{start} – {end} · {sessions} sessions"),
    (
        MessageId::PageKeywordMeta,
        "{start} – {end} · {clicks} clicks · {impressions} impressions · CTR {ctr}%",
    ),
    (MessageId::PageInsights, "Insights"),
    (MessageId::PageRecommendations, "Recommendations"),
    (MessageId::ColumnSource, "Source"),
    (MessageId::ColumnSourceMedium, "Source / medium"),
    (MessageId::ColumnSessions, "Sessions"),
    (MessageId::ColumnUsers, "Users"),
    (MessageId::ColumnBounceRate, "Bounce %"),
    (MessageId::ColumnDuration, "Avg. duration"),
    (MessageId::ColumnPages, "Pages / session"),
    (MessageId::ColumnConversions, "Conversions"),
    (MessageId::ColumnScore, "Score"),
    (MessageId::ColumnQuery, "Query"),
    (MessageId::ColumnClicks, "Clicks"),
    (MessageId::ColumnImpressions, "Impressions"),
    (MessageId::ColumnCtr, "CTR %"),
    (MessageId::ColumnPosition, "Position"),
    (MessageId::ColumnPotential, "Potential"),
];
