use super::MessageId;

pub(super) const TEMPLATES: &[(MessageId, &str)] = &[
    (MessageId::TrafficNoData, "לא נמצאו נתונים לניתוח"),
    (MessageId::TrafficNoRecommendations, "אין מספיק נתונים להמלצות"),
    (
        MessageId::TopSource,
        "<strong>{source}</strong> הוא מקור התנועה הכי איכותי שלך (ציון {score}) עם {sessions} ביקורים",
    ),
    (
        MessageId::LongSessions,
        "זמן השהייה הממוצע מ-{source} מצוין ({duration})",
    ),
    (
        MessageId::LowBounce,
        "שיעור הנטישה מ-{source} נמוך מאוד ({bounce_rate}%) - זה מעולה!",
    ),
    (
        MessageId::VolumeLeader,
        "<strong>{source}</strong> מביא הכי הרבה תנועה ({sessions} ביקורים) אבל לא בהכרח הכי איכותית",
    ),
    (
        MessageId::WeakHighVolume,
        "יש הזדמנות לשיפור ב-<strong>{source}</strong> - מביא הרבה תנועה ({sessions}) אבל עם איכות נמוכה יותר",
    ),
    (
        MessageId::InvestTopSource,
        "<strong>הגדל השקעה ב-{source}</strong> - זה המקור הכי איכותי שלך",
    ),
    (
        MessageId::ReduceBounce,
        "<strong>שפר את חוויית המשתמש מ-{source}</strong> - שיעור נטישה גבוה ({bounce_rate}%)",
    ),
    (
        MessageId::DeepenContent,
        "<strong>שפר את התוכן עבור {source}</strong> - מבקרים רואים מעט דפים ({pages})",
    ),
    (
        MessageId::TrackConversions,
        "<strong>הוסף מטרות המרה עבור {source}</strong> - תנועה גבוהה ללא מעקב המרות",
    ),
    (MessageId::KeywordNoData, "לא נמצאו נתונים לניתוח"),
    (MessageId::KeywordNoRecommendations, "אין מספיק נתונים להמלצות"),
    (
        MessageId::TopKeyword,
        "'<strong>{keyword}</strong>' מביאה הכי הרבה תנועה עם {clicks} קליקים",
    ),
    (
        MessageId::PositionExcellent,
        "האתר שלך מדורג במקום {position} עבור '{keyword}' - מעולה!",
    ),
    (
        MessageId::PositionImprovable,
        "האתר שלך מדורג במקום {position} עבור '{keyword}' - יש מקום לשיפור",
    ),
    (
        MessageId::PositionPoor,
        "האתר שלך מדורג במקום {position} עבור '{keyword}' - צריך אופטימיזציה",
    ),
    (
        MessageId::HighCtr,
        "יש לך {count} מילות חיפוש עם CTR גבוה (מעל 5%) - זה מצוין!",
    ),
    (
        MessageId::GoldenOpportunity,
        "יש {count} מילות חיפוש עם הרבה הצגות אבל דירוג נמוך - הזדמנות זהב לשיפור!",
    ),
    (
        MessageId::SearchSummary,
        "האתר שלך קיבל {clicks} קליקים מ-{impressions} הצגות (CTR ממוצע {ctr}%)",
    ),
    (
        MessageId::StrengthenTopKeyword,
        "<strong>המשך לחזק את התוכן עבור '{keyword}'</strong> - זו מילת החיפוש הכי מניבה שלך",
    ),
    (
        MessageId::ImproveRanking,
        "<strong>שפר דירוג עבור '{keyword}'</strong> - כרגע במקום {position} עם הרבה פוטנציאל",
    ),
    (
        MessageId::ImproveSnippet,
        "<strong>שפר את ה-Title וה-Meta Description עבור '{keyword}'</strong> - CTR נמוך ({ctr}%) למרות הרבה הצגות",
    ),
    (
        MessageId::PushToFirstPage,
        "<strong>דחף את '{keyword}' לראש העמוד הראשון</strong> - כרגע במקום {position}",
    ),
    (
        MessageId::BroadenCoverage,
        "<strong>הרחב את היקף מילות החיפוש</strong> - יש לך רק {count} מילות חיפוש פעילות",
    ),
    (MessageId::PotentialFullyRealized, "מיצוי מלא"),
    (MessageId::PotentialLow, "פוטנציאל נמוך"),
    (MessageId::PotentialMedium, "פוטנציאל בינוני (+{clicks})"),
    (MessageId::PotentialHigh, "פוטנציאל גבוה (+{clicks})"),
    (MessageId::PageTrafficTitle, "מקורות תנועה"),
    (MessageId::PageKeywordTitle, "מילות חיפוש"),
    (MessageId::PageTrafficMeta, "{start} – {end} · {sessions} ביקורים"),
    (
        MessageId::PageKeywordMeta,
        "{start} – {end} · {clicks} קליקים · {impressions} חשיפות · CTR {ctr}%",
    ),
    (MessageId::PageInsights, "תובנות"),
    (MessageId::PageRecommendations, "המלצות"),
    (MessageId::ColumnSource, "מקור"),
    (MessageId::ColumnSourceMedium, "מקור / מדיום"),
    (MessageId::ColumnSessions, "ביקורים"),
    (MessageId::ColumnUsers, "משתמשים"),
    (MessageId::ColumnBounceRate, "שיעור נטישה %"),
    (MessageId::ColumnDuration, "משך ביקור ממוצע"),
    (MessageId::ColumnPages, "דפים לביקור"),
    (MessageId::ColumnConversions, "המרות"),
    (MessageId::ColumnScore, "ציון"),
    (MessageId::ColumnQuery, "מילת חיפוש"),
    (MessageId::ColumnClicks, "קליקים"),
    (MessageId::ColumnImpressions, "חשיפות"),
    (MessageId::ColumnCtr, "CTR %"),
    (MessageId::ColumnPosition, "מיקום"),
    (MessageId::ColumnPotential, "פוטנציאל"),
];
