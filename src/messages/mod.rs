//! Message catalog: natural-language templates keyed by message id
//!
//! Rules only produce [`Statement`]s (a message id plus named arguments); the
//! catalog turns them into text. Templates use `{name}` placeholders and may
//! contain `<strong>` markup, which is kept for HTML and stripped for plain
//! text output.

mod en;
mod he;

use crate::{Narrative, Statement, TrafficPotential};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Catalog keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageId {
    TrafficNoData,
    TrafficNoRecommendations,
    TopSource,
    LongSessions,
    LowBounce,
    VolumeLeader,
    WeakHighVolume,
    InvestTopSource,
    ReduceBounce,
    DeepenContent,
    TrackConversions,
    KeywordNoData,
    KeywordNoRecommendations,
    TopKeyword,
    PositionExcellent,
    PositionImprovable,
    PositionPoor,
    HighCtr,
    GoldenOpportunity,
    SearchSummary,
    StrengthenTopKeyword,
    ImproveRanking,
    ImproveSnippet,
    PushToFirstPage,
    BroadenCoverage,
    PotentialFullyRealized,
    PotentialLow,
    PotentialMedium,
    PotentialHigh,
    // HTML page chrome
    PageTrafficTitle,
    PageKeywordTitle,
    PageTrafficMeta,
    PageKeywordMeta,
    PageInsights,
    PageRecommendations,
    ColumnSource,
    ColumnSourceMedium,
    ColumnSessions,
    ColumnUsers,
    ColumnBounceRate,
    ColumnDuration,
    ColumnPages,
    ColumnConversions,
    ColumnScore,
    ColumnQuery,
    ColumnClicks,
    ColumnImpressions,
    ColumnCtr,
    ColumnPosition,
    ColumnPotential,
}

impl MessageId {
    pub const ALL: [MessageId; 50] = [
        MessageId::TrafficNoData,
        MessageId::TrafficNoRecommendations,
        MessageId::TopSource,
        MessageId::LongSessions,
        MessageId::LowBounce,
        MessageId::VolumeLeader,
        MessageId::WeakHighVolume,
        MessageId::InvestTopSource,
        MessageId::ReduceBounce,
        MessageId::DeepenContent,
        MessageId::TrackConversions,
        MessageId::KeywordNoData,
        MessageId::KeywordNoRecommendations,
        MessageId::TopKeyword,
        MessageId::PositionExcellent,
        MessageId::PositionImprovable,
        MessageId::PositionPoor,
        MessageId::HighCtr,
        MessageId::GoldenOpportunity,
        MessageId::SearchSummary,
        MessageId::StrengthenTopKeyword,
        MessageId::ImproveRanking,
        MessageId::ImproveSnippet,
        MessageId::PushToFirstPage,
        MessageId::BroadenCoverage,
        MessageId::PotentialFullyRealized,
        MessageId::PotentialLow,
        MessageId::PotentialMedium,
        MessageId::PotentialHigh,
        MessageId::PageTrafficTitle,
        MessageId::PageKeywordTitle,
        MessageId::PageTrafficMeta,
        MessageId::PageKeywordMeta,
        MessageId::PageInsights,
        MessageId::PageRecommendations,
        MessageId::ColumnSource,
        MessageId::ColumnSourceMedium,
        MessageId::ColumnSessions,
        MessageId::ColumnUsers,
        MessageId::ColumnBounceRate,
        MessageId::ColumnDuration,
        MessageId::ColumnPages,
        MessageId::ColumnConversions,
        MessageId::ColumnScore,
        MessageId::ColumnQuery,
        MessageId::ColumnClicks,
        MessageId::ColumnImpressions,
        MessageId::ColumnCtr,
        MessageId::ColumnPosition,
        MessageId::ColumnPotential,
    ];
}

/// Built-in message languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    He,
}

impl Locale {
    pub fn parse(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "he" | "iw" => Some(Locale::He),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::He => "he",
        }
    }

    /// Whether text in this locale reads right to left
    pub fn is_rtl(&self) -> bool {
        matches!(self, Locale::He)
    }

    fn templates(&self) -> &'static [(MessageId, &'static str)] {
        match self {
            Locale::En => en::TEMPLATES,
            Locale::He => he::TEMPLATES,
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = crate::Error;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::parse(code).ok_or_else(|| {
            crate::Error::Config(format!("unknown locale '{}' (expected en or he)", code))
        })
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Output markup for rendered messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    /// Template markup kept, arguments HTML-escaped
    Html,
    /// Template markup stripped, arguments verbatim
    Plain,
}

/// Templates for every message id
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    locale: Locale,
    templates: HashMap<MessageId, String>,
}

impl MessageCatalog {
    pub fn new(locale: Locale) -> Self {
        let templates = locale
            .templates()
            .iter()
            .map(|(id, template)| (*id, (*template).to_string()))
            .collect();
        Self { locale, templates }
    }

    /// Replace individual templates (e.g. from config)
    pub fn with_overrides(mut self, overrides: &HashMap<MessageId, String>) -> Self {
        for (id, template) in overrides {
            self.templates.insert(*id, template.clone());
        }
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn template(&self, id: MessageId) -> &str {
        self.templates.get(&id).map(String::as_str).unwrap_or("")
    }

    /// Render a catalog entry with named arguments
    pub fn render_message(&self, id: MessageId, args: &[(&str, String)], markup: Markup) -> String {
        let template = self.template(id);
        let template = match markup {
            Markup::Html => template.to_string(),
            Markup::Plain => tag_pattern().replace_all(template, "").into_owned(),
        };

        placeholder_pattern()
            .replace_all(&template, |caps: &regex::Captures| {
                let name = &caps[1];
                match args.iter().find(|(key, _)| *key == name) {
                    Some((_, value)) => match markup {
                        Markup::Html => escape_html(value),
                        Markup::Plain => value.clone(),
                    },
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }

    pub fn render(&self, statement: &Statement, markup: Markup) -> String {
        self.render_message(statement.message, &statement.args, markup)
    }

    /// One string per statement, or the placeholder sentence alone
    pub fn render_narrative(&self, narrative: &Narrative, markup: Markup) -> Vec<String> {
        match narrative {
            Narrative::Placeholder(id) => vec![self.render_message(*id, &[], markup)],
            Narrative::Statements(statements) => statements
                .iter()
                .map(|statement| self.render(statement, markup))
                .collect(),
        }
    }

    /// Localized label of a traffic potential estimate
    pub fn potential_label(&self, potential: TrafficPotential) -> String {
        let (id, args) = match potential {
            TrafficPotential::FullyRealized => (MessageId::PotentialFullyRealized, vec![]),
            TrafficPotential::Low => (MessageId::PotentialLow, vec![]),
            TrafficPotential::Medium { additional_clicks } => (
                MessageId::PotentialMedium,
                vec![("clicks", additional_clicks.to_string())],
            ),
            TrafficPotential::High { additional_clicks } => (
                MessageId::PotentialHigh,
                vec![("clicks", additional_clicks.to_string())],
            ),
        };
        self.render_message(id, &args, Markup::Plain)
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::new(Locale::En)
    }
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{([a-z_]+)\}").expect("valid placeholder regex"))
}

fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"</?[a-zA-Z][^>]*>").expect("valid tag regex"))
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Integer with thousands separators: 12345 -> "12,345"
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Fixed-point decimal: format_decimal(3.14159, 1) -> "3.1"
pub fn format_decimal(value: f64, places: usize) -> String {
    format!("{:.*}", places, value)
}
