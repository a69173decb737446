//! Reporting windows

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// Supported reporting windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DateRangePreset {
    #[serde(rename = "7days")]
    Last7Days,
    #[default]
    #[serde(rename = "30days")]
    Last30Days,
    #[serde(rename = "90days")]
    Last90Days,
}

impl DateRangePreset {
    pub fn days(&self) -> i64 {
        match self {
            DateRangePreset::Last7Days => 7,
            DateRangePreset::Last30Days => 30,
            DateRangePreset::Last90Days => 90,
        }
    }

    /// Parse a window token. Unknown tokens fall back to 30 days.
    pub fn parse_lenient(token: &str) -> Self {
        match token.trim() {
            "7days" => DateRangePreset::Last7Days,
            "90days" => DateRangePreset::Last90Days,
            "30days" => DateRangePreset::Last30Days,
            other => {
                tracing::debug!(token = other, "unknown date range, using 30days");
                DateRangePreset::Last30Days
            }
        }
    }
}

impl<'de> Deserialize<'de> for DateRangePreset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&token))
    }
}

impl std::fmt::Display for DateRangePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}days", self.days())
    }
}

/// Concrete start/end dates of a reporting window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    #[serde(skip)]
    pub preset: DateRangePreset,
    #[serde(serialize_with = "serialize_date")]
    pub start_date: NaiveDate,
    #[serde(serialize_with = "serialize_date")]
    pub end_date: NaiveDate,
}

impl DateRange {
    /// Window of `preset` days ending on `end_date`
    pub fn ending(preset: DateRangePreset, end_date: NaiveDate) -> Self {
        Self {
            preset,
            start_date: end_date - Duration::days(preset.days()),
            end_date,
        }
    }

    /// Window ending today (local time)
    pub fn today(preset: DateRangePreset) -> Self {
        Self::ending(preset, Local::now().date_naive())
    }

    /// Start date as YYYY-MM-DD
    pub fn start(&self) -> String {
        self.start_date.format("%Y-%m-%d").to_string()
    }

    /// End date as YYYY-MM-DD
    pub fn end(&self) -> String {
        self.end_date.format("%Y-%m-%d").to_string()
    }
}

fn serialize_date<S: serde::Serializer>(
    date: &NaiveDate,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_lenient_known_tokens() {
        assert_eq!(DateRangePreset::parse_lenient("7days"), DateRangePreset::Last7Days);
        assert_eq!(DateRangePreset::parse_lenient("30days"), DateRangePreset::Last30Days);
        assert_eq!(DateRangePreset::parse_lenient("90days"), DateRangePreset::Last90Days);
    }

    #[test]
    fn test_parse_lenient_unknown_falls_back() {
        assert_eq!(DateRangePreset::parse_lenient("custom"), DateRangePreset::Last30Days);
        assert_eq!(DateRangePreset::parse_lenient(""), DateRangePreset::Last30Days);
    }

    #[test]
    fn test_ending_crosses_month_boundary() {
        let range = DateRange::ending(DateRangePreset::Last7Days, date(2024, 3, 3));
        assert_eq!(range.start(), "2024-02-25");
        assert_eq!(range.end(), "2024-03-03");
    }

    #[test]
    fn test_ninety_day_window() {
        let range = DateRange::ending(DateRangePreset::Last90Days, date(2024, 12, 31));
        assert_eq!(range.start(), "2024-10-02");
    }

    #[test]
    fn test_serializes_iso_dates() {
        let range = DateRange::ending(DateRangePreset::Last30Days, date(2024, 1, 31));
        let json = serde_json::to_value(range).unwrap();
        assert_eq!(json["startDate"], "2024-01-01");
        assert_eq!(json["endDate"], "2024-01-31");
        assert!(json.get("preset").is_none());
    }

    #[test]
    fn test_preset_display_matches_token() {
        assert_eq!(DateRangePreset::Last90Days.to_string(), "90days");
        let parsed: DateRangePreset = serde_json::from_str("\"7days\"").unwrap();
        assert_eq!(parsed, DateRangePreset::Last7Days);
        let parsed: DateRangePreset = serde_json::from_str("\"14days\"").unwrap();
        assert_eq!(parsed, DateRangePreset::Last30Days);
    }
}
