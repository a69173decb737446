//! Config schema and deserialization

use crate::analyzer::rules::RuleSet;
use crate::messages::{Locale, MessageCatalog, MessageId};
use crate::{DateRangePreset, RuleId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Rule switch (on, off)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleToggle {
    On,
    /// Disable the rule entirely
    Off,
}

/// Root config structure for .siteinsightrc.json
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Extend another config file (path relative to this config)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    /// Output language for insights and recommendations. Default: en
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,

    /// Reporting window. Default: 30days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRangePreset>,

    /// Per-rule switches. Key is the rule id in kebab-case.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub rules: HashMap<String, RuleToggle>,

    /// Template overrides keyed by message id
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub messages: HashMap<MessageId, String>,

    /// Class attribute for the HTML fragment container
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_class: Option<String>,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(
        mut self,
        cli_locale: Option<Locale>,
        cli_range: Option<DateRangePreset>,
    ) -> Self {
        if cli_locale.is_some() {
            self.locale = cli_locale;
        }
        if cli_range.is_some() {
            self.date_range = cli_range;
        }
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale.unwrap_or_default()
    }

    pub fn date_range(&self) -> DateRangePreset {
        self.date_range.unwrap_or_default()
    }

    /// Get the configured switch for a rule, or None if not in config
    pub fn rule_toggle(&self, rule_id: &str) -> Option<RuleToggle> {
        self.rules.get(rule_id).copied()
    }

    /// Rule ids in config that do not name a known rule
    pub fn unknown_rules(&self) -> Vec<&str> {
        let mut unknown: Vec<&str> = self
            .rules
            .keys()
            .map(String::as_str)
            .filter(|id| RuleId::parse(id).is_none())
            .collect();
        unknown.sort_unstable();
        unknown
    }

    /// Enabled rules after applying the `rules` switches
    pub fn rule_set(&self) -> RuleSet {
        RuleId::ALL
            .iter()
            .filter(|rule| self.rule_toggle(rule.as_str()) == Some(RuleToggle::Off))
            .fold(RuleSet::all(), |set, rule| set.disable(*rule))
    }

    /// Message catalog for the configured locale with template overrides applied
    pub fn catalog(&self) -> MessageCatalog {
        MessageCatalog::new(self.locale()).with_overrides(&self.messages)
    }

    /// Merge another config into this one (for extends)
    pub fn merge_from(&mut self, base: Config) {
        // Base values are overridden by this config's values
        if self.extends.is_none() {
            self.extends = base.extends;
        }
        if self.locale.is_none() {
            self.locale = base.locale;
        }
        if self.date_range.is_none() {
            self.date_range = base.date_range;
        }
        if self.html_class.is_none() {
            self.html_class = base.html_class;
        }

        for (rule, toggle) in base.rules {
            self.rules.entry(rule).or_insert(toggle);
        }
        for (id, template) in base.messages {
            self.messages.entry(id).or_insert(template);
        }
    }
}
