//! Console reporter with colored output

use crate::messages::{format_count, format_decimal, Markup, MessageCatalog};
use crate::{
    KeywordAnalysis, KeywordScoreBreakdown, Narrative, ScoreBand, TrafficAnalysis,
    TrafficScoreBreakdown,
};
use colored::{ColoredString, Colorize};

/// Reporter for terminal output
pub struct ConsoleReporter {
    catalog: MessageCatalog,
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show score breakdowns
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new(catalog: MessageCatalog) -> Self {
        Self {
            catalog,
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    pub fn report_traffic(&self, analysis: &TrafficAnalysis) {
        print!("{}", self.render_traffic(analysis));
    }

    pub fn report_keywords(&self, analysis: &KeywordAnalysis) {
        print!("{}", self.render_keywords(analysis));
    }

    /// Report in quiet mode (one line per record)
    pub fn report_quiet_traffic(&self, analysis: &TrafficAnalysis) {
        for (rank, r) in analysis.sources.iter().enumerate() {
            println!(
                "{}. {}: {} ({})",
                rank + 1,
                r.source(),
                r.quality_score(),
                self.colorize_band(r.band())
            );
        }
    }

    pub fn report_quiet_keywords(&self, analysis: &KeywordAnalysis) {
        for (rank, k) in analysis.keywords.iter().enumerate() {
            println!(
                "{}. {}: {} clicks, score {} ({})",
                rank + 1,
                k.keyword(),
                k.clicks(),
                k.quality_score(),
                self.colorize_band(k.band())
            );
        }
    }

    pub fn render_traffic(&self, analysis: &TrafficAnalysis) -> String {
        let mut out = String::from("\n");
        out.push_str(&format!(
            "{}\n",
            self.paint("📊 Traffic Source Quality", |s| s.bold())
        ));
        if let Some(property) = &analysis.property {
            out.push_str(&format!("   Property: {}\n", property));
        }
        out.push_str(&format!(
            "   Period: {} to {} | Sources: {} | Sessions: {}\n\n",
            analysis.date_range.start(),
            analysis.date_range.end(),
            analysis.sources.len(),
            format_count(analysis.total_sessions)
        ));

        for (rank, r) in analysis.sources.iter().enumerate() {
            out.push_str(&format!(
                "   {:>2}. {} {} {}\n",
                rank + 1,
                self.create_score_bar(r.quality_score()),
                self.paint(r.source(), |s| s.bold()),
                self.paint(&format!("({})", r.source_medium()), |s| s.dimmed())
            ));
            out.push_str(&format!(
                "       sessions {} · users {} · bounce {}% · duration {} · pages {} · conversions {}\n",
                format_count(r.sessions()),
                format_count(r.users()),
                format_decimal(r.bounce_rate(), 1),
                r.avg_session_duration(),
                format_decimal(r.pages_per_session(), 1),
                format_count(r.conversions())
            ));
            if self.verbose {
                out.push_str(&self.traffic_breakdown(&r.breakdown()));
            }
        }

        out.push_str(&self.narratives(&analysis.insights, &analysis.recommendations));
        out
    }

    pub fn render_keywords(&self, analysis: &KeywordAnalysis) -> String {
        let summary = &analysis.summary;
        let mut out = String::from("\n");
        out.push_str(&format!(
            "{}\n",
            self.paint("🔎 Search Keyword Quality", |s| s.bold())
        ));
        if let Some(site) = &analysis.site_url {
            out.push_str(&format!("   Site: {}\n", site));
        }
        out.push_str(&format!(
            "   Period: {} to {} | Keywords: {} | Clicks: {} | Impressions: {} | CTR: {}%\n\n",
            analysis.date_range.start(),
            analysis.date_range.end(),
            summary.total_keywords,
            format_count(summary.total_clicks),
            format_count(summary.total_impressions),
            format_decimal(summary.average_ctr, 2)
        ));

        for (rank, k) in analysis.keywords.iter().enumerate() {
            out.push_str(&format!(
                "   {:>2}. {} {}\n",
                rank + 1,
                self.create_score_bar(k.quality_score()),
                self.paint(k.keyword(), |s| s.bold())
            ));
            out.push_str(&format!(
                "       clicks {} · impressions {} · ctr {}% · position {} · {}\n",
                format_count(k.clicks()),
                format_count(k.impressions()),
                format_decimal(k.ctr(), 2),
                format_decimal(k.position(), 1),
                self.catalog.potential_label(k.traffic_potential())
            ));
            if self.verbose {
                out.push_str(&self.keyword_breakdown(&k.breakdown()));
            }
        }

        out.push_str(&self.narratives(&analysis.insights, &analysis.recommendations));
        out
    }

    fn narratives(&self, insights: &Narrative, recommendations: &Narrative) -> String {
        let mut out = format!("\n   {}\n", self.paint("Insights:", |s| s.bold()));
        for line in self.catalog.render_narrative(insights, Markup::Plain) {
            out.push_str(&format!("   {} {}\n", self.paint("•", |s| s.blue()), line));
        }
        out.push_str(&format!(
            "\n   {}\n",
            self.paint("Recommendations:", |s| s.bold())
        ));
        for line in self.catalog.render_narrative(recommendations, Markup::Plain) {
            out.push_str(&format!("   {} {}\n", self.paint("→", |s| s.cyan()), line));
        }
        out.push('\n');
        out
    }

    fn traffic_breakdown(&self, b: &TrafficScoreBreakdown) -> String {
        self.breakdown(&[
            ("duration", b.duration, 30),
            ("bounce", b.bounce, 30),
            ("pages", b.pages, 20),
            ("conversion", b.conversion, 20),
        ])
    }

    fn keyword_breakdown(&self, b: &KeywordScoreBreakdown) -> String {
        self.breakdown(&[
            ("ctr", b.ctr, 40),
            ("position", b.position, 30),
            ("clicks", b.clicks, 20),
            ("impressions", b.impressions, 10),
        ])
    }

    fn breakdown(&self, parts: &[(&str, f64, u8)]) -> String {
        parts
            .iter()
            .map(|(name, score, weight)| {
                format!(
                    "       {} {} {} (weight {}%)\n",
                    self.create_mini_bar(*score),
                    self.paint(&format!("{:>5.1}", score), |s| s.dimmed()),
                    name,
                    weight
                )
            })
            .collect()
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.use_colors {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn colorize_band(&self, band: ScoreBand) -> String {
        let s = band.to_string();
        self.paint(&s, |s| match band {
            ScoreBand::High => s.green().bold(),
            ScoreBand::Medium => s.yellow(),
            ScoreBand::Low => s.red(),
        })
    }

    fn create_score_bar(&self, score: u8) -> String {
        let filled = (score as usize * 20) / 100;
        let empty = 20 - filled;

        let bar = format!("[{}{}] {:>3}", "█".repeat(filled), "░".repeat(empty), score);

        self.paint(&bar, |s| match ScoreBand::from_score(score) {
            ScoreBand::High => s.green(),
            ScoreBand::Medium => s.yellow(),
            ScoreBand::Low => s.red(),
        })
    }

    fn create_mini_bar(&self, score: f64) -> String {
        let filled = ((score.clamp(0.0, 100.0) / 10.0).round() as usize).min(10);
        let empty = 10 - filled;
        format!("[{}{}]", "▓".repeat(filled), "░".repeat(empty))
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(MessageCatalog::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::rules::testutil::{keyword, metrics, source};
    use crate::analyzer::AnalysisEngine;
    use crate::messages::Locale;
    use crate::{DateRange, DateRangePreset};
    use chrono::NaiveDate;

    fn range() -> DateRange {
        DateRange::ending(
            DateRangePreset::Last30Days,
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        )
    }

    #[test]
    fn test_traffic_render_plain() {
        let analysis = AnalysisEngine::new().analyze_traffic(
            vec![source(metrics("Organic Search", 1200))],
            None,
            range(),
        );
        let out = ConsoleReporter::default()
            .without_colors()
            .render_traffic(&analysis);

        assert!(out.contains("Organic Search"));
        assert!(out.contains("sessions 1,200"));
        assert!(out.contains("Insights:"));
        // Plain text: template markup is stripped
        assert!(out.contains("Organic Search is your highest-quality traffic source"));
        assert!(!out.contains("<strong>"));
        assert!(!out.contains("weight 30%"));
    }

    #[test]
    fn test_verbose_shows_breakdown() {
        let analysis = AnalysisEngine::new().analyze_keywords(
            vec![keyword("rust", 10, 100, 10.0, 2.0)],
            None,
            range(),
        );
        let out = ConsoleReporter::default()
            .without_colors()
            .verbose()
            .render_keywords(&analysis);
        assert!(out.contains("ctr (weight 40%)"));
        assert!(out.contains("position (weight 30%)"));
        assert!(out.contains("fully realized"));
    }

    #[test]
    fn test_empty_keyword_render() {
        let analysis = AnalysisEngine::new().analyze_keywords(Vec::new(), None, range());
        let out = ConsoleReporter::new(MessageCatalog::new(Locale::He))
            .without_colors()
            .render_keywords(&analysis);
        assert!(out.contains("לא נמצאו נתונים לניתוח"));
        assert!(out.contains("אין מספיק נתונים להמלצות"));
    }

    #[test]
    fn test_render_layout_lines() {
        let analysis = AnalysisEngine::new().analyze_traffic(
            vec![source(metrics("Direct", 300))],
            Some("7"),
            range(),
        );
        let out = ConsoleReporter::default()
            .without_colors()
            .verbose()
            .render_traffic(&analysis);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "📊 Traffic Source Quality");
        assert_eq!(lines[2], "   Property: properties/7");
        assert_eq!(
            lines[3],
            "   Period: 2024-05-31 to 2024-06-30 | Sources: 1 | Sessions: 300"
        );
        assert_eq!(lines[4], "");
        assert!(lines[6].starts_with("       sessions 300 · users 300 · bounce 50.0%"));
        assert_eq!(out.matches("(weight ").count(), 4);
        assert!(out.contains("\n   Recommendations:\n   → "));
        assert!(out.ends_with("\n\n"));
    }

    #[test]
    fn test_score_bar_width() {
        let reporter = ConsoleReporter::default().without_colors();
        assert_eq!(
            reporter.create_score_bar(50),
            format!("[{}{}]  50", "█".repeat(10), "░".repeat(10))
        );
        assert_eq!(reporter.create_mini_bar(100.0), format!("[{}]", "▓".repeat(10)));
    }
}
