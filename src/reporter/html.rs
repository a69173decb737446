//! HTML reporter: list fragments for embedding and a self-contained page
//!
//! Fragments are what the JSON envelope carries and what `--html` prints.
//! The page wraps both narratives and a records table into one document with
//! inline CSS and no scripts.

use crate::messages::{escape_html, format_count, format_decimal, Markup, MessageCatalog};
use crate::{KeywordAnalysis, MessageId, Narrative, ScoreBand, TrafficAnalysis};

/// Container class used when config does not set `htmlClass`
pub const DEFAULT_LIST_CLASS: &str = "mb-0 mt-2";

/// Reporter that renders narratives and analyses as HTML
#[derive(Debug, Clone)]
pub struct HtmlReporter {
    catalog: MessageCatalog,
    list_class: String,
}

impl HtmlReporter {
    pub fn new(catalog: MessageCatalog) -> Self {
        Self {
            catalog,
            list_class: DEFAULT_LIST_CLASS.to_string(),
        }
    }

    /// Override the class attribute of the `<ul>` container
    pub fn with_list_class(mut self, class: impl Into<String>) -> Self {
        self.list_class = class.into();
        self
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// `<ul>` of statements, or the bare placeholder sentence
    pub fn fragment(&self, narrative: &Narrative) -> String {
        let items = self.catalog.render_narrative(narrative, Markup::Html);
        if narrative.is_placeholder() {
            return items.concat();
        }

        let mut html = format!("<ul class='{}'>", escape_html(&self.list_class));
        for item in items {
            html.push_str("<li>");
            html.push_str(&item);
            html.push_str("</li>");
        }
        html.push_str("</ul>");
        html
    }

    /// Both fragments, each preceded by a marker comment
    pub fn fragments(&self, insights: &Narrative, recommendations: &Narrative) -> String {
        format!(
            "<!-- insights -->\n{}\n<!-- recommendations -->\n{}\n",
            self.fragment(insights),
            self.fragment(recommendations)
        )
    }

    /// Full page for a traffic source analysis
    pub fn traffic_page(&self, analysis: &TrafficAnalysis) -> String {
        let mut table = self.table_head(&[
            MessageId::ColumnSource,
            MessageId::ColumnSourceMedium,
            MessageId::ColumnSessions,
            MessageId::ColumnUsers,
            MessageId::ColumnBounceRate,
            MessageId::ColumnDuration,
            MessageId::ColumnPages,
            MessageId::ColumnConversions,
            MessageId::ColumnScore,
        ]);
        for (rank, r) in analysis.sources.iter().enumerate() {
            table.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
                 <td>{}</td><td>{}</td><td>{}</td>{}</tr>",
                rank + 1,
                escape_html(r.source()),
                escape_html(r.source_medium()),
                format_count(r.sessions()),
                format_count(r.users()),
                format_decimal(r.bounce_rate(), 1),
                escape_html(r.avg_session_duration()),
                format_decimal(r.pages_per_session(), 1),
                format_count(r.conversions()),
                score_cell(r.quality_score(), r.band()),
            ));
        }
        table.push_str("</tbody></table>");

        let mut meta = self.catalog.render_message(
            MessageId::PageTrafficMeta,
            &[
                ("start", analysis.date_range.start()),
                ("end", analysis.date_range.end()),
                ("sessions", format_count(analysis.total_sessions)),
            ],
            Markup::Html,
        );
        if let Some(property) = &analysis.property {
            meta = format!("{} &middot; {}", escape_html(property), meta);
        }

        self.page(
            MessageId::PageTrafficTitle,
            &meta,
            &table,
            &analysis.insights,
            &analysis.recommendations,
        )
    }

    /// Full page for a keyword analysis
    pub fn keyword_page(&self, analysis: &KeywordAnalysis) -> String {
        let mut table = self.table_head(&[
            MessageId::ColumnQuery,
            MessageId::ColumnClicks,
            MessageId::ColumnImpressions,
            MessageId::ColumnCtr,
            MessageId::ColumnPosition,
            MessageId::ColumnPotential,
            MessageId::ColumnScore,
        ]);
        for (rank, k) in analysis.keywords.iter().enumerate() {
            table.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
                 <td>{}</td>{}</tr>",
                rank + 1,
                escape_html(k.keyword()),
                format_count(k.clicks()),
                format_count(k.impressions()),
                format_decimal(k.ctr(), 2),
                format_decimal(k.position(), 1),
                escape_html(&self.catalog.potential_label(k.traffic_potential())),
                score_cell(k.quality_score(), k.band()),
            ));
        }
        table.push_str("</tbody></table>");

        let summary = &analysis.summary;
        let mut meta = self.catalog.render_message(
            MessageId::PageKeywordMeta,
            &[
                ("start", analysis.date_range.start()),
                ("end", analysis.date_range.end()),
                ("clicks", format_count(summary.total_clicks)),
                ("impressions", format_count(summary.total_impressions)),
                ("ctr", format_decimal(summary.average_ctr, 2)),
            ],
            Markup::Html,
        );
        if let Some(site) = &analysis.site_url {
            meta = format!("{} &middot; {}", escape_html(site), meta);
        }

        self.page(
            MessageId::PageKeywordTitle,
            &meta,
            &table,
            &analysis.insights,
            &analysis.recommendations,
        )
    }

    fn label(&self, id: MessageId) -> String {
        self.catalog.render_message(id, &[], Markup::Html)
    }

    /// `<table>` opening with a rank column followed by `columns`
    fn table_head(&self, columns: &[MessageId]) -> String {
        let mut head = String::from("<table><thead><tr><th>#</th>");
        for id in columns {
            head.push_str(&format!("<th>{}</th>", self.label(*id)));
        }
        head.push_str("</tr></thead><tbody>");
        head
    }

    fn page(
        &self,
        title: MessageId,
        meta: &str,
        table: &str,
        insights: &Narrative,
        recommendations: &Narrative,
    ) -> String {
        let locale = self.catalog.locale();
        let dir = if locale.is_rtl() { "rtl" } else { "ltr" };
        let title = self.label(title);

        let mut html = String::with_capacity(8_192);
        html.push_str(&format!(
            "<!DOCTYPE html>\n<html lang=\"{}\" dir=\"{}\">\n<head>\n<meta charset=\"UTF-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>siteinsight &ndash; {}</title>\n",
            locale.code(),
            dir,
            title
        ));
        html.push_str(Self::template_style());
        html.push_str("</head>\n<body>\n<header>\n");
        html.push_str(&format!(
            "<h1>{}</h1>\n<div class=\"meta\">{}</div>\n</header>\n<main>\n",
            title, meta
        ));
        html.push_str(table);
        html.push_str(&format!(
            "\n<section class=\"insights\">\n<h2>{}</h2>\n{}\n</section>\n",
            self.label(MessageId::PageInsights),
            self.fragment(insights)
        ));
        html.push_str(&format!(
            "<section class=\"recommendations\">\n<h2>{}</h2>\n{}\n</section>\n",
            self.label(MessageId::PageRecommendations),
            self.fragment(recommendations)
        ));
        html.push_str("</main>\n</body>\n</html>\n");
        html
    }

    fn template_style() -> &'static str {
        r##"<style>
:root{--bg:#0d0d11;--surface:#16161b;--border:#2a2a32;--text:#e4e4e7;--muted:#71717a;--green:#22c55e;--yellow:#eab308;--red:#ef4444;--radius:8px}
*{box-sizing:border-box;margin:0;padding:0}
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,Oxygen,sans-serif;background:var(--bg);color:var(--text);line-height:1.5}
header{padding:1.25rem 1.5rem;border-bottom:1px solid var(--border)}
header h1{font-size:1.125rem;font-weight:700}
header .meta{font-size:.8125rem;color:var(--muted)}
main{padding:1rem 1.5rem}
table{width:100%;border-collapse:collapse;background:var(--surface);border:1px solid var(--border);border-radius:var(--radius);font-size:.8125rem;font-variant-numeric:tabular-nums}
th{text-align:start;font-size:.6875rem;text-transform:uppercase;letter-spacing:.5px;color:var(--muted);padding:.5rem .75rem;border-bottom:1px solid var(--border)}
td{padding:.5rem .75rem;border-bottom:1px solid var(--border)}
tr:last-child td{border-bottom:none}
section{margin-top:1.5rem}
section h2{font-size:.75rem;text-transform:uppercase;letter-spacing:.5px;color:var(--muted);margin-bottom:.5rem}
section ul{padding-inline-start:1.25rem}
section li{margin-bottom:.25rem}
.score{font-weight:700}
.band-high{color:var(--green)}
.band-medium{color:var(--yellow)}
.band-low{color:var(--red)}
</style>
"##
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new(MessageCatalog::default())
    }
}

fn score_cell(score: u8, band: ScoreBand) -> String {
    format!("<td class=\"score band-{}\">{}</td>", band, score)
}
