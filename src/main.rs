//! siteinsight: traffic source and search keyword quality CLI

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use siteinsight::config::{load_config, write_default_config, Config, CONFIG_FILENAME};
use siteinsight::ingest::request::{ga4_traffic_request, search_console_request};
use siteinsight::messages::Locale;
use siteinsight::reporter::{ConsoleReporter, HtmlReporter, JsonReporter};
use siteinsight::{DateRange, DateRangePreset};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// siteinsight: rank traffic sources and search keywords by quality
#[derive(Parser, Debug)]
#[command(name = "siteinsight")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score and rank traffic sources from a saved GA4 runReport response
    Traffic {
        /// GA4 runReport response (JSON)
        report: PathBuf,

        /// GA4 property id (with or without the properties/ prefix)
        #[arg(long)]
        property: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Score and rank keywords from a saved Search Console query response
    Keywords {
        /// Search Console searchanalytics.query response (JSON)
        report: PathBuf,

        /// Search Console site URL
        #[arg(long)]
        site: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the API request body whose response the other commands expect
    Request {
        #[command(subcommand)]
        kind: RequestKind,
    },

    /// Create .siteinsightrc.json with sensible defaults
    Init {
        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Output language: en, he
        #[arg(long)]
        locale: Option<Locale>,
    },
}

#[derive(Subcommand, Debug)]
enum RequestKind {
    /// GA4 runReport body
    Traffic {
        /// GA4 property id
        #[arg(long)]
        property: String,

        /// Reporting window: 7days, 30days, 90days
        #[arg(long)]
        range: Option<String>,
    },
    /// Search Console searchanalytics.query body
    Keywords {
        /// Reporting window: 7days, 30days, 90days
        #[arg(long)]
        range: Option<String>,
    },
}

#[derive(Args, Debug, Clone)]
struct OutputArgs {
    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Print only the insight and recommendation HTML fragments
    #[arg(long, conflicts_with = "json")]
    html: bool,

    /// Also write a self-contained HTML report to this file
    #[arg(long, value_name = "OUT")]
    html_page: Option<PathBuf>,

    /// Reporting window: 7days, 30days, 90days (anything else means 30days)
    #[arg(long)]
    range: Option<String>,

    /// Output language: en, he
    #[arg(long)]
    locale: Option<Locale>,

    /// Path to config file (default: search .siteinsightrc.json next to the report and in parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Quiet mode (minimal output)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output (score breakdowns, debug logging)
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Traffic {
            report,
            property,
            output,
        } => {
            siteinsight::logging::init(output.verbose, output.quiet);
            with_failure_envelope(output.json, || {
                run_traffic(&report, property.as_deref(), &output)
            })
        }
        Commands::Keywords {
            report,
            site,
            output,
        } => {
            siteinsight::logging::init(output.verbose, output.quiet);
            with_failure_envelope(output.json, || run_keywords(&report, site.as_deref(), &output))
        }
        Commands::Request { kind } => run_request(kind),
        Commands::Init { dir, locale } => run_init(dir.as_deref(), locale),
    }
}

/// With `--json`, failures are printed as the failure envelope as well
fn with_failure_envelope(json: bool, f: impl FnOnce() -> Result<ExitCode>) -> Result<ExitCode> {
    match f() {
        Err(e) if json => {
            println!("{}", JsonReporter::default().pretty().report_error(&format!("{:#}", e)));
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            Ok(ExitCode::from(2))
        }
        other => other,
    }
}

/// Load config for a report (CLI flags override config file)
fn resolve_config(report: &Path, output: &OutputArgs) -> Result<Config> {
    let work_dir = match report.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => std::env::current_dir().context("Failed to get current directory")?,
    };
    let work_dir = work_dir.canonicalize().unwrap_or(work_dir);

    let range = output.range.as_deref().map(DateRangePreset::parse_lenient);
    Ok(load_config(&work_dir, output.config.as_deref())?.merge_with_cli(output.locale, range))
}

fn html_reporter(config: &Config) -> HtmlReporter {
    let reporter = HtmlReporter::new(config.catalog());
    match &config.html_class {
        Some(class) => reporter.with_list_class(class.clone()),
        None => reporter,
    }
}

fn console_reporter(config: &Config, output: &OutputArgs) -> ConsoleReporter {
    let reporter = ConsoleReporter::new(config.catalog());
    if output.verbose {
        reporter.verbose()
    } else {
        reporter
    }
}

fn write_page(out: &Path, html: &str, quiet: bool) -> Result<()> {
    fs::write(out, html)
        .with_context(|| format!("Failed to write HTML report: {}", out.display()))?;
    if !quiet {
        eprintln!("{} {}", "Wrote".green(), out.display());
    }
    Ok(())
}

fn run_traffic(report: &Path, property: Option<&str>, output: &OutputArgs) -> Result<ExitCode> {
    let config = resolve_config(report, output)?;
    let analysis = siteinsight::analyze_traffic_file(report, &config, property)
        .with_context(|| format!("Failed to analyze {}", report.display()))?;
    let html = html_reporter(&config);

    if output.json {
        println!("{}", JsonReporter::new(html.clone()).pretty().report_traffic(&analysis));
    } else if output.html {
        print!("{}", html.fragments(&analysis.insights, &analysis.recommendations));
    } else if output.quiet {
        console_reporter(&config, output).report_quiet_traffic(&analysis);
    } else {
        console_reporter(&config, output).report_traffic(&analysis);
    }

    if let Some(out) = &output.html_page {
        write_page(out, &html.traffic_page(&analysis), output.quiet)?;
    }

    Ok(ExitCode::SUCCESS)
}

fn run_keywords(report: &Path, site: Option<&str>, output: &OutputArgs) -> Result<ExitCode> {
    let config = resolve_config(report, output)?;
    let analysis = siteinsight::analyze_keyword_file(report, &config, site)
        .with_context(|| format!("Failed to analyze {}", report.display()))?;
    let html = html_reporter(&config);

    if output.json {
        println!("{}", JsonReporter::new(html.clone()).pretty().report_keywords(&analysis));
    } else if output.html {
        print!("{}", html.fragments(&analysis.insights, &analysis.recommendations));
    } else if output.quiet {
        console_reporter(&config, output).report_quiet_keywords(&analysis);
    } else {
        console_reporter(&config, output).report_keywords(&analysis);
    }

    if let Some(out) = &output.html_page {
        write_page(out, &html.keyword_page(&analysis), output.quiet)?;
    }

    Ok(ExitCode::SUCCESS)
}

fn run_request(kind: RequestKind) -> Result<ExitCode> {
    let body = match kind {
        RequestKind::Traffic { property, range } => {
            let preset = range.as_deref().map(DateRangePreset::parse_lenient).unwrap_or_default();
            ga4_traffic_request(&property, &DateRange::today(preset))
        }
        RequestKind::Keywords { range } => {
            let preset = range.as_deref().map(DateRangePreset::parse_lenient).unwrap_or_default();
            search_console_request(&DateRange::today(preset))
        }
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&body).context("Failed to serialize request")?
    );
    Ok(ExitCode::SUCCESS)
}

fn run_init(dir: Option<&Path>, locale: Option<Locale>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let path = write_default_config(dir, locale.unwrap_or_default())?;
    eprintln!("{} {}", "Created".green(), path.display());
    Ok(ExitCode::SUCCESS)
}
