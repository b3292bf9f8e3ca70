//! CLI entry point for the executive summary generator.

use anyhow::{anyhow, Result};
use chrono::Local;
use clap::Parser;
use dotenv::dotenv;
use execsum::agent::{trend_prompt, AgentProvider};
use execsum::answer::{AnswerEngine, RuleBasedAnswerer};
use execsum::{stats, summarize, DataSummary, ReportGenerator, Table, TableLoader};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[cfg(feature = "ai")]
use execsum::agent::GroqProvider;
#[cfg(feature = "ai")]
use execsum::answer::AgentAnswerer;
#[cfg(feature = "ai")]
use std::env;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "AI-optional executive summary generator for CSV datasets",
    long_about = "Loads a CSV dataset (whatever its encoding), prints a statistical summary,\n\
                  answers questions about the data, and assembles an executive report.\n\n\
                  ENVIRONMENT VARIABLES:\n  \
                  GROQ_API_KEY    API key for Groq (required for agent-backed answers)\n\n\
                  EXAMPLES:\n  \
                  # Summary only\n  \
                  execsum -i prices.csv\n\n  \
                  # Inspect a column and ask questions\n  \
                  execsum -i prices.csv --examine Close \\\n      \
                  --question \"What is the average closing price?\"\n\n  \
                  # Write the report, deterministic answers only\n  \
                  execsum -i prices.csv --question \"Show highest price\" --emit-report --no-ai"
)]
struct Args {
    /// Path to the CSV file to analyze
    #[arg(short, long)]
    input: String,

    /// Title for the generated report
    #[arg(long, default_value = "Data Analysis Summary Report")]
    title: String,

    /// A question to answer about the data (repeatable)
    #[arg(long = "question")]
    question: Vec<String>,

    /// Column name to examine (exact, case-sensitive match)
    #[arg(long)]
    examine: Option<String>,

    /// Output directory for the report
    #[arg(short, long, default_value = "./outputs")]
    output: String,

    /// Custom report file name (without extension)
    ///
    /// If not specified, uses "executive_summary"
    #[arg(long)]
    output_name: Option<String>,

    /// Disable agent-backed answers (deterministic rules only)
    #[arg(long, default_value = "false")]
    no_ai: bool,

    /// Write the report to the output directory
    #[arg(short = 'r', long)]
    emit_report: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show warnings and errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Initialize the tracing subscriber for logging.
fn init_logging(level: &str, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet);

    // Load environment variables from .env file
    dotenv().ok();

    if !Path::new(&args.input).exists() {
        return Err(anyhow!("Input file not found: {}", args.input));
    }

    info!("Loading dataset from: {}", args.input);
    let table = TableLoader::new().load_path(&args.input)?;
    info!("Dataset loaded successfully: {:?}", table.shape());

    let summary = summarize(&table);
    print_summary(&summary);

    #[cfg(feature = "ai")]
    if let Some(provider) = make_provider(&args)? {
        let engine = AgentAnswerer::new(&provider);
        return run_session(&args, &table, &engine, Some(&provider));
    }

    #[cfg(not(feature = "ai"))]
    if !args.no_ai {
        warn!("Agent support not compiled in. Using rule-based answers.");
        warn!("Compile with --features ai to enable agent support.");
    }

    let engine = RuleBasedAnswerer::new();
    run_session(&args, &table, &engine, None)
}

/// Create the Groq provider, or `None` when the deterministic path applies.
#[cfg(feature = "ai")]
fn make_provider(args: &Args) -> Result<Option<GroqProvider>> {
    if args.no_ai {
        info!("Running in rule-based mode (agent disabled)");
        return Ok(None);
    }

    let api_key = env::var("GROQ_API_KEY").unwrap_or_default();
    if api_key.is_empty() {
        warn!("GROQ_API_KEY not set. Falling back to rule-based answers.");
        return Ok(None);
    }

    info!("Running with agent-backed answers (Groq)");
    Ok(Some(GroqProvider::new(api_key)?))
}

/// Examine a column, answer the questions, assemble and emit the report.
fn run_session(
    args: &Args,
    table: &Table,
    engine: &dyn AnswerEngine,
    provider: Option<&dyn AgentProvider>,
) -> Result<()> {
    if let Some(feature) = &args.examine {
        examine_feature(table, feature, provider);
    }

    let generator = ReportGenerator::new(PathBuf::from(&args.output), args.output_name.clone());
    let report = generator.build_report(&args.title, &args.question, engine, table)?;

    println!("EXECUTIVE SUMMARY REPORT");
    println!("{}", "-".repeat(40));
    println!("Generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!();
    println!("{report}");

    if args.emit_report {
        let path = generator.write_report_to_file(&report)?;
        info!("Report written to: {}", path.display());
    }

    Ok(())
}

/// Print the automatic data summary.
///
/// Note: this function uses `println!` intentionally for user-facing CLI
/// output. Unlike logging (`info!`, `debug!`), this output should always be
/// visible regardless of log level settings.
fn print_summary(summary: &DataSummary) {
    println!();
    println!("{}", "=".repeat(80));
    println!("DATA SUMMARY");
    println!("{}", "=".repeat(80));
    println!();

    println!("SAMPLE OF DATA");
    println!("{}", "-".repeat(40));
    println!("  Rows: {}", summary.shape.0);
    println!("  Columns: {}", summary.shape.1);
    println!();
    print_row(&summary.columns);
    for row in &summary.head {
        print_row(row);
    }
    println!();

    println!("MISSING VALUES");
    println!("{}", "-".repeat(40));
    println!("  There are {} missing values in total.", summary.missing_total);
    for (name, count) in &summary.missing_by_column {
        if *count > 0 {
            println!("  {name}: {count}");
        }
    }
    println!();

    println!("DUPLICATE ROWS");
    println!("{}", "-".repeat(40));
    println!("  There are {} duplicate rows in total.", summary.duplicate_rows);
    println!();

    println!("STATISTICAL OVERVIEW");
    println!("{}", "-".repeat(40));
    if summary.metrics.is_empty() {
        println!("  No numeric columns found");
    } else {
        println!(
            "{:<20} {:>8} {:>12} {:>12} {:>12} {:>12}",
            "Column", "Count", "Mean", "Std", "Min", "Max"
        );
        println!("{}", "-".repeat(80));
        for m in &summary.metrics {
            println!(
                "{:<20} {:>8} {:>12.4} {:>12.4} {:>12.4} {:>12.4}",
                truncate_str(&m.name, 19),
                m.count,
                m.mean,
                m.std_dev,
                m.min,
                m.max
            );
        }
    }
    println!();
}

/// Examine one column: exact case-sensitive lookup, two outcomes.
fn examine_feature(table: &Table, name: &str, provider: Option<&dyn AgentProvider>) {
    println!("FEATURE EXAMINATION");
    println!("{}", "-".repeat(40));

    if !table.has_column(name) {
        println!("  The feature '{name}' was not found in the dataset.");
        println!();
        return;
    }

    if let Some(cells) = table.column(name) {
        let count = stats::count(cells);
        if count == 0 {
            println!("  '{name}' holds no numeric values to profile.");
        } else {
            println!("  Column: {name}");
            println!("  Numeric values: {count}");
            if let Some(mean) = stats::mean(cells) {
                println!("  Mean: {mean:.4}");
            }
            if let Some(std) = stats::std_dev(cells) {
                println!("  Std: {std:.4}");
            }
            if let Some(min) = stats::min(cells) {
                println!("  Min: {min:.4}");
            }
            if let Some(max) = stats::max(cells) {
                println!("  Max: {max:.4}");
            }
        }
    }

    if let Some(provider) = provider {
        match provider.ask(&trend_prompt(table, name)) {
            Ok(narrative) => {
                println!();
                println!("  Trend analysis:");
                println!("  {narrative}");
            }
            Err(e) => warn!("Trend analysis failed: {e}"),
        }
    }
    println!();
}

/// Render one row of the head sample with fixed-width cells.
fn print_row(cells: &[String]) {
    let line: String = cells
        .iter()
        .map(|c| format!("{:<15}", truncate_str(c, 14)))
        .collect();
    println!("  {}", line.trim_end());
}

/// Truncate a string to max length with ellipsis.
fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
