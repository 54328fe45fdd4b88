//! CLI command implementations for the Forbes EU processor
//!
//! The CLI plays the role of the presentation selector: it loads the
//! export, runs the aggregation, and prints the aggregate chosen on the
//! command line.

use anyhow::Context;
use colored::*;
use std::time::Instant;
use tracing::info;

use crate::app::services::eu_aggregator::{aggregate, CountryAggregate, EuReferenceSet};
use crate::app::services::forbes_loader::DatasetLoader;
use crate::cli::args::{AggregateView, Args, Commands, ReportArgs};
use crate::config::Config;
use crate::constants::{EU_MEMBER_STATES, MARKET_VALUE_FORMAT};

const HEADLINE_COUNT: &str = "EU companies in the Forbes Global 2000";
const HEADLINE_MARKET_VALUE: &str = "Market value (in $M) of EU member states in the Forbes Global 2000";
const HEADLINE_RANKING: &str = "Best Forbes rank per EU member state";
const SUBHEADLINE_MORE_IS_BETTER: &str = "more is better, best last";
const SUBHEADLINE_LESS_IS_BETTER: &str = "less is better, best last";

/// Dispatch the parsed command line
pub fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Some(Commands::Report(report_args)) => run_report(report_args),
        Some(Commands::Countries) => run_countries(),
        None => Ok(()), // main prints the command overview
    }
}

/// Report command: load, aggregate, and print the selected view
fn run_report(args: ReportArgs) -> anyhow::Result<()> {
    setup_logging(&args)?;

    let start_time = Instant::now();

    let config = Config::default().with_delimiter(args.delimiter);
    let loader = DatasetLoader::new(config);
    let result = loader
        .load_file(&args.input_path)
        .with_context(|| format!("failed to load export '{}'", args.input_path.display()))?;

    info!(
        "loaded {} rows ({} skipped) in {:.3}s",
        result.stats.rows_loaded,
        result.stats.records_skipped,
        start_time.elapsed().as_secs_f64()
    );

    let aggregates = aggregate(&result.table, &EuReferenceSet::default())
        .context("failed to aggregate the loaded table")?;

    match args.view {
        AggregateView::Count => {
            print_headline(HEADLINE_COUNT, SUBHEADLINE_MORE_IS_BETTER);
            print_listing(&aggregates.company_count, |value| {
                format!("{}", value.round() as i64)
            });
        }
        AggregateView::MarketValue => {
            print_headline(HEADLINE_MARKET_VALUE, SUBHEADLINE_MORE_IS_BETTER);
            print_listing(&aggregates.market_value, |value| {
                format_with_hint(value, MARKET_VALUE_FORMAT)
            });
        }
        AggregateView::Rank => {
            print_headline(HEADLINE_RANKING, SUBHEADLINE_LESS_IS_BETTER);
            print_listing(&aggregates.best_rank, |value| format!("{}", value));
        }
    }

    Ok(())
}

/// Countries command: list the reference set used for filtering
fn run_countries() -> anyhow::Result<()> {
    println!("{}", "EU member states used for filtering".bold());
    for country in EU_MEMBER_STATES {
        println!("  {}", country);
    }
    println!("{}", format!("({} countries)", EU_MEMBER_STATES.len()).dimmed());
    Ok(())
}

/// Set up structured logging for the report command
fn setup_logging(args: &ReportArgs) -> anyhow::Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("forbes_eu_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

/// Print a report headline with its sort-direction hint
fn print_headline(headline: &str, subheadline: &str) {
    println!("{}", headline.bold());
    println!("{}", subheadline.dimmed());
    println!();
}

/// Print one aggregate as an aligned country/value listing
fn print_listing<V, F>(aggregate: &CountryAggregate<V>, format_value: F)
where
    V: Copy,
    F: Fn(V) -> String,
{
    if aggregate.is_empty() {
        println!("{}", "no matching records".dimmed());
        return;
    }

    let name_width = aggregate
        .keys()
        .iter()
        .map(|country| country.len())
        .max()
        .unwrap_or(0);

    for (country, value) in aggregate.iter() {
        println!("  {:<name_width$}  {:>10}", country, format_value(value));
    }
}

/// Format a value per a display hint.
///
/// The only hint the export carries is `###,###`: a whole number with
/// comma-grouped thousands. Unknown hints fall back to plain formatting.
pub fn format_with_hint(value: f64, hint: &str) -> String {
    match hint {
        "###,###" => format_with_thousands(value),
        _ => format!("{}", value),
    }
}

/// Round to a whole number and group thousands with commas
fn format_with_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, digit) in digits.chars().enumerate() {
        let remaining = digits.len() - position;
        if position > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
