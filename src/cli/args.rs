//! Command-line argument definitions for the Forbes EU processor
//!
//! Defines the CLI interface using the clap derive API.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::constants::DELIMITER;

/// CLI arguments for the Forbes EU processor
///
/// Loads a semicolon-delimited Forbes Global 2000 export and reports one of
/// the per-country EU aggregates: company count, total market value, or
/// best rank.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "forbes-eu",
    version,
    about = "Aggregate EU member-state statistics from the Forbes Global 2000 list",
    long_about = "Loads a semicolon-delimited export of the Forbes Global 2000 list of the \
                  world's largest public companies, filters the records down to EU member \
                  states, and reports per-country aggregates: company count, total market \
                  value, and best (lowest) Forbes rank."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the Forbes EU processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Load an export and print one of the per-country aggregates
    Report(ReportArgs),
    /// List the EU member states used for filtering
    Countries,
}

/// Arguments for the report command
#[derive(Debug, Clone, Parser)]
pub struct ReportArgs {
    /// Path to the Forbes Global 2000 export
    ///
    /// A missing file is not an error: the report degrades to empty
    /// aggregates, mirroring the graceful handling of an absent source.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Path to the semicolon-delimited Forbes Global 2000 export"
    )]
    pub input_path: PathBuf,

    /// Which aggregate to report
    #[arg(
        short = 'a',
        long = "aggregate",
        value_enum,
        default_value = "count",
        help = "Which per-country aggregate to print"
    )]
    pub view: AggregateView,

    /// Field delimiter of the export
    #[arg(
        long = "delimiter",
        value_name = "CHAR",
        default_value_t = DELIMITER,
        help = "Field delimiter of the export"
    )]
    pub delimiter: char,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// The three per-country aggregates a report can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AggregateView {
    /// Number of EU companies per country
    Count,
    /// Total market value per country
    MarketValue,
    /// Best (lowest) Forbes rank per country
    Rank,
}

impl ReportArgs {
    /// Map verbosity flags to a tracing level string
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
