//! CLI argument definitions for the schedule browser.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use sched_core::project::DEFAULT_EPOCH_YEAR;

#[derive(Parser)]
#[command(
    name = "schedule-studio",
    version,
    about = "Tuition schedule browser - filter class sessions and render calendars",
    long_about = "Browse a tuition centre's class schedule from the terminal.\n\n\
                  Loads session feeds (JSON), weekly slot schedules (file or remote\n\
                  endpoint), renders calendar grids and lists, and runs the form-option\n\
                  extraction batch."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the filtered session feed as week calendar grids.
    Calendar(CalendarArgs),

    /// Render the filtered session feed as a flat list.
    List(ListArgs),

    /// Render the weekly class template from a file or the remote endpoint.
    Weekly(WeeklyArgs),

    /// Show each facet's options with match counts under the current filters.
    Options(BrowseArgs),

    /// Convert a roster CSV export into a session feed JSON.
    Convert(ConvertArgs),

    /// Pull form-field metadata from the forms API into the spreadsheet.
    ExtractForms,
}

/// Source feed and filter flags shared by the browse commands.
#[derive(Args)]
pub struct BrowseArgs {
    /// Path to the session feed JSON.
    #[arg(value_name = "FEED")]
    pub feed: PathBuf,

    /// Assumed year for feed dates that omit one.
    #[arg(long = "year", default_value_t = DEFAULT_EPOCH_YEAR)]
    pub year: i32,

    /// Stream to browse (required before any dependent filter applies).
    #[arg(long = "stream")]
    pub stream: Option<String>,

    /// Level filter (repeatable).
    #[arg(long = "level")]
    pub level: Vec<String>,

    /// Subject filter (repeatable).
    #[arg(long = "subject")]
    pub subject: Vec<String>,

    /// Topic filter, in the "[Subject] Topic" form (repeatable).
    #[arg(long = "topic")]
    pub topic: Vec<String>,

    /// Centre filter (repeatable).
    #[arg(long = "centre")]
    pub centre: Vec<String>,

    /// Tutor filter (repeatable).
    #[arg(long = "tutor")]
    pub tutor: Vec<String>,
}

#[derive(Args)]
pub struct CalendarArgs {
    #[command(flatten)]
    pub browse: BrowseArgs,

    /// Show the detail card for the N-th projected event (1-based).
    #[arg(long = "detail", value_name = "N")]
    pub detail: Option<usize>,
}

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub browse: BrowseArgs,

    /// Only list sessions on this date (YYYY-MM-DD).
    #[arg(long = "date", value_name = "DATE")]
    pub date: Option<String>,
}

#[derive(Args)]
pub struct WeeklyArgs {
    /// Path to a weekly slot JSON file (omit to fetch from --url).
    #[arg(value_name = "SLOTS")]
    pub slots: Option<PathBuf>,

    /// Base URL of the remote schedule endpoint.
    #[arg(long = "url", value_name = "URL")]
    pub url: Option<String>,

    /// Directory for the fetch cache (remote source only).
    #[arg(long = "cache-dir", value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Always fetch, ignoring a fresh cache entry.
    #[arg(long = "no-cache")]
    pub no_cache: bool,

    /// Stream filter.
    #[arg(long = "stream")]
    pub stream: Option<String>,

    /// Level filter (repeatable).
    #[arg(long = "level")]
    pub level: Vec<String>,

    /// Subject filter (repeatable).
    #[arg(long = "subject")]
    pub subject: Vec<String>,

    /// Centre filter (repeatable).
    #[arg(long = "centre")]
    pub centre: Vec<String>,

    /// Tutor filter (repeatable).
    #[arg(long = "tutor")]
    pub tutor: Vec<String>,

    /// Show the detail card for the N-th projected event (1-based).
    #[arg(long = "detail", value_name = "N")]
    pub detail: Option<usize>,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Path to the roster CSV export.
    #[arg(value_name = "ROSTER")]
    pub roster: PathBuf,

    /// Output path for the session feed JSON.
    #[arg(long = "out", value_name = "PATH")]
    pub out: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
