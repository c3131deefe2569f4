//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "insight",
    version,
    about = "Tabular Insight Studio - Analyze spreadsheets with multilingual role resolution",
    long_about = "Load a CSV/TSV/Excel upload, resolve its columns onto the Revenue, Product,\n\
                  Region and Month roles, aggregate the default chart set, and assemble a\n\
                  markdown report. Role inference runs offline unless a proposal file is given."
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
    /// Analyze one uploaded spreadsheet file.
    Analyze(AnalyzeArgs),

    /// List the builtin multilingual synonym table.
    Synonyms,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the CSV/TSV/Excel file to analyze.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Business question, in any language; printed with the summary prompt.
    #[arg(long = "question", value_name = "TEXT")]
    pub question: Option<String>,

    /// JSON file holding a role proposal, decoded exactly like a remote
    /// inference response. Without it, inference is disabled and resolution
    /// is purely local.
    #[arg(long = "proposal", value_name = "PATH")]
    pub proposal: Option<PathBuf>,

    /// Pre-generated narrative summary to include in the report.
    #[arg(long = "summary-file", value_name = "PATH")]
    pub summary_file: Option<PathBuf>,

    /// Directory to write the markdown report and chart data into.
    #[arg(long = "report-dir", value_name = "DIR")]
    pub report_dir: Option<PathBuf>,

    /// Print the role-inference prompt that would be sent to the model.
    #[arg(long = "show-prompt")]
    pub show_prompt: bool,

    /// Use strict resolver cutoffs.
    #[arg(long = "strict", conflicts_with = "relaxed")]
    pub strict: bool,

    /// Use relaxed resolver cutoffs for messy uploads.
    #[arg(long = "relaxed")]
    pub relaxed: bool,
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
