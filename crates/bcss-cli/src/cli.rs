//! CLI argument definitions for the BCSS code registry tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bcss-codes",
    version,
    about = "Look up BCSS domain codes - labels, flags and valid value IDs",
    long_about = "Translate BCSS criteria labels into valid value identifiers and tokens.\n\n\
                  Identifiers default to the builtin reference set; pass --valid-values\n\
                  (or set BCSS_VALID_VALUES) to apply a target environment's values."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Valid values file (.toml or .csv) applied over the builtin identifiers.
    #[arg(long = "valid-values", value_name = "PATH", global = true)]
    pub valid_values: Option<PathBuf>,

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
    /// List every registry with its shape and entry count.
    Registries,

    /// Show the entries of one registry.
    Show(ShowArgs),

    /// Resolve a label, symbol or flag through a registry.
    Lookup(LookupArgs),

    /// Find the label or symbol registered for a valid value ID.
    Reverse(ReverseArgs),

    /// Check every registry for duplicate labels and identifiers.
    Verify,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Registry name, e.g. "Appointment Status Type" or appointment_status_type.
    #[arg(value_name = "REGISTRY")]
    pub registry: String,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct LookupArgs {
    #[arg(value_name = "REGISTRY")]
    pub registry: String,

    /// Text to resolve; case and surrounding whitespace are ignored.
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Print JSON instead of plain text.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ReverseArgs {
    #[arg(value_name = "REGISTRY")]
    pub registry: String,

    #[arg(value_name = "ID", allow_negative_numbers = true)]
    pub id: i64,
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
