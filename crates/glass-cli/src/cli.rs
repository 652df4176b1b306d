//! CLI argument definitions for the Glass UI component tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "glass-ui",
    version,
    about = "Glass UI component explorer - discover components in the Glass UI library",
    long_about = "Discover components in the Glass UI library.\n\n\
                  Resolves free-form names (kebab-case, aliases, typos) against the\n\
                  generated component registry and prints ranked matches."
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
    /// List all components in the registry.
    List(ListArgs),

    /// Show details for a component, resolving fuzzy input to one name.
    Info(InfoArgs),

    /// Rank registry components against a free-form query.
    Search(SearchArgs),
}

#[derive(Parser)]
pub struct ListArgs {
    /// Only show components in this category (case-insensitive).
    #[arg(long = "category", value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Emit the component list as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct InfoArgs {
    /// Component name; kebab-case, aliases, and small typos all resolve.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Emit the resolution outcome as JSON instead of text.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Free-form query to rank components against.
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Show at most this many matches.
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Emit the ranked matches as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
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
