//! Command line arguments.

use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

/// Checks that IP addresses are publicly routable unicast addresses.
#[derive(Debug, Parser)]
#[command(name = "addr_guard", version, about)]
pub struct Cli {
    /// Addresses to check (IPv4 or IPv6 literals).
    #[arg(value_name = "ADDRESS")]
    pub addresses: Vec<String>,

    /// Read addresses from a file (whitespace or comma separated, `#` comments).
    #[arg(short, long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Also check every address assigned to local network interfaces.
    #[arg(short, long)]
    pub interfaces: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Exit with status 2 if any address is private or invalid.
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Logging arguments.
#[derive(Debug, Clone, Default, Args)]
pub struct LogArgs {
    /// Only log errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Log filter directive (e.g., "addr_guard=trace").
    #[arg(long = "log.filter", value_name = "DIRECTIVE")]
    pub filter: Option<String>,
}
