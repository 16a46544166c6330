//! Configuration types and CLI options.

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_QUERY_TIMEOUT_SECS, DEFAULT_RESOLVER};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line configuration for one audit run.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "domain_audit",
    about = "Audits the DNS health of a domain and prints a graded JSON report",
    version
)]
pub struct Config {
    /// Domain to audit (ASCII or internationalized; reduced to its
    /// registrable form)
    pub domain: String,

    /// Recursive resolver to query (host or host:port)
    #[arg(long, default_value = DEFAULT_RESOLVER)]
    pub resolver: String,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Per-DNS-query timeout in seconds
    #[arg(long, default_value_t = DEFAULT_QUERY_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Pretty-print the JSON report
    #[arg(long)]
    pub pretty: bool,
}
