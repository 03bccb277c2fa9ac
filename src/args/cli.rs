use clap::Parser;
use std::time::Duration;

use super::defaults::{DEFAULT_CONCURRENCY, DEFAULT_CYCLES};
use super::parsers::{
    parse_bool_env, parse_duration_arg, parse_positive_u64, parse_positive_usize,
};
use super::types::{OutputFormat, PositiveU64, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Cycle-based async HTTP load tester - fires fixed-width bursts of concurrent GETs and reports per-cycle and run-wide statistics.",
    next_help_heading = "Advanced Options"
)]
pub struct VolleyArgs {
    /// Target URL for the load test
    #[arg(long, short, help_heading = "Common Options")]
    pub url: Option<String>,

    /// Concurrent requests launched per cycle
    #[arg(
        long,
        short = 'c',
        alias = "requests-per-cycle",
        default_value = DEFAULT_CONCURRENCY,
        value_parser = parse_positive_usize,
        help_heading = "Common Options"
    )]
    pub concurrency: PositiveUsize,

    /// Number of cycles to run, one after another
    #[arg(
        long,
        short = 'n',
        default_value = DEFAULT_CYCLES,
        value_parser = parse_positive_u64,
        help_heading = "Common Options"
    )]
    pub cycles: PositiveU64,

    /// Per-request timeout enforced by the HTTP client (supports ms/s/m/h; unset = no timeout)
    #[arg(long = "timeout", value_parser = parse_duration_arg)]
    pub request_timeout: Option<Duration>,

    /// Timeout for establishing a new connection (supports ms/s/m/h; unset = no timeout)
    #[arg(long = "connect-timeout", value_parser = parse_duration_arg)]
    pub connect_timeout: Option<Duration>,

    /// Write the JSON report to this file
    #[arg(long = "output", short = 'o', help_heading = "Common Options")]
    pub output: Option<String>,

    /// Format of the report printed to stdout
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "text",
        help_heading = "Common Options"
    )]
    pub output_format: OutputFormat,

    /// Include one line per cycle in the text summary
    #[arg(long = "per-cycle")]
    pub per_cycle: bool,

    /// Disable the cycle progress line
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,

    /// Enable verbose logging (sets log level to debug unless overridden by VOLLEY_LOG/RUST_LOG)
    #[arg(long, short = 'v', alias = "debug", help_heading = "Common Options")]
    pub verbose: bool,

    /// Path to config file (TOML/JSON). Defaults to ./volley.toml or ./volley.json if present.
    #[arg(long, help_heading = "Common Options")]
    pub config: Option<String>,
}
