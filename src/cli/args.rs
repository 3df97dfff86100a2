use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Simple Bank System: an interactive, in-memory bank front desk
#[derive(Parser, Debug)]
#[command(name = "simple-bank-system")]
#[command(about = "Interactive in-memory bank front desk", long_about = None)]
pub struct CliArgs {
    /// Diagnostic log level written to stderr
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        help = "Log level for stderr diagnostics (default: warn, or RUST_LOG if set)"
    )]
    pub log_level: Option<LogLevel>,

    /// Seed for account numbers
    #[arg(
        long = "seed",
        value_name = "SEED",
        help = "Seed the account number generator for reproducible runs"
    )]
    pub seed: Option<u64>,
}

/// Log levels accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl CliArgs {
    /// Log level requested on the command line, if any
    pub fn level_filter(&self) -> Option<LevelFilter> {
        self.log_level.map(LevelFilter::from)
    }
}
