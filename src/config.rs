//! Logger setup
//!
//! Diagnostics go to stderr through `simple_logger` so they never mix with
//! the menu transcript on stdout.

use crate::types::BankError;
use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Level used when neither the command line nor `RUST_LOG` asks for one
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Install the global logger
///
/// An explicit `level` wins. Otherwise `RUST_LOG` is honoured, falling back to
/// [`DEFAULT_LEVEL`].
///
/// # Errors
///
/// Returns `LoggerError` if a logger is already installed.
pub fn configure_logging(level: Option<LevelFilter>) -> Result<(), BankError> {
    let logger = match level {
        Some(level) => SimpleLogger::new().with_level(level),
        None => SimpleLogger::new().with_level(DEFAULT_LEVEL).env(),
    };

    logger.init()?;
    log::debug!("Logger configured");
    Ok(())
}
