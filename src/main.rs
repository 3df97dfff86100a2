//! Simple Bank System CLI
//!
//! Interactive bank front desk on stdin/stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --log-level debug
//! cargo run -- --seed 42
//! ```
//!
//! # Exit Codes
//!
//! - 0: The customer chose Exit, or input ended
//! - 1: Error (console I/O failure, logger setup failure)

use simple_bank_system::core::RandomIdGenerator;
use simple_bank_system::{cli, config, Session};
use std::io;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    if let Err(e) = config::configure_logging(args.level_filter()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let ids = match args.seed {
        Some(seed) => {
            log::debug!("Seeding account numbers with {}", seed);
            RandomIdGenerator::seeded(seed)
        }
        None => RandomIdGenerator::new(),
    };

    let mut session = Session::with_id_generator(io::stdin().lock(), io::stdout().lock(), ids);
    if let Err(e) = session.run() {
        log::error!("Session aborted: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
