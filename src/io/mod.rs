//! I/O module
//!
//! Console input and output for the interactive session.
//! - `console`: prompt writing and token-style numeric reads over any
//!   `BufRead`/`Write` pair

pub mod console;

pub use console::{Console, Reply};
