//! Line-oriented console for the interactive session
//!
//! Wraps a `BufRead` input and a `Write` output. Prompts are flushed before the
//! session blocks on input, and numbers are read the way a token scanner does:
//! blank lines are skipped, the first whitespace-separated token is parsed and
//! the rest of the line is thrown away.
//!
//! # Resource Lifetime
//!
//! The input reader is held from construction until [`Console::close`] is
//! called or end-of-input is reached, whichever happens first. After that every
//! read reports [`Reply::EndOfInput`].

use crate::types::BankError;
use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Outcome of reading one value from the console
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    /// A value was read and parsed
    Value(T),
    /// A token was read but did not parse; the line has been consumed
    Rejected(BankError),
    /// Input is closed or exhausted
    EndOfInput,
}

/// Console over an input reader and an output writer
#[derive(Debug)]
pub struct Console<R, W> {
    input: Option<R>,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console {
            input: Some(input),
            output,
        }
    }

    /// Write formatted text without a trailing newline
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), BankError> {
        self.output.write_fmt(args)?;
        Ok(())
    }

    /// Write `text` and flush so it is visible before the next read
    pub fn prompt(&mut self, text: &str) -> Result<(), BankError> {
        self.output.write_all(text.as_bytes())?;
        self.flush()
    }

    pub fn flush(&mut self) -> Result<(), BankError> {
        self.output.flush()?;
        Ok(())
    }

    /// Read one full line, without its line terminator
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, so a garbled
    /// line is still a line. Returns `Ok(None)` once input is exhausted or
    /// closed.
    pub fn read_line(&mut self) -> Result<Option<String>, BankError> {
        let Some(input) = self.input.as_mut() else {
            return Ok(None);
        };

        let mut buf = Vec::new();
        if input.read_until(b'\n', &mut buf)? == 0 {
            log::debug!("End of input reached, releasing reader");
            self.input = None;
            return Ok(None);
        }

        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Read the next token from input and parse it as `T`
    ///
    /// Blank lines are skipped. Anything after the first token on the line is
    /// discarded, whether or not the token parses.
    pub fn read_number<T: FromStr>(&mut self) -> Result<Reply<T>, BankError> {
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(Reply::EndOfInput);
            };

            let Some(token) = line.split_whitespace().next() else {
                continue;
            };

            return Ok(match token.parse::<T>() {
                Ok(value) => Reply::Value(value),
                Err(_) => {
                    log::debug!("Discarding non-numeric input: {:?}", line);
                    Reply::Rejected(BankError::non_numeric(token))
                }
            });
        }
    }

    /// Release the input reader
    ///
    /// Idempotent; later reads report end of input.
    pub fn close(&mut self) {
        if self.input.take().is_some() {
            log::debug!("Input reader released");
        }
    }

    pub fn is_open(&self) -> bool {
        self.input.is_some()
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
