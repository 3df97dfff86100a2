//! Error types for the Simple Bank System
//!
//! Every business rule the front desk enforces is a variant of [`BankError`].
//! The `Display` text of those variants is exactly what the customer sees on
//! the console, so the session reports a rejection by printing the error.
//!
//! # Error Categories
//!
//! - **Input Errors**: a number was expected but something else was typed
//! - **Business Rule Errors**: non-positive amounts, insufficient funds,
//!   unknown account numbers, no account selected
//! - **Arithmetic Errors**: a balance update would overflow
//! - **Fatal Errors**: console I/O failures and logger setup failures

use super::account::AccountId;
use super::amount::Dollars;
use thiserror::Error;

/// Main error type for the bank system
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// A numeric value was expected but the typed token did not parse
    ///
    /// Recoverable: the offending line is discarded and the menu resumes.
    #[error("Input only numeric values")]
    NonNumericInput {
        /// The token that failed to parse
        input: String,
    },

    /// Deposit of zero or a negative amount
    #[error("Deposit amount needs to be a positive number.")]
    NonPositiveDeposit {
        /// The rejected amount
        amount: Dollars,
    },

    /// Withdrawal of zero or a negative amount
    #[error("Withdrawal amount needs to be a positive number.")]
    NonPositiveWithdrawal {
        /// The rejected amount
        amount: Dollars,
    },

    /// Account opened with a negative starting balance
    #[error("Initial deposit can't be negative.")]
    NegativeInitialDeposit {
        /// The rejected amount
        amount: Dollars,
    },

    /// Withdrawal larger than the balance
    ///
    /// Carries the balance before the attempted withdrawal.
    #[error("Can't withdraw more than balance.\nCurrent balance is ${balance}")]
    InsufficientFunds {
        /// Balance at the time of the request
        balance: Dollars,
        /// Requested withdrawal amount
        requested: Dollars,
    },

    /// Switch target does not match any account number
    #[error("Account not found!")]
    AccountNotFound {
        /// The account number that was typed
        id: i32,
    },

    /// Deposit, withdraw or balance check with no current account
    #[error("No account selected. Please create or switch to an account first.")]
    NoAccountSelected,

    /// Switch requested before any account exists
    #[error("No accounts available. Please create an account first.")]
    NoAccountsAvailable,

    /// Balance arithmetic would overflow
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account number
        account: AccountId,
    },

    /// Reading the console or writing to it failed
    ///
    /// Fatal: the session stops and the error reaches `main`.
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// The logger could not be installed
    #[error("Logger setup failed: {message}")]
    LoggerError {
        /// Description of the failure
        message: String,
    },
}

impl From<std::io::Error> for BankError {
    fn from(error: std::io::Error) -> Self {
        BankError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<log::SetLoggerError> for BankError {
    fn from(error: log::SetLoggerError) -> Self {
        BankError::LoggerError {
            message: error.to_string(),
        }
    }
}

impl BankError {
    /// Create a NonNumericInput error
    pub fn non_numeric(input: &str) -> Self {
        BankError::NonNumericInput {
            input: input.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(balance: Dollars, requested: Dollars) -> Self {
        BankError::InsufficientFunds { balance, requested }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: AccountId) -> Self {
        BankError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }

    /// Whether the session reports this error and keeps running
    ///
    /// Only console I/O and logger failures are fatal.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            BankError::IoError { .. } | BankError::LoggerError { .. }
        )
    }
}
