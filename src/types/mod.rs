//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: the Account entity and its balance rules
//! - `amount`: console formatting for dollar amounts
//! - `error`: Error types for the bank system

pub mod account;
pub mod amount;
pub mod error;

pub use account::{Account, AccountId, MAX_ACCOUNT_ID};
pub use amount::Dollars;
pub use error::BankError;
