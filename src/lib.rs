//! Simple Bank System Library
//! # Overview
//!
//! This library provides an in-memory, single-user bank front desk driven by a
//! text menu: open accounts, switch the current account, deposit, withdraw and
//! check the balance.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Dollars, BankError)
//! - [`cli`] - CLI arguments parsing
//! - [`config`] - Logger setup
//! - [`core`] - Business logic components:
//!   - [`core::account_manager`] - Account collection and current selection
//!   - [`core::session`] - Menu loop and action dispatch
//!   - [`core::id_generator`] - Account number generation
//! - [`io`] - Console input and output
//!
//! # Menu Actions
//!
//! 1. **Create Account**: open an account; the first one becomes current
//! 2. **Switch Account**: select another account by number
//! 3. **Deposit Money**: credit the current account (amount must be positive)
//! 4. **Withdraw Money**: debit the current account (cannot exceed the balance)
//! 5. **Check Balance**: show the current account's balance
//! 6. **Exit**: leave the session

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::{AccountManager, IdGenerator, MenuChoice, Session};
pub use types::{Account, AccountId, BankError, Dollars};
