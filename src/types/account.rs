//! Account-related types for the Simple Bank System
//!
//! This module defines the Account structure and the balance rules every
//! account enforces on its own.

use super::amount::Dollars;
use super::error::BankError;
use rust_decimal::Decimal;

/// Account number
///
/// Drawn from `0..=MAX_ACCOUNT_ID`, so it always fits a signed 32-bit integer.
pub type AccountId = u32;

/// Largest account number ever handed out
pub const MAX_ACCOUNT_ID: AccountId = i32::MAX as AccountId;

/// A customer account
///
/// Holder name and account number are fixed at creation. The balance never
/// drops below zero: every rule is checked before the balance is touched.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    holder_name: String,
    id: AccountId,
    balance: Decimal,
}

impl Account {
    /// Open an account with a starting balance
    ///
    /// # Errors
    ///
    /// Returns `NegativeInitialDeposit` if `initial_deposit` is below zero.
    /// A zero starting balance is allowed.
    pub fn open(
        holder_name: impl Into<String>,
        id: AccountId,
        initial_deposit: Decimal,
    ) -> Result<Self, BankError> {
        if initial_deposit.is_sign_negative() && !initial_deposit.is_zero() {
            return Err(BankError::NegativeInitialDeposit {
                amount: Dollars(initial_deposit),
            });
        }

        Ok(Account {
            holder_name: holder_name.into(),
            id,
            balance: initial_deposit,
        })
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Add `amount` to the balance
    ///
    /// # Errors
    ///
    /// - `NonPositiveDeposit` if `amount <= 0`
    /// - `ArithmeticOverflow` if the new balance does not fit a `Decimal`
    ///
    /// The balance is unchanged on error.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::NonPositiveDeposit {
                amount: Dollars(amount),
            });
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("deposit", self.id))?;

        Ok(())
    }

    /// Subtract `amount` from the balance
    ///
    /// # Errors
    ///
    /// - `NonPositiveWithdrawal` if `amount <= 0`
    /// - `InsufficientFunds` if `balance - amount` would be negative; the error
    ///   carries the balance before the request
    ///
    /// The balance is unchanged on error.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::NonPositiveWithdrawal {
                amount: Dollars(amount),
            });
        }

        if self.balance < amount {
            return Err(BankError::insufficient_funds(
                Dollars(self.balance),
                Dollars(amount),
            ));
        }

        // Cannot underflow: amount <= balance and both are non-negative
        self.balance -= amount;

        Ok(())
    }
}
