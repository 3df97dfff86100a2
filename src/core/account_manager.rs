//! Account management module
//!
//! This module provides the `AccountManager` struct which owns every account
//! opened during the session and tracks which one is current.
//!
//! The AccountManager is responsible for:
//! - Appending new accounts in the order they were opened
//! - Selecting the first account ever opened as the current account
//! - Switching the current account by account number
//! - Routing deposits and withdrawals to the current account

use crate::types::{Account, AccountId, BankError};
use rust_decimal::Decimal;

/// Owns all accounts and the current-account selection
///
/// The current account is stored by number rather than by reference; it is
/// only ever set to a number present in `accounts`, and accounts are never
/// removed.
#[derive(Debug, Default)]
pub struct AccountManager {
    /// Accounts in opening order
    accounts: Vec<Account>,

    /// Number of the account targeted by deposit, withdraw and balance checks
    current: Option<AccountId>,
}

impl AccountManager {
    /// Create an AccountManager with no accounts and nothing selected
    pub fn new() -> Self {
        AccountManager {
            accounts: Vec::new(),
            current: None,
        }
    }

    /// Open a new account and append it
    ///
    /// If no account is selected yet, the new account becomes current.
    ///
    /// # Errors
    ///
    /// Returns `NegativeInitialDeposit` for a negative starting balance; no
    /// account is added in that case.
    pub fn open_account(
        &mut self,
        holder_name: impl Into<String>,
        id: AccountId,
        initial_deposit: Decimal,
    ) -> Result<&Account, BankError> {
        let account = Account::open(holder_name, id, initial_deposit)?;

        if self.current.is_none() {
            self.current = Some(id);
        }

        self.accounts.push(account);
        Ok(&self.accounts[self.accounts.len() - 1])
    }

    /// Whether an account with this number exists
    pub fn contains(&self, id: AccountId) -> bool {
        self.find(id).is_some()
    }

    /// Look up an account by number
    pub fn find(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id() == id)
    }

    /// Make the account with number `id` current
    ///
    /// Takes the number as typed, so negative input is accepted and simply
    /// matches nothing.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` when no account has that number. The current
    /// selection is left unchanged.
    pub fn switch_to(&mut self, id: i32) -> Result<&Account, BankError> {
        let found = AccountId::try_from(id)
            .ok()
            .and_then(|id| self.accounts.iter().position(|a| a.id() == id));

        match found {
            Some(index) => {
                let account = &self.accounts[index];
                self.current = Some(account.id());
                Ok(account)
            }
            None => Err(BankError::AccountNotFound { id }),
        }
    }

    /// Number of the current account, if one is selected
    pub fn current_id(&self) -> Option<AccountId> {
        self.current
    }

    /// Whether `id` is the current account
    pub fn is_current(&self, id: AccountId) -> bool {
        self.current_id() == Some(id)
    }

    /// Number of the current account
    ///
    /// # Errors
    ///
    /// Returns `NoAccountSelected` when nothing is selected.
    pub fn require_current(&self) -> Result<AccountId, BankError> {
        self.current.ok_or(BankError::NoAccountSelected)
    }

    /// The current account
    ///
    /// # Errors
    ///
    /// Returns `NoAccountSelected` when nothing is selected.
    pub fn current(&self) -> Result<&Account, BankError> {
        let id = self.require_current()?;
        self.find(id).ok_or(BankError::NoAccountSelected)
    }

    fn current_mut(&mut self) -> Result<&mut Account, BankError> {
        let id = self.require_current()?;
        self.accounts
            .iter_mut()
            .find(|account| account.id() == id)
            .ok_or(BankError::NoAccountSelected)
    }

    /// Deposit into the current account and return the new balance
    ///
    /// # Errors
    ///
    /// - `NoAccountSelected` if no account is current
    /// - any error from [`Account::deposit`]
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, BankError> {
        let account = self.current_mut()?;
        account.deposit(amount)?;
        Ok(account.balance())
    }

    /// Withdraw from the current account and return the new balance
    ///
    /// # Errors
    ///
    /// - `NoAccountSelected` if no account is current
    /// - any error from [`Account::withdraw`]
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, BankError> {
        let account = self.current_mut()?;
        account.withdraw(amount)?;
        Ok(account.balance())
    }

    /// All accounts in opening order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
