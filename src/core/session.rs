//! Interactive session controller
//!
//! The `Session` owns the console, the account manager and the account number
//! generator, and runs the menu loop:
//!
//! 1. Print the main menu and read a choice
//! 2. Dispatch to one of the six actions
//! 3. Repeat until the exit action (or end of input) stops the loop
//!
//! # Error Handling
//!
//! Business rule violations and non-numeric input are printed for the
//! customer and the loop carries on. Only console I/O failures end `run`
//! with an error.

use crate::core::account_manager::AccountManager;
use crate::core::id_generator::RandomIdGenerator;
use crate::core::menu::{MenuChoice, CHOICE_PROMPT, MAIN_MENU};
use crate::core::traits::IdGenerator;
use crate::io::{Console, Reply};
use crate::types::{Account, AccountId, BankError, Dollars};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

const FAREWELL: &str = "Thank you for using Simple Bank System!";

/// The bank front desk
pub struct Session<R, W, G = RandomIdGenerator> {
    console: Console<R, W>,
    manager: AccountManager,
    ids: G,
    running: bool,
}

impl<R: BufRead, W: Write> Session<R, W, RandomIdGenerator> {
    /// Session with random account numbers
    pub fn new(input: R, output: W) -> Self {
        Self::with_id_generator(input, output, RandomIdGenerator::new())
    }
}

impl<R: BufRead, W: Write, G: IdGenerator> Session<R, W, G> {
    /// Session drawing account numbers from `ids`
    pub fn with_id_generator(input: R, output: W, ids: G) -> Self {
        Session {
            console: Console::new(input, output),
            manager: AccountManager::new(),
            ids,
            running: false,
        }
    }

    /// Run the menu loop until the customer exits or input runs out
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the console cannot be read or written.
    pub fn run(&mut self) -> Result<(), BankError> {
        log::info!("Session started");
        self.running = true;

        while self.running {
            if let Some(choice) = self.show_main_menu()? {
                self.dispatch(choice)?;
            }
        }

        log::info!("Session ended with {} account(s)", self.manager.len());
        Ok(())
    }

    /// Print the menu and read one choice
    ///
    /// Returns `None` for numbers outside 1-6, for non-numeric input and at
    /// end of input.
    fn show_main_menu(&mut self) -> Result<Option<MenuChoice>, BankError> {
        write!(self.console, "{}", MAIN_MENU)?;
        self.console.prompt(CHOICE_PROMPT)?;

        match self.console.read_number::<i32>()? {
            Reply::Value(code) => {
                writeln!(self.console)?;
                let choice = MenuChoice::from_code(code);
                if choice.is_none() {
                    log::debug!("Ignoring menu choice {}", code);
                }
                Ok(choice)
            }
            Reply::Rejected(error) => {
                self.report(error)?;
                Ok(None)
            }
            Reply::EndOfInput => {
                self.end_of_input();
                Ok(None)
            }
        }
    }

    /// Run the action for `choice`
    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<(), BankError> {
        log::debug!("Dispatching {:?}", choice);
        match choice {
            MenuChoice::CreateAccount => self.create_account(),
            MenuChoice::SwitchAccount => self.switch_account(),
            MenuChoice::Deposit => self.deposit(),
            MenuChoice::Withdraw => self.withdraw(),
            MenuChoice::CheckBalance => self.check_balance(),
            MenuChoice::Exit => self.exit(),
        }
    }

    /// Prompt for a holder name and initial deposit, then open the account
    pub fn create_account(&mut self) -> Result<(), BankError> {
        writeln!(self.console, "--Create Account Selected--")?;
        self.console.prompt("Enter account holder name: ")?;
        let Some(name) = self.console.read_line()? else {
            self.end_of_input();
            return Ok(());
        };

        self.console.prompt("Enter initial deposit: ")?;
        let initial_deposit = match self.console.read_number::<Decimal>()? {
            Reply::Value(amount) => amount,
            Reply::Rejected(error) => return self.report(error),
            Reply::EndOfInput => {
                self.end_of_input();
                return Ok(());
            }
        };

        let id = self.next_account_id();
        let opened = self
            .manager
            .open_account(name.as_str(), id, initial_deposit)
            .map(|account| account.id());
        if let Err(error) = opened {
            return self.report(error);
        }
        log::info!("Opened account {} for {:?}", id, name);

        writeln!(
            self.console,
            "\nAccount created successfully! Account No: {}\n",
            id
        )?;

        if self.manager.is_current(id) {
            writeln!(self.console, "Current account is now set to {}\n", name)?;
        }

        Ok(())
    }

    /// List the accounts and make the chosen one current
    pub fn switch_account(&mut self) -> Result<(), BankError> {
        if self.manager.is_empty() {
            return self.report(BankError::NoAccountsAvailable);
        }

        writeln!(self.console, "Available Accounts:")?;
        for account in self.manager.accounts() {
            writeln!(
                self.console,
                "Account No: {} - {}",
                account.id(),
                account.holder_name()
            )?;
        }
        self.console.prompt("Enter account number to switch: ")?;

        let id = match self.console.read_number::<i32>()? {
            Reply::Value(id) => id,
            Reply::Rejected(error) => return self.report(error),
            Reply::EndOfInput => {
                self.end_of_input();
                return Ok(());
            }
        };

        let switched = self
            .manager
            .switch_to(id)
            .map(|account| account.holder_name().to_string());

        match switched {
            Ok(name) => {
                log::info!("Switched to account {}", id);
                writeln!(self.console, "Switched to account: {}\n", name)?;
                Ok(())
            }
            Err(error) => self.report(error),
        }
    }

    /// Deposit into the current account
    pub fn deposit(&mut self) -> Result<(), BankError> {
        if let Err(error) = self.manager.require_current() {
            return self.report(error);
        }

        self.console.prompt("Enter amount to deposit: ")?;
        let Some(amount) = self.read_amount()? else {
            return Ok(());
        };

        match self.manager.deposit(amount) {
            Ok(balance) => {
                writeln!(
                    self.console,
                    "Deposit successful! New balance: ${}\n",
                    Dollars::from(balance)
                )?;
                Ok(())
            }
            Err(error) => self.report(error),
        }
    }

    /// Withdraw from the current account
    ///
    /// A successful withdrawal prints nothing; the balance can be checked
    /// from the menu.
    pub fn withdraw(&mut self) -> Result<(), BankError> {
        if let Err(error) = self.manager.require_current() {
            return self.report(error);
        }

        self.console.prompt("Enter amount to withdraw: ")?;
        let Some(amount) = self.read_amount()? else {
            return Ok(());
        };

        match self.manager.withdraw(amount) {
            Ok(balance) => {
                log::debug!("Withdrew {}, balance now {}", amount, balance);
                Ok(())
            }
            Err(error) => self.report(error),
        }
    }

    /// Print the balance of the current account
    pub fn check_balance(&mut self) -> Result<(), BankError> {
        let balance = match self.manager.current().map(Account::balance) {
            Ok(balance) => balance,
            Err(error) => return self.report(error),
        };

        writeln!(self.console, "Current balance: ${}\n", Dollars::from(balance))?;
        Ok(())
    }

    /// Stop the loop, release input and say goodbye
    pub fn exit(&mut self) -> Result<(), BankError> {
        self.running = false;
        self.console.close();
        writeln!(self.console, "{}", FAREWELL)?;
        self.console.flush()?;
        Ok(())
    }

    /// Read a monetary amount, reporting bad input
    ///
    /// Returns `None` when the step should be abandoned.
    fn read_amount(&mut self) -> Result<Option<Decimal>, BankError> {
        match self.console.read_number::<Decimal>()? {
            Reply::Value(amount) => Ok(Some(amount)),
            Reply::Rejected(error) => {
                self.report(error)?;
                Ok(None)
            }
            Reply::EndOfInput => {
                self.end_of_input();
                Ok(None)
            }
        }
    }

    /// Draw account numbers until one is not already taken
    fn next_account_id(&mut self) -> AccountId {
        loop {
            let id = self.ids.next_id();
            if !self.manager.contains(id) {
                return id;
            }
            log::debug!("Account number {} already in use, drawing again", id);
        }
    }

    /// Input ran out: stop quietly
    fn end_of_input(&mut self) {
        log::info!("Input closed, leaving session");
        self.running = false;
        self.console.close();
    }

    /// Print a recoverable error for the customer
    ///
    /// Fatal errors are handed back to the caller instead.
    fn report(&mut self, error: BankError) -> Result<(), BankError> {
        if !error.is_recoverable() {
            return Err(error);
        }
        match &error {
            BankError::NonNumericInput { input } => {
                log::debug!("Rejected non-numeric token {:?}", input);
            }
            BankError::InsufficientFunds { balance, requested } => {
                log::debug!(
                    "Refused withdrawal of {} against balance {}",
                    requested.amount(),
                    balance.amount()
                );
            }
            other => log::debug!("Rejected: {:?}", other),
        }

        match error {
            BankError::NonNumericInput { .. } | BankError::NegativeInitialDeposit { .. } => {
                writeln!(self.console, "\n{}\n", error)
            }
            BankError::NonPositiveDeposit { .. }
            | BankError::NonPositiveWithdrawal { .. }
            | BankError::InsufficientFunds { .. }
            | BankError::ArithmeticOverflow { .. } => writeln!(self.console, "{}", error),
            _ => writeln!(self.console, "{}\n", error),
        }
    }

    /// Accounts in opening order
    pub fn accounts(&self) -> &[Account] {
        self.manager.accounts()
    }

    /// The current account, if one is selected
    pub fn current_account(&self) -> Option<&Account> {
        self.manager.current().ok()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the input reader is still held
    pub fn is_input_open(&self) -> bool {
        self.console.is_open()
    }

    pub fn output(&self) -> &W {
        self.console.output()
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::id_generator::SequentialIdGenerator;
    use std::io::{self, Cursor};

    type ScriptedSession = Session<Cursor<Vec<u8>>, Vec<u8>, SequentialIdGenerator>;

    fn session(script: &str) -> ScriptedSession {
        Session::with_id_generator(
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            SequentialIdGenerator::starting_at(1000),
        )
    }

    fn run_script(script: &str) -> (ScriptedSession, String) {
        let mut session = session(script);
        session.run().unwrap();
        let output = String::from_utf8(session.output().clone()).unwrap();
        (session, output)
    }

    fn menu_iteration() -> String {
        format!("{}{}\n", MAIN_MENU, CHOICE_PROMPT)
    }

    #[test]
    fn test_alice_scenario() {
        let (session, output) = run_script("1\nAlice\n100\n3\n50\n4\n200\n4\n150\n5\n6\n");

        assert!(output.contains("Account created successfully! Account No: 1000\n"));
        assert!(output.contains("Current account is now set to Alice\n"));
        assert!(output.contains("Deposit successful! New balance: $150.0\n"));
        assert!(output.contains("Can't withdraw more than balance.\nCurrent balance is $150.0\n"));
        assert!(output.contains("Current balance: $0.0\n"));
        assert!(output.ends_with("Thank you for using Simple Bank System!\n"));

        let account = session.current_account().unwrap();
        assert_eq!(account.balance(), Decimal::ZERO);
        assert!(!session.is_running());
        assert!(!session.is_input_open());
    }

    #[test]
    fn test_second_account_does_not_become_current() {
        let (session, output) = run_script("1\nAlice\n100\n1\nBob\n50\n6\n");

        assert_eq!(output.matches("Current account is now set to").count(), 1);
        assert_eq!(session.accounts().len(), 2);
        assert_eq!(session.accounts()[0].holder_name(), "Alice");
        assert_eq!(session.accounts()[1].holder_name(), "Bob");
        assert_eq!(session.current_account().unwrap().holder_name(), "Alice");
    }

    #[test]
    fn test_switch_then_deposit_affects_new_current() {
        let (session, output) =
            run_script("1\nAlice\n100\n1\nBob\n50\n2\n1001\n3\n25\n6\n");

        assert!(output.contains(
            "Available Accounts:\nAccount No: 1000 - Alice\nAccount No: 1001 - Bob\n"
        ));
        assert!(output.contains("Switched to account: Bob\n\n"));
        assert!(output.contains("Deposit successful! New balance: $75.0\n"));

        assert_eq!(session.current_account().unwrap().id(), 1001);
        assert_eq!(session.accounts()[0].balance(), Decimal::new(100, 0));
        assert_eq!(session.accounts()[1].balance(), Decimal::new(75, 0));
    }

    #[test]
    fn test_switch_to_unknown_account_keeps_current() {
        let (session, output) = run_script("1\nAlice\n100\n2\n42\n6\n");

        assert!(output.contains("Account not found!\n\n"));
        assert_eq!(session.current_account().unwrap().holder_name(), "Alice");
    }

    #[test]
    fn test_switch_with_no_accounts() {
        let (_, output) = run_script("2\n6\n");

        assert!(output.contains("No accounts available. Please create an account first.\n\n"));
        assert!(!output.contains("Enter account number to switch"));
    }

    #[test]
    fn test_actions_without_account_mutate_nothing() {
        let (session, output) = run_script("3\n4\n5\n6\n");

        assert_eq!(
            output
                .matches("No account selected. Please create or switch to an account first.\n\n")
                .count(),
            3
        );
        assert!(!output.contains("Enter amount"));
        assert!(session.accounts().is_empty());
        assert!(session.current_account().is_none());
    }

    #[test]
    fn test_unknown_choices_are_silent() {
        let (_, output) = run_script("0\n7\n-3\n6\n");

        let expected = format!(
            "{}{}{}{}Thank you for using Simple Bank System!\n",
            menu_iteration(),
            menu_iteration(),
            menu_iteration(),
            menu_iteration()
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_non_numeric_menu_choice_recovers() {
        let (_, output) = run_script("abc\n6\n");

        let expected = format!(
            "{}{}\nInput only numeric values\n\n{}Thank you for using Simple Bank System!\n",
            MAIN_MENU,
            CHOICE_PROMPT,
            menu_iteration()
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_non_numeric_amounts_recover() {
        let (session, output) = run_script("1\nAlice\nlots\n1\nAlice\n10\n3\nten\n4\nfive\n6\n");

        assert_eq!(output.matches("\nInput only numeric values\n\n").count(), 3);
        assert_eq!(session.accounts().len(), 1);
        assert_eq!(session.accounts()[0].balance(), Decimal::new(10, 0));
    }

    #[test]
    fn test_invalid_utf8_menu_choice_recovers() {
        let mut session = Session::with_id_generator(
            Cursor::new(b"\xff\xfe\n6\n".to_vec()),
            Vec::new(),
            SequentialIdGenerator::starting_at(1000),
        );

        session.run().unwrap();

        let output = String::from_utf8(session.into_output()).unwrap();
        let expected = format!(
            "{}{}\nInput only numeric values\n\n{}Thank you for using Simple Bank System!\n",
            MAIN_MENU,
            CHOICE_PROMPT,
            menu_iteration()
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_invalid_utf8_holder_name_is_kept() {
        let mut session = Session::with_id_generator(
            Cursor::new(b"1\nJos\xe9\n10\n6\n".to_vec()),
            Vec::new(),
            SequentialIdGenerator::starting_at(1000),
        );

        session.run().unwrap();

        assert_eq!(session.accounts()[0].holder_name(), "Jos\u{FFFD}");
        assert_eq!(session.accounts()[0].balance(), Decimal::new(10, 0));
        let output = String::from_utf8(session.into_output()).unwrap();
        assert!(output.ends_with("Thank you for using Simple Bank System!\n"));
    }

    #[test]
    fn test_non_positive_deposit_reports_and_keeps_balance() {
        let (session, output) = run_script("1\nAlice\n100\n3\n0\n3\n-5\n6\n");

        assert_eq!(
            output
                .matches("Deposit amount needs to be a positive number.\n")
                .count(),
            2
        );
        assert!(!output.contains("Deposit successful"));
        assert_eq!(session.accounts()[0].balance(), Decimal::new(100, 0));
    }

    #[test]
    fn test_negative_withdrawal_is_rejected() {
        let (session, output) = run_script("1\nAlice\n100\n4\n-50\n6\n");

        assert!(output.contains("Withdrawal amount needs to be a positive number.\n"));
        assert_eq!(session.accounts()[0].balance(), Decimal::new(100, 0));
    }

    #[test]
    fn test_negative_initial_deposit_creates_nothing() {
        let (session, output) = run_script("1\nAlice\n-100\n6\n");

        assert!(output.contains("\nInitial deposit can't be negative.\n\n"));
        assert!(!output.contains("Account created successfully"));
        assert!(session.accounts().is_empty());
    }

    #[test]
    fn test_holder_name_keeps_spaces() {
        let (session, output) = run_script("1\nMary Ann Smith\n5.25\n5\n6\n");

        assert!(output.contains("Current account is now set to Mary Ann Smith\n"));
        assert!(output.contains("Current balance: $5.25\n"));
        assert_eq!(session.accounts()[0].holder_name(), "Mary Ann Smith");
    }

    #[test]
    fn test_end_of_input_stops_quietly() {
        let (session, output) = run_script("1\nAlice\n");

        assert!(output.ends_with("Enter initial deposit: "));
        assert!(!output.contains("Thank you"));
        assert!(session.accounts().is_empty());
        assert!(!session.is_running());
        assert!(!session.is_input_open());
    }

    #[test]
    fn test_empty_input_ends_after_first_menu() {
        let (_, output) = run_script("");

        assert_eq!(output, format!("{}{}", MAIN_MENU, CHOICE_PROMPT));
    }

    #[test]
    fn test_colliding_ids_are_redrawn() {
        let candidates: Vec<AccountId> = vec![5, 5, 6];
        let mut ids = candidates.into_iter();
        let mut session = Session::with_id_generator(
            Cursor::new(b"1\nAlice\n1\n1\nBob\n2\n6\n".to_vec()),
            Vec::new(),
            move || ids.next().unwrap_or(0),
        );

        session.run().unwrap();

        let ids: Vec<AccountId> = session.accounts().iter().map(|a| a.id()).collect();
        assert_eq!(ids, vec![5, 6]);
    }

    #[test]
    fn test_dispatch_directly() {
        let mut session = session("Alice\n100\n");

        session.dispatch(MenuChoice::CreateAccount).unwrap();
        session.dispatch(MenuChoice::CheckBalance).unwrap();

        let output = String::from_utf8(session.into_output()).unwrap();
        assert!(output.ends_with("Current balance: $100.0\n\n"));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_output_failure_is_fatal() {
        let mut session = Session::with_id_generator(
            Cursor::new(b"6\n".to_vec()),
            BrokenPipe,
            SequentialIdGenerator::starting_at(1),
        );

        let result = session.run();

        assert_eq!(
            result,
            Err(BankError::IoError {
                message: "pipe closed".to_string()
            })
        );
    }
}
