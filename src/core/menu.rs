//! Main menu text and choice decoding

/// Banner and options printed at the top of every loop iteration
pub const MAIN_MENU: &str = "--Welcome to Simple Bank System--\n\
1. Create Account\n\
2. Switch Account\n\
3. Deposit Money\n\
4. Withdraw Money\n\
5. Check Balance\n\
6. Exit\n";

pub const CHOICE_PROMPT: &str = "Enter your choice: ";

/// The six actions reachable from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateAccount,
    SwitchAccount,
    Deposit,
    Withdraw,
    CheckBalance,
    Exit,
}

impl MenuChoice {
    /// Decode a typed menu number
    ///
    /// Numbers outside 1-6 map to `None`; the session treats those as an
    /// iteration that does nothing.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(MenuChoice::CreateAccount),
            2 => Some(MenuChoice::SwitchAccount),
            3 => Some(MenuChoice::Deposit),
            4 => Some(MenuChoice::Withdraw),
            5 => Some(MenuChoice::CheckBalance),
            6 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}
