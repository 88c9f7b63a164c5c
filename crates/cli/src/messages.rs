//! User-facing text.

use ledger_core::{AccountId, Decimal, LedgerError};

pub const SIGN_IN_MENU: &str =
    "Choose an option:\n 1. Sign in to an existing account\n 2. Create a new account";
pub const COMMAND_MENU: &str = "Enter command:\n 1: deposit\n 2: withdraw\n 3: transfer\n 4: sign out\n 5: close account\n 6: account info";
pub const EXIT_MENU: &str =
    "Exit the system?\n 1: exit\n 2: continue with another account";

pub const ASK_ACCOUNT_ID: &str = "Enter account ID:";
pub const ASK_PASSWORD: &str = "Enter password:";
pub const ASK_NAME: &str = "Enter your name:";
pub const ASK_INITIAL_BALANCE: &str = "Enter initial balance:";
pub const ASK_DEPOSIT: &str = "Enter amount to deposit:";
pub const ASK_WITHDRAW: &str = "Enter amount to withdraw:";
pub const ASK_RECIPIENT: &str = "Enter recipient account ID:";
pub const ASK_TRANSFER: &str = "Enter amount to transfer:";

pub const ACCOUNT_NOT_FOUND: &str = "Account not found.";
pub const AUTH_SUCCEEDED: &str = "Authentication succeeded.";
pub const AUTH_FAILED: &str = "Authentication failed.";
pub const INVALID_OPTION: &str = "Invalid option. Please choose again.";
pub const INVALID_COMMAND: &str = "Invalid command.";
pub const INSUFFICIENT_BALANCE: &str = "Insufficient balance.";
pub const RECIPIENT_NOT_FOUND: &str = "Recipient account not found.";
pub const SIGNED_OUT: &str = "Signed out.";

pub fn account_created(id: &AccountId) -> String {
    format!("Account {id} created.")
}

pub fn signed_in(name: &str) -> String {
    format!("Signed in as {name}.")
}

pub fn new_balance(balance: Decimal) -> String {
    format!("New balance: {balance}")
}

pub fn transfer_succeeded(balance: Decimal) -> String {
    format!("Transfer successful. New balance: {balance}")
}

pub fn account_deleted(id: &AccountId) -> String {
    format!("Account {id} deleted.")
}

pub fn account_info(id: &AccountId, name: &str, balance: Decimal) -> String {
    format!("Account ID: {id}\nUsername: {name}\nBalance: {balance}")
}

/// Text shown for a rejected ledger operation.
pub fn ledger_error(err: &LedgerError) -> String {
    match err {
        LedgerError::InsufficientBalance { .. } => INSUFFICIENT_BALANCE.to_string(),
        LedgerError::InvalidAmount(reason) => format!("Invalid amount: {reason}"),
        LedgerError::InvalidTarget(reason) => format!("Invalid transfer target: {reason}"),
        LedgerError::NotFound(_) => ACCOUNT_NOT_FOUND.to_string(),
        LedgerError::AuthenticationFailed => AUTH_FAILED.to_string(),
    }
}
