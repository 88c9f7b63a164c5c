//! Interactive session state machine.
//!
//! One pass of the outer loop is:
//!
//! ```text
//! sign-in / sign-up menu  →  command menu  →  "exit or continue?" prompt
//! ```
//!
//! The current account is held as an `AccountId` handle; every read and
//! mutation goes through the ledger, so there is no stale copy to re-save.
//! Every retry is a plain loop, and the sign-in menu gives up after
//! `max_invalid_options` consecutive invalid choices.

use ledger_core::{AccountId, Amount, Decimal, LedgerError};
use ledger_infra::{AccountRepository, Ledger};

use crate::error::SessionError;
use crate::messages;
use crate::port::InteractionPort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Consecutive invalid sign-in menu choices tolerated before giving up.
    pub max_invalid_options: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_invalid_options: 5,
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user chose to exit.
    Exited,
    /// The input stream closed.
    InputClosed,
}

/// How the command menu loop ended.
enum CommandsEnd {
    SignedOut,
    InputClosed,
}

pub struct Session<'a, R, P> {
    ledger: &'a mut Ledger<R>,
    port: P,
    config: SessionConfig,
}

impl<'a, R, P> Session<'a, R, P>
where
    R: AccountRepository,
    P: InteractionPort,
{
    pub fn new(ledger: &'a mut Ledger<R>, port: P, config: SessionConfig) -> Self {
        Self {
            ledger,
            port,
            config,
        }
    }

    pub fn run(&mut self) -> Result<SessionEnd, SessionError> {
        loop {
            let Some(current) = self.sign_in_or_up()? else {
                return Ok(SessionEnd::InputClosed);
            };
            if let CommandsEnd::InputClosed = self.handle_commands(&current)? {
                return Ok(SessionEnd::InputClosed);
            }

            match self.wants_to_exit()? {
                Some(true) => return Ok(SessionEnd::Exited),
                Some(false) => continue,
                None => return Ok(SessionEnd::InputClosed),
            }
        }
    }

    /// Sign in to an existing account or open a new one.
    ///
    /// Returns `None` when input closes first.
    pub fn sign_in_or_up(&mut self) -> Result<Option<AccountId>, SessionError> {
        let mut invalid = 0u32;
        loop {
            let Some(option) = self.prompt(messages::SIGN_IN_MENU)? else {
                return Ok(None);
            };
            let signed_in = match option.trim() {
                "1" => self.sign_in()?,
                "2" => self.sign_up()?,
                _ => {
                    invalid += 1;
                    tracing::debug!(invalid, "invalid sign-in menu option");
                    if invalid >= self.config.max_invalid_options {
                        return Err(SessionError::TooManyInvalidOptions(invalid));
                    }
                    self.port.show_info(messages::INVALID_OPTION)?;
                    continue;
                }
            };
            invalid = 0;

            match signed_in {
                Attempt::Done(id) => return Ok(Some(id)),
                Attempt::Retry => continue,
                Attempt::InputClosed => return Ok(None),
            }
        }
    }

    fn sign_in(&mut self) -> Result<Attempt, SessionError> {
        let Some(raw_id) = self.prompt(messages::ASK_ACCOUNT_ID)? else {
            return Ok(Attempt::InputClosed);
        };
        let id = AccountId::from(raw_id.trim());
        if self.ledger.account(&id).is_none() {
            self.port.show_info(messages::ACCOUNT_NOT_FOUND)?;
            return Ok(Attempt::Retry);
        }

        let Some(password) = self.prompt(messages::ASK_PASSWORD)? else {
            return Ok(Attempt::InputClosed);
        };
        match self.ledger.sign_in(&id, &password) {
            Ok(account) => {
                let greeting = messages::signed_in(account.display_name());
                self.port.show_info(messages::AUTH_SUCCEEDED)?;
                self.port.show_info(&greeting)?;
                Ok(Attempt::Done(id))
            }
            Err(err) => {
                self.port.show_info(&messages::ledger_error(&err))?;
                Ok(Attempt::Retry)
            }
        }
    }

    fn sign_up(&mut self) -> Result<Attempt, SessionError> {
        let Some(name) = self.prompt(messages::ASK_NAME)? else {
            return Ok(Attempt::InputClosed);
        };
        let Some(raw_balance) = self.prompt(messages::ASK_INITIAL_BALANCE)? else {
            return Ok(Attempt::InputClosed);
        };
        let balance = match raw_balance.parse::<Amount>() {
            Ok(amount) => amount,
            Err(err) => {
                self.port.show_info(&messages::ledger_error(&err))?;
                return Ok(Attempt::Retry);
            }
        };
        let Some(password) = self.prompt(messages::ASK_PASSWORD)? else {
            return Ok(Attempt::InputClosed);
        };

        match self.ledger.create_account(name, balance.value(), password) {
            Ok(account) => {
                let id = account.id().clone();
                self.port.show_info(&messages::account_created(&id))?;
                Ok(Attempt::Done(id))
            }
            Err(err) => {
                self.port.show_info(&messages::ledger_error(&err))?;
                Ok(Attempt::Retry)
            }
        }
    }

    fn handle_commands(&mut self, id: &AccountId) -> Result<CommandsEnd, SessionError> {
        loop {
            let Some(command) = self.prompt(messages::COMMAND_MENU)? else {
                return Ok(CommandsEnd::InputClosed);
            };
            let step = match command.trim() {
                "1" => self.deposit(id)?,
                "2" => self.withdraw(id)?,
                "3" => self.transfer(id)?,
                "4" => {
                    self.port.show_info(messages::SIGNED_OUT)?;
                    return Ok(CommandsEnd::SignedOut);
                }
                "5" => {
                    self.ledger.close_account(id);
                    self.port.show_info(&messages::account_deleted(id))?;
                    return Ok(CommandsEnd::SignedOut);
                }
                "6" => self.show_account(id)?,
                _ => {
                    self.port.show_info(messages::INVALID_COMMAND)?;
                    Step::Continue
                }
            };
            match step {
                Step::Continue => {}
                Step::Gone => return Ok(CommandsEnd::SignedOut),
                Step::InputClosed => return Ok(CommandsEnd::InputClosed),
            }
        }
    }

    fn deposit(&mut self, id: &AccountId) -> Result<Step, SessionError> {
        let Some(amount) = self.read_amount(messages::ASK_DEPOSIT)? else {
            return Ok(Step::InputClosed);
        };
        let result = amount.and_then(|a| self.ledger.deposit(id, a.value()));
        self.report_balance(result, messages::new_balance)
    }

    fn withdraw(&mut self, id: &AccountId) -> Result<Step, SessionError> {
        let Some(amount) = self.read_amount(messages::ASK_WITHDRAW)? else {
            return Ok(Step::InputClosed);
        };
        let result = amount.and_then(|a| self.ledger.withdraw(id, a.value()));
        self.report_balance(result, messages::new_balance)
    }

    fn transfer(&mut self, id: &AccountId) -> Result<Step, SessionError> {
        let Some(raw_recipient) = self.prompt(messages::ASK_RECIPIENT)? else {
            return Ok(Step::InputClosed);
        };
        let recipient = AccountId::from(raw_recipient.trim());
        if self.ledger.account(&recipient).is_none() {
            self.port.show_info(messages::RECIPIENT_NOT_FOUND)?;
            return Ok(Step::Continue);
        }

        let Some(amount) = self.read_amount(messages::ASK_TRANSFER)? else {
            return Ok(Step::InputClosed);
        };
        let result = amount.and_then(|a| self.ledger.transfer(id, &recipient, a.value()));
        self.report_balance(result, messages::transfer_succeeded)
    }

    fn show_account(&mut self, id: &AccountId) -> Result<Step, SessionError> {
        let info = self
            .ledger
            .account(id)
            .map(|a| messages::account_info(a.id(), a.display_name(), a.balance()));
        match info {
            Some(info) => {
                self.port.show_info(&info)?;
                Ok(Step::Continue)
            }
            None => {
                self.port.show_info(messages::ACCOUNT_NOT_FOUND)?;
                Ok(Step::Gone)
            }
        }
    }

    fn report_balance(
        &mut self,
        result: Result<Decimal, LedgerError>,
        render: fn(Decimal) -> String,
    ) -> Result<Step, SessionError> {
        match result {
            Ok(balance) => {
                self.port.show_info(&render(balance))?;
                Ok(Step::Continue)
            }
            Err(err @ LedgerError::NotFound(_)) => {
                self.port.show_info(&messages::ledger_error(&err))?;
                Ok(Step::Gone)
            }
            Err(err) => {
                self.port.show_info(&messages::ledger_error(&err))?;
                Ok(Step::Continue)
            }
        }
    }

    /// `Some(true)` to exit, `Some(false)` to continue, `None` if input closed.
    fn wants_to_exit(&mut self) -> Result<Option<bool>, SessionError> {
        loop {
            let Some(choice) = self.prompt(messages::EXIT_MENU)? else {
                return Ok(None);
            };
            match choice.trim() {
                "1" => return Ok(Some(true)),
                "2" => return Ok(Some(false)),
                _ => self.port.show_info(messages::INVALID_COMMAND)?,
            }
        }
    }

    /// Prompt for an amount; the inner `Result` carries a parse failure.
    fn read_amount(
        &mut self,
        prompt: &str,
    ) -> Result<Option<Result<Amount, LedgerError>>, SessionError> {
        Ok(self.prompt(prompt)?.map(|raw| raw.parse::<Amount>()))
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>, SessionError> {
        self.port.show_info(text)?;
        self.port.get_input()
    }
}

enum Attempt {
    Done(AccountId),
    Retry,
    InputClosed,
}

enum Step {
    Continue,
    /// The signed-in account no longer exists.
    Gone,
    InputClosed,
}
