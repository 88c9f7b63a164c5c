//! `ledger-cli` — interactive text driver for the account ledger.
//!
//! The driver owns no account state. It turns lines read from an
//! [`InteractionPort`] into [`ledger_infra::Ledger`] calls and reports the
//! results back through the same port.

pub mod config;
pub mod error;
pub mod messages;
pub mod port;
pub mod session;

pub use config::CliConfig;
pub use error::SessionError;
pub use port::{ConsoleInteraction, InteractionPort};
pub use session::{Session, SessionConfig, SessionEnd};
