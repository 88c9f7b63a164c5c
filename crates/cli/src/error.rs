use thiserror::Error;

/// Failures that end an interactive session.
///
/// Ledger outcomes (insufficient balance, bad credential, ...) are not here:
/// the session reports those to the user and keeps going.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("interaction i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("gave up after {0} invalid menu options in a row")]
    TooManyInvalidOptions(u32),
}
