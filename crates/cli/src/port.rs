//! User-interaction capability.

use std::io::{BufRead, Write};

use crate::error::SessionError;

/// Line-based interaction with a user.
///
/// The session is handed an implementation rather than doing IO itself, so it
/// can be driven by a terminal, a script, or a test buffer.
pub trait InteractionPort {
    /// Read the next line without its line ending. `Ok(None)` means the input
    /// is closed.
    fn get_input(&mut self) -> Result<Option<String>, SessionError>;

    fn show_info(&mut self, info: &str) -> Result<(), SessionError>;
}

impl<P> InteractionPort for &mut P
where
    P: InteractionPort + ?Sized,
{
    fn get_input(&mut self) -> Result<Option<String>, SessionError> {
        (**self).get_input()
    }

    fn show_info(&mut self, info: &str) -> Result<(), SessionError> {
        (**self).show_info(info)
    }
}

/// [`InteractionPort`] over any buffered reader and writer.
#[derive(Debug)]
pub struct ConsoleInteraction<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleInteraction<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R, W> ConsoleInteraction<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R, W> InteractionPort for ConsoleInteraction<R, W>
where
    R: BufRead,
    W: Write,
{
    fn get_input(&mut self) -> Result<Option<String>, SessionError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        // Strip the line ending only: credentials are compared verbatim.
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn show_info(&mut self, info: &str) -> Result<(), SessionError> {
        writeln!(self.writer, "{info}")?;
        self.writer.flush()?;
        Ok(())
    }
}
