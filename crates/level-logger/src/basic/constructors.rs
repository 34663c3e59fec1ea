use std::io;

use super::{BasicLogger, Output};
use crate::error::InvalidLevel;
use crate::exit::{Exit, ProcessExit};
use crate::level::Level;

impl<W> BasicLogger<W> {
    /// Creates a logger that emits messages at `level` or above.
    ///
    /// `writer` receives every line; `None` selects standard output. The
    /// level is validated before the writer is stored, so an invalid level
    /// returns an error without the writer ever being used.
    pub fn new(level: Level, writer: Option<W>) -> Result<Self, InvalidLevel> {
        level.validate()?;
        Ok(Self {
            output: Output::from_option(writer),
            level,
            exit: ProcessExit,
        })
    }
}

impl BasicLogger<io::Stdout> {
    /// Creates a logger that writes to standard output.
    pub fn stdout(level: Level) -> Result<Self, InvalidLevel> {
        Self::new(level, None)
    }
}

impl<W, X> BasicLogger<W, X> {
    /// Replaces the capability used to terminate the process on `fatal`.
    #[must_use]
    pub fn with_exit<Y>(self, exit: Y) -> BasicLogger<W, Y>
    where
        Y: Exit,
    {
        BasicLogger {
            output: self.output,
            level: self.level,
            exit,
        }
    }

    /// Returns the threshold.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Borrows the destination.
    #[must_use]
    pub const fn output(&self) -> &Output<W> {
        &self.output
    }

    /// Consumes the logger and returns the caller-supplied writer.
    ///
    /// Returns `None` for loggers writing to standard output.
    #[must_use]
    pub fn into_inner(self) -> Option<W> {
        self.output.into_inner()
    }
}
