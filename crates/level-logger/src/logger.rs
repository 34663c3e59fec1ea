//! crates/level-logger/src/logger.rs
//! The capability shared by every logger.

use std::fmt;

/// A leveled logger.
///
/// Each method formats `args` and emits the message when the logger's
/// threshold permits it. [`fatal`](Self::fatal) additionally terminates the
/// process with [`FATAL_EXIT_CODE`](crate::FATAL_EXIT_CODE) once the message
/// has been handled, regardless of the threshold.
///
/// The [`debug!`](crate::debug!), [`info!`](crate::info!),
/// [`warn!`](crate::warn!), [`error!`](crate::error!) and
/// [`fatal!`](crate::fatal!) macros build the [`fmt::Arguments`] for you.
pub trait Logger {
    /// Logs at [`Level::DEBUG`](crate::Level::DEBUG).
    fn debug(&mut self, args: fmt::Arguments<'_>);

    /// Logs at [`Level::INFO`](crate::Level::INFO).
    fn info(&mut self, args: fmt::Arguments<'_>);

    /// Logs at [`Level::WARN`](crate::Level::WARN).
    fn warn(&mut self, args: fmt::Arguments<'_>);

    /// Logs at [`Level::ERROR`](crate::Level::ERROR).
    fn error(&mut self, args: fmt::Arguments<'_>);

    /// Logs at [`Level::FATAL`](crate::Level::FATAL), then terminates the process.
    fn fatal(&mut self, args: fmt::Arguments<'_>) -> !;
}

impl<L> Logger for &mut L
where
    L: Logger + ?Sized,
{
    fn debug(&mut self, args: fmt::Arguments<'_>) {
        (**self).debug(args);
    }

    fn info(&mut self, args: fmt::Arguments<'_>) {
        (**self).info(args);
    }

    fn warn(&mut self, args: fmt::Arguments<'_>) {
        (**self).warn(args);
    }

    fn error(&mut self, args: fmt::Arguments<'_>) {
        (**self).error(args);
    }

    fn fatal(&mut self, args: fmt::Arguments<'_>) -> ! {
        (**self).fatal(args)
    }
}

impl<L> Logger for Box<L>
where
    L: Logger + ?Sized,
{
    fn debug(&mut self, args: fmt::Arguments<'_>) {
        (**self).debug(args);
    }

    fn info(&mut self, args: fmt::Arguments<'_>) {
        (**self).info(args);
    }

    fn warn(&mut self, args: fmt::Arguments<'_>) {
        (**self).warn(args);
    }

    fn error(&mut self, args: fmt::Arguments<'_>) {
        (**self).error(args);
    }

    fn fatal(&mut self, args: fmt::Arguments<'_>) -> ! {
        (**self).fatal(args)
    }
}
