//! crates/level-logger/src/null.rs
//! A logger that discards every message.

use std::fmt;

use crate::exit::{Exit, FATAL_EXIT_CODE, ProcessExit};
use crate::logger::Logger;

/// Logger that ignores all messages.
///
/// Nothing is ever written, whatever the level. [`fatal`](Logger::fatal)
/// still terminates the process with [`FATAL_EXIT_CODE`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NullLogger<X = ProcessExit> {
    exit: X,
}

impl NullLogger {
    /// Creates a logger that exits through [`ProcessExit`].
    #[must_use]
    pub const fn new() -> Self {
        Self { exit: ProcessExit }
    }
}

impl<X> NullLogger<X> {
    /// Replaces the capability used to terminate the process on `fatal`.
    #[must_use]
    pub fn with_exit<Y>(self, exit: Y) -> NullLogger<Y>
    where
        Y: Exit,
    {
        NullLogger { exit }
    }
}

impl<X> Logger for NullLogger<X>
where
    X: Exit,
{
    fn debug(&mut self, _args: fmt::Arguments<'_>) {}

    fn info(&mut self, _args: fmt::Arguments<'_>) {}

    fn warn(&mut self, _args: fmt::Arguments<'_>) {}

    fn error(&mut self, _args: fmt::Arguments<'_>) {}

    fn fatal(&mut self, _args: fmt::Arguments<'_>) -> ! {
        self.exit.exit(FATAL_EXIT_CODE)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::panic;

    use super::*;

    struct Requested(i32);

    struct PanicExit;

    impl Exit for PanicExit {
        fn exit(&self, code: i32) -> ! {
            panic::panic_any(Requested(code))
        }
    }

    struct CountingArg<'a>(&'a Cell<usize>);

    impl fmt::Display for CountingArg<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.set(self.0.get() + 1);
            f.write_str("formatted")
        }
    }

    #[test]
    fn leveled_calls_never_format_their_arguments() {
        let formatted = Cell::new(0);
        let mut logger = NullLogger::new();
        logger.debug(format_args!("{}", CountingArg(&formatted)));
        logger.info(format_args!("{}", CountingArg(&formatted)));
        logger.warn(format_args!("{}", CountingArg(&formatted)));
        logger.error(format_args!("{}", CountingArg(&formatted)));
        assert_eq!(formatted.get(), 0);
    }

    #[test]
    fn fatal_requests_exit_code_one() {
        let mut logger = NullLogger::new().with_exit(PanicExit);
        let outcome = panic::catch_unwind(move || {
            logger.fatal(format_args!("ignored"));
        });
        let payload = outcome.expect_err("fatal must not return");
        let code = payload.downcast_ref::<Requested>().map(|request| request.0);
        assert_eq!(code, Some(FATAL_EXIT_CODE));
    }

    #[test]
    fn instances_are_interchangeable() {
        assert_eq!(NullLogger::new(), NullLogger::default());
    }
}
