//! crates/level-logger/src/exit.rs
//! Process termination capability used by `fatal`.

/// Exit status used whenever a logger handles a fatal message.
pub const FATAL_EXIT_CODE: i32 = 1;

/// Terminates the running process.
///
/// Every [`Logger::fatal`](crate::Logger::fatal) implementation ends by
/// calling [`exit`](Self::exit) with [`FATAL_EXIT_CODE`]. The method never
/// returns; implementations other than [`ProcessExit`] must diverge some
/// other way, typically by panicking so a test can catch the request.
///
/// # Examples
///
/// ```
/// use std::panic;
/// use level_logger::{Exit, Logger, NullLogger};
///
/// struct Requested(i32);
/// struct PanicExit;
///
/// impl Exit for PanicExit {
///     fn exit(&self, code: i32) -> ! {
///         panic::panic_any(Requested(code))
///     }
/// }
///
/// let mut logger = NullLogger::new().with_exit(PanicExit);
/// let outcome = panic::catch_unwind(move || {
///     logger.fatal(format_args!("bye"));
/// });
/// let payload = outcome.unwrap_err();
/// assert_eq!(payload.downcast_ref::<Requested>().map(|r| r.0), Some(1));
/// ```
pub trait Exit {
    /// Ends the process with `code`.
    fn exit(&self, code: i32) -> !;
}

/// Exits through [`std::process::exit`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ProcessExit;

impl Exit for ProcessExit {
    fn exit(&self, code: i32) -> ! {
        std::process::exit(code)
    }
}
