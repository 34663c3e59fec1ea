use std::fmt;

use crate::exit::ProcessExit;
use crate::level::Level;

mod constructors;
mod output;
mod writing;

pub use output::Output;

/// Logger that writes timestamped, level-tagged lines to a writer.
///
/// The configured [`Level`] is the threshold: messages at that level or
/// above are written, everything below is dropped without touching the
/// writer. Each emitted message becomes exactly one line of the form
/// `<RFC 3339 timestamp> [<LEVEL>]: <message>\n`, appending the newline only
/// when the message lacks one.
///
/// The logger never closes its writer. Write errors are ignored.
///
/// # Examples
///
/// Collect lines into a [`Vec<u8>`]:
///
/// ```
/// use level_logger::{BasicLogger, Level, Logger};
///
/// let mut logger = BasicLogger::new(Level::WARN, Some(Vec::<u8>::new()))?;
/// logger.warn(format_args!("disk {}% full", 91));
/// logger.info(format_args!("dropped"));
///
/// let output = String::from_utf8(logger.into_inner().unwrap()).unwrap();
/// assert!(output.ends_with(" [WARN]: disk 91% full\n"));
/// # Ok::<(), level_logger::InvalidLevel>(())
/// ```
///
/// Omitting the writer selects standard output:
///
/// ```
/// use level_logger::{BasicLogger, Level};
///
/// let logger = BasicLogger::stdout(Level::DEBUG)?;
/// assert!(logger.output().is_stdout());
/// # Ok::<(), level_logger::InvalidLevel>(())
/// ```
pub struct BasicLogger<W, X = ProcessExit> {
    output: Output<W>,
    level: Level,
    exit: X,
}

impl<W, X> fmt::Debug for BasicLogger<W, X>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicLogger")
            .field("output", &self.output)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}
