use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};

use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, UtcOffset};

use super::BasicLogger;
use crate::exit::{Exit, FATAL_EXIT_CODE};
use crate::level::Level;
use crate::logger::Logger;

const EPOCH_TIMESTAMP: &str = "1970-01-01T00:00:00Z";

impl<W, X> BasicLogger<W, X>
where
    W: Write,
{
    fn log(&mut self, level: Level, args: fmt::Arguments<'_>) {
        if self.level > level {
            return;
        }
        self.write_prefix(level);
        self.write_message(args);
    }

    fn write_prefix(&mut self, level: Level) {
        let prefix = format!("{} [{level}]: ", current_timestamp());
        self.write_part(prefix.as_bytes());
    }

    fn write_message(&mut self, args: fmt::Arguments<'_>) {
        let message = args
            .as_str()
            .map_or_else(|| Cow::Owned(fmt::format(args)), Cow::Borrowed);
        let bytes = message.as_bytes();
        self.write_part(bytes);
        if bytes.last() != Some(&b'\n') {
            self.write_part(b"\n");
        }
    }

    // One `write` per part; only a short or interrupted write is retried.
    fn write_part(&mut self, bytes: &[u8]) {
        match self.output.write(bytes) {
            Ok(written) if 0 < written && written < bytes.len() => {
                let _ = self.output.write_all(&bytes[written..]);
            }
            Err(error) if error.kind() == io::ErrorKind::Interrupted => {
                let _ = self.output.write_all(bytes);
            }
            _ => {}
        }
    }
}

impl<W, X> Logger for BasicLogger<W, X>
where
    W: Write,
    X: Exit,
{
    fn debug(&mut self, args: fmt::Arguments<'_>) {
        self.log(Level::DEBUG, args);
    }

    fn info(&mut self, args: fmt::Arguments<'_>) {
        self.log(Level::INFO, args);
    }

    fn warn(&mut self, args: fmt::Arguments<'_>) {
        self.log(Level::WARN, args);
    }

    fn error(&mut self, args: fmt::Arguments<'_>) {
        self.log(Level::ERROR, args);
    }

    fn fatal(&mut self, args: fmt::Arguments<'_>) -> ! {
        self.log(Level::FATAL, args);
        // Exiting skips destructors, so buffered writers must drain here.
        let _ = self.output.flush();
        self.exit.exit(FATAL_EXIT_CODE)
    }
}

fn current_timestamp() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    format_timestamp(now)
}

/// Formats `moment` as RFC 3339 with whole seconds.
///
/// Offsets that RFC 3339 cannot express fall back to UTC.
pub(crate) fn format_timestamp(moment: OffsetDateTime) -> String {
    let moment = moment.replace_nanosecond(0).unwrap_or(moment);
    moment
        .format(&Rfc3339)
        .or_else(|_| moment.to_offset(UtcOffset::UTC).format(&Rfc3339))
        .unwrap_or_else(|_| EPOCH_TIMESTAMP.to_owned())
}
