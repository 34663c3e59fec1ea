//! crates/level-logger/src/tracing_bridge.rs
//! Bridge from the tracing crate to a [`Logger`].
//!
//! [`LoggerLayer`] is a tracing-subscriber layer that forwards each event's
//! `message` field to the wrapped logger at the matching level. Other fields
//! are ignored. Events never reach [`Logger::fatal`]; tracing has no level
//! that terminates the process.
//!
//! # Usage
//!
//! ```rust,ignore
//! use level_logger::{BasicLogger, Level, init_tracing};
//!
//! init_tracing(BasicLogger::stdout(Level::INFO)?)?;
//! tracing::info!("listening on {}", addr);
//! ```

use std::fmt;
use std::sync::{Mutex, PoisonError};

use tracing::Subscriber;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::level::Level;
use crate::logger::Logger;

/// A tracing layer that writes events through a [`Logger`].
pub struct LoggerLayer<L> {
    logger: Mutex<L>,
}

impl<L> LoggerLayer<L> {
    /// Wraps `logger`.
    #[must_use]
    pub const fn new(logger: L) -> Self {
        Self {
            logger: Mutex::new(logger),
        }
    }

    /// Returns the wrapped logger.
    pub fn into_inner(self) -> L {
        self.logger
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Map a tracing level onto a logger level.
    const fn level_for(level: &tracing::Level) -> Level {
        match *level {
            tracing::Level::ERROR => Level::ERROR,
            tracing::Level::WARN => Level::WARN,
            tracing::Level::INFO => Level::INFO,
            tracing::Level::DEBUG | tracing::Level::TRACE => Level::DEBUG,
        }
    }
}

impl<L> LoggerLayer<L>
where
    L: Logger,
{
    fn forward(&self, level: Level, message: &str) {
        let mut logger = self.logger.lock().unwrap_or_else(PoisonError::into_inner);
        match level {
            Level::ERROR => logger.error(format_args!("{message}")),
            Level::WARN => logger.warn(format_args!("{message}")),
            Level::INFO => logger.info(format_args!("{message}")),
            _ => logger.debug(format_args!("{message}")),
        }
    }
}

impl<L> fmt::Debug for LoggerLayer<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerLayer").finish_non_exhaustive()
    }
}

impl<S, L> Layer<S> for LoggerLayer<L>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    L: Logger + Send + 'static,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            self.forward(Self::level_for(event.metadata().level()), &message);
        }
    }
}

/// Visitor to extract message from tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Install `logger` as the global tracing subscriber.
///
/// Fails when a global subscriber is already set.
pub fn init_tracing<L>(logger: L) -> Result<(), TryInitError>
where
    L: Logger + Send + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LoggerLayer::new(logger))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NullLogger;

    #[test]
    fn test_level_for() {
        type Bridge = LoggerLayer<NullLogger>;
        assert_eq!(Bridge::level_for(&tracing::Level::ERROR), Level::ERROR);
        assert_eq!(Bridge::level_for(&tracing::Level::WARN), Level::WARN);
        assert_eq!(Bridge::level_for(&tracing::Level::INFO), Level::INFO);
        assert_eq!(Bridge::level_for(&tracing::Level::DEBUG), Level::DEBUG);
        assert_eq!(Bridge::level_for(&tracing::Level::TRACE), Level::DEBUG);
    }
}
