//! crates/level-logger/src/macros.rs
//! Formatting macros that forward to a [`Logger`](crate::Logger).
//!
//! The first argument is the logger place expression; it is borrowed
//! mutably, so owned loggers must be declared `mut`.

/// Log at the debug level.
///
/// # Example
/// ```ignore
/// debug!(logger, "loaded {} entries", count);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::Logger::debug(&mut $logger, ::core::format_args!($($arg)+))
    };
}

/// Log at the info level.
///
/// # Example
/// ```ignore
/// info!(logger, "listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::Logger::info(&mut $logger, ::core::format_args!($($arg)+))
    };
}

/// Log at the warn level.
///
/// # Example
/// ```ignore
/// warn!(logger, "retrying in {}s", delay);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::Logger::warn(&mut $logger, ::core::format_args!($($arg)+))
    };
}

/// Log at the error level.
///
/// # Example
/// ```ignore
/// error!(logger, "request failed: {}", err);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::Logger::error(&mut $logger, ::core::format_args!($($arg)+))
    };
}

/// Log at the fatal level and terminate the process.
///
/// # Example
/// ```ignore
/// fatal!(logger, "cannot open {}", path.display());
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::Logger::fatal(&mut $logger, ::core::format_args!($($arg)+))
    };
}
