#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/level-logger/src/lib.rs
//!
//! # Overview
//!
//! `level_logger` provides a small leveled logging facility. Callers pick a
//! minimum [`Level`], hand a writer to a [`BasicLogger`], and emit lines
//! through the [`Logger`] trait or the [`debug!`], [`info!`], [`warn!`],
//! [`error!`] and [`fatal!`] macros. [`NullLogger`] satisfies the same trait
//! while discarding everything.
//!
//! # Design
//!
//! Each emitted line has the shape
//! `<RFC 3339 timestamp> [<LEVEL>]: <message>\n` and reaches the writer in at
//! most three writes: the prefix, the formatted message, and a trailing
//! newline when the message does not already end with one. Calls below the
//! configured threshold never touch the writer.
//!
//! Process termination on `fatal` is routed through the [`Exit`] capability.
//! [`ProcessExit`] is the default; tests substitute their own implementation
//! with `with_exit`.
//!
//! # Invariants
//!
//! - Only [`Level::DEBUG`] through [`Level::FATAL`] are valid. Every other raw
//!   value renders with the [`Level::SENTINEL_PREFIX`] and fails
//!   [`Level::validate`].
//! - A logger is never constructed with an invalid threshold.
//! - `fatal` always terminates with [`FATAL_EXIT_CODE`], whatever the
//!   threshold and whichever logger receives the call.
//!
//! # Errors
//!
//! Parsing and validation report [`InvalidLevel`]. Writer failures are
//! ignored: logging is best-effort and never surfaces I/O errors.
//!
//! # Examples
//!
//! ```
//! use level_logger::{BasicLogger, info};
//!
//! let mut buffer = Vec::new();
//! let mut logger = BasicLogger::new("info".parse()?, Some(&mut buffer))?;
//! info!(logger, "copied {} files", 3);
//! level_logger::debug!(logger, "filtered out");
//! drop(logger);
//!
//! let output = String::from_utf8(buffer).unwrap();
//! assert!(output.ends_with(" [INFO]: copied 3 files\n"));
//! assert_eq!(output.lines().count(), 1);
//! # Ok::<(), level_logger::InvalidLevel>(())
//! ```

mod basic;
mod error;
mod exit;
mod level;
mod logger;
mod macros;
mod null;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use basic::{BasicLogger, Output};
pub use error::InvalidLevel;
pub use exit::{Exit, FATAL_EXIT_CODE, ProcessExit};
pub use level::Level;
pub use logger::Logger;
pub use null::NullLogger;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LoggerLayer, init_tracing};
