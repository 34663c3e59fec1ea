//! Shared helpers for the level-logger integration tests.

#![allow(dead_code)]

use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, PoisonError};

use level_logger::{Exit, Logger};

/// Writer that records the bytes of every `write` call separately.
#[derive(Debug, Default)]
pub struct CapturingWriter {
    pub calls: Vec<Vec<u8>>,
}

impl CapturingWriter {
    pub fn text(&self) -> String {
        String::from_utf8(self.calls.concat()).expect("utf-8 output")
    }
}

impl Write for CapturingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.calls.push(buf.to_vec());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Cloneable writer backed by a shared buffer.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8(bytes.clone()).expect("utf-8 output")
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Payload carried by the panic that [`PanicExit`] raises.
#[derive(Debug, PartialEq, Eq)]
pub struct ExitRequested(pub i32);

/// Exit capability that panics instead of terminating the test process.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanicExit;

impl Exit for PanicExit {
    fn exit(&self, code: i32) -> ! {
        panic::panic_any(ExitRequested(code))
    }
}

/// Calls `fatal` and returns the exit code it requested.
pub fn requested_exit_code<L: Logger>(logger: &mut L, message: &str) -> Option<i32> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        logger.fatal(format_args!("{message}"));
    }));
    outcome
        .err()
        .and_then(|payload| payload.downcast_ref::<ExitRequested>().map(|request| request.0))
}
