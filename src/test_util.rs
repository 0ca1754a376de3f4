//! Sinks and clocks shared by the unit tests.

use crate::clock::Clock;
use core::{cell::Cell, cmp::min, convert::Infallible};
use embedded_io::{ErrorKind, ErrorType, Write};

/// Collects everything written to it.
#[derive(Debug, Default)]
pub(crate) struct VecSink {
    bytes: Vec<u8>,
}

impl VecSink {
    pub(crate) fn as_str(&self) -> &str {
        core::str::from_utf8(&self.bytes).expect("sink received invalid UTF-8")
    }
}

impl ErrorType for VecSink {
    type Error = Infallible;
}

impl Write for VecSink {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[derive(Debug, Eq, PartialEq)]
pub(crate) struct SinkError;

impl embedded_io::Error for SinkError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Accepts a fixed number of bytes, then fails every write.
#[derive(Debug)]
pub(crate) struct FailingSink {
    bytes: Vec<u8>,
    remaining: usize,
    fail_on_flush: bool,
}

impl FailingSink {
    pub(crate) fn new(accept: usize) -> Self {
        Self {
            bytes: Vec::new(),
            remaining: accept,
            fail_on_flush: false,
        }
    }

    pub(crate) fn fail_on_flush(mut self) -> Self {
        self.fail_on_flush = true;
        self
    }

    pub(crate) fn written(&self) -> &[u8] {
        &self.bytes
    }
}

impl ErrorType for FailingSink {
    type Error = SinkError;
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if self.remaining == 0 {
            return Err(SinkError);
        }
        let count = min(buf.len(), self.remaining);
        self.bytes.extend_from_slice(&buf[..count]);
        self.remaining -= count;
        Ok(count)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        if self.fail_on_flush {
            Err(SinkError)
        } else {
            Ok(())
        }
    }
}

/// Advances by `step` milliseconds every time it is read.
#[derive(Debug)]
pub(crate) struct StepClock {
    now: Cell<u32>,
    step: u32,
}

impl StepClock {
    pub(crate) fn new(start: u32, step: u32) -> Self {
        Self {
            now: Cell::new(start),
            step,
        }
    }
}

impl Clock for StepClock {
    fn ticks_ms(&self) -> u32 {
        let ticks = self.now.get();
        self.now.set(ticks.wrapping_add(self.step));
        ticks
    }
}
