//! Shared test sinks
//!
//! In-memory `Write` implementations that record how the writer talks to them.

#![allow(dead_code)]

use std::io::{self, Write};

use tracing_subscriber::EnvFilter;

/// Install a test-friendly tracing subscriber (honours RUST_LOG)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Records every write call and flush signal
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// One entry per `write` call, in order
    pub writes: Vec<Vec<u8>>,

    /// Number of `flush` calls
    pub flushes: usize,
}

impl RecordingSink {
    /// Everything written so far, concatenated
    pub fn bytes(&self) -> Vec<u8> {
        self.writes.concat()
    }
}

impl Write for RecordingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes.push(buf.to_vec());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

/// Which operation a FailingSink rejects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Write,
    Flush,
}

/// Rejects writes or flushes with `BrokenPipe`
#[derive(Debug)]
pub struct FailingSink {
    pub fail_on: FailOn,
    pub write_attempts: usize,
}

impl FailingSink {
    pub fn new(fail_on: FailOn) -> Self {
        Self {
            fail_on,
            write_attempts: 0,
        }
    }
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_attempts += 1;
        if self.fail_on == FailOn::Write {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "peer went away"));
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.fail_on == FailOn::Flush {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "peer went away"));
        }
        Ok(())
    }
}
