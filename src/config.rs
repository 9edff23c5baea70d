//! Configuration for respwire
//!
//! Writer settings with sensible defaults.

use crate::error::{Result, WireError};

/// Default buffer capacity in bytes
pub const DEFAULT_CAPACITY: usize = 8192;

/// Configuration for a [`LineWriter`](crate::writer::LineWriter)
#[derive(Debug, Clone)]
pub struct WriterConfig {
    // -------------------------------------------------------------------------
    // Buffer Configuration
    // -------------------------------------------------------------------------
    /// Size of the fixed write buffer (in bytes). Payloads of this size or
    /// larger bypass the buffer and go straight to the sink.
    pub capacity: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl WriterConfig {
    /// Create a new config builder
    pub fn builder() -> WriterConfigBuilder {
        WriterConfigBuilder::default()
    }

    /// Check that the settings can back a writer
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(WireError::InvalidConfiguration(
                "buffer capacity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for WriterConfig
#[derive(Default)]
pub struct WriterConfigBuilder {
    config: WriterConfig,
}

impl WriterConfigBuilder {
    /// Set the buffer capacity (in bytes)
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    pub fn build(self) -> WriterConfig {
        self.config
    }
}
