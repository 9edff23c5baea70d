//! Line writer
//!
//! Fixed-buffer writer with an integer-plus-CRLF fast path.

use std::fmt;
use std::io::{self, Write};

use crate::config::WriterConfig;
use crate::encode::{cached_line, digit_count, render_digits, CRLF};
use crate::error::{Result, WireError};

/// Most digits an `i32` magnitude can have
const MAX_DIGITS: usize = 10;

/// Buffered writer for protocol frames
///
/// Wraps any [`Write`] sink. Bytes are held in a fixed-size buffer and
/// forwarded in batches; integers are encoded as decimal ASCII directly into
/// that buffer.
///
/// Dropping the writer does not flush. Call [`flush`](Self::flush) or
/// [`into_inner`](Self::into_inner) before letting it go.
pub struct LineWriter<W: Write> {
    /// Destination for flushed bytes
    sink: W,

    /// Fixed-size staging buffer; only `[0, count)` is meaningful
    buf: Box<[u8]>,

    /// Fill count
    count: usize,
}

impl<W: Write> LineWriter<W> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Create a writer with the default 8 KiB buffer
    pub fn new(sink: W) -> Self {
        let capacity = WriterConfig::default().capacity;
        Self::from_parts(sink, capacity)
    }

    /// Create a writer with a buffer of `capacity` bytes
    ///
    /// Fails with [`WireError::InvalidConfiguration`] if `capacity` is zero.
    pub fn with_capacity(sink: W, capacity: usize) -> Result<Self> {
        let config = WriterConfig::builder().capacity(capacity).build();
        Self::with_config(sink, &config)
    }

    /// Create a writer from a config
    pub fn with_config(sink: W, config: &WriterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(sink, config.capacity))
    }

    fn from_parts(sink: W, capacity: usize) -> Self {
        tracing::debug!(capacity, "line writer created");
        Self {
            sink,
            buf: vec![0u8; capacity].into_boxed_slice(),
            count: 0,
        }
    }

    // =========================================================================
    // Public Write API
    // =========================================================================

    /// Write a single byte
    pub fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.ensure_capacity(1)?;
        self.buf[self.count] = byte;
        self.count += 1;
        Ok(())
    }

    /// Write a byte slice
    ///
    /// Slices at least as long as the buffer skip it: pending bytes are
    /// flushed, then the slice goes to the sink as-is.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let len = bytes.len();

        if len >= self.buf.len() {
            self.flush_buffer()?;
            tracing::trace!(bytes = len, "passing oversized write through to sink");
            return self.forward(bytes);
        }

        self.ensure_capacity(len)?;
        self.buf[self.count..self.count + len].copy_from_slice(bytes);
        self.count += len;
        Ok(())
    }

    /// Write the line delimiter (`\r\n`)
    pub fn write_crlf(&mut self) -> Result<()> {
        if CRLF.len() > self.buf.len() {
            return self.write_bytes(&CRLF);
        }

        self.ensure_capacity(CRLF.len())?;
        self.buf[self.count] = CRLF[0];
        self.buf[self.count + 1] = CRLF[1];
        self.count += CRLF.len();
        Ok(())
    }

    /// Write `value` as decimal ASCII followed by `\r\n`
    pub fn write_int_crlf(&mut self, value: i32) -> Result<()> {
        // 0..=100 and i32::MIN are pre-encoded
        if let Some(line) = cached_line(value) {
            return self.write_bytes(line);
        }

        let magnitude = if value < 0 {
            self.write_byte(b'-')?;
            // i32::MIN was handled above, so this cannot overflow
            (-value) as u32
        } else {
            value as u32
        };

        let size = digit_count(magnitude);

        if size > self.buf.len() {
            let mut scratch = [0u8; MAX_DIGITS];
            render_digits(&mut scratch[..size], magnitude);
            self.write_bytes(&scratch[..size])?;
        } else {
            self.ensure_capacity(size)?;
            let end = self.count + size;
            render_digits(&mut self.buf[self.count..end], magnitude);
            self.count = end;
        }

        self.write_crlf()
    }

    /// Forward all pending bytes, then flush the sink
    pub fn flush(&mut self) -> Result<()> {
        self.flush_buffer()?;

        tracing::trace!("flushing sink");
        self.sink.flush().map_err(|e| {
            tracing::warn!("sink flush failed: {}", e);
            WireError::SinkWriteFailed(e)
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Size of the staging buffer
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Number of bytes waiting to be flushed
    pub fn buffered(&self) -> usize {
        self.count
    }

    /// Bytes waiting to be flushed
    pub fn buffer(&self) -> &[u8] {
        &self.buf[..self.count]
    }

    /// Shared reference to the sink
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Mutable reference to the sink
    ///
    /// Writing to the sink directly skips anything still buffered.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Forward pending bytes and hand back the sink
    ///
    /// The sink itself is not flushed.
    pub fn into_inner(mut self) -> Result<W> {
        self.flush_buffer()?;
        Ok(self.sink)
    }

    // =========================================================================
    // Buffer Management
    // =========================================================================

    /// Flush if `n` more bytes would not fit.
    ///
    /// Flushes when `n` equals the remaining space too.
    #[inline]
    fn ensure_capacity(&mut self, n: usize) -> Result<()> {
        if n >= self.buf.len() - self.count {
            self.flush_buffer()?;
        }
        Ok(())
    }

    /// Hand `[0, count)` to the sink and reset the fill count.
    ///
    /// The count is reset even when the sink fails.
    fn flush_buffer(&mut self) -> Result<()> {
        if self.count == 0 {
            return Ok(());
        }

        let count = std::mem::replace(&mut self.count, 0);
        tracing::trace!(bytes = count, "forwarding buffered bytes");

        let Self { sink, buf, .. } = self;
        Self::forward_to(sink, &buf[..count])
    }

    fn forward(&mut self, bytes: &[u8]) -> Result<()> {
        Self::forward_to(&mut self.sink, bytes)
    }

    fn forward_to(sink: &mut W, bytes: &[u8]) -> Result<()> {
        sink.write_all(bytes).map_err(|e| {
            tracing::warn!("sink write of {} bytes failed: {}", bytes.len(), e);
            WireError::SinkWriteFailed(e)
        })
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<W: Write> Write for LineWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        LineWriter::flush(self)?;
        Ok(())
    }
}

impl<W: Write + fmt::Debug> fmt::Debug for LineWriter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineWriter")
            .field("sink", &self.sink)
            .field("buffer", &format_args!("{}/{}", self.count, self.buf.len()))
            .finish()
    }
}
