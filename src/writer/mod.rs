//! Writer Module
//!
//! Buffered output for CRLF-terminated wire frames.
//!
//! ## Buffering Rules
//! - Writes accumulate in a fixed buffer and reach the sink only when the
//!   buffer cannot take the next write, or on an explicit flush
//! - The capacity check flushes when the remaining space is *equal to* the
//!   requested size, not only when it is smaller
//! - Payloads at least as large as the buffer are forwarded without copying
//!
//! ## Ownership
//! One writer per connection. Nothing here locks; every write takes
//! `&mut self`.

mod line_writer;

pub use line_writer::LineWriter;
