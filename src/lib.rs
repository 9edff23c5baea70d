//! # respwire
//!
//! A buffered byte sink for CRLF-terminated wire frames:
//! - Fixed-size write buffer that batches small writes into few sink calls
//! - Pass-through for payloads larger than the buffer
//! - Integer-to-decimal encoding with a pre-rendered cache for 0..=100
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Protocol Formatting Layer                    │
//! │          (decides which bytes / integers to send)            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      LineWriter                              │
//! │      write_byte / write_bytes / write_crlf / write_int_crlf  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Encode    │          │   Buffer    │
//!   │  (digits)   │          │ (fixed size)│
//!   └─────────────┘          └──────┬──────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │    Sink     │
//!                           │ (io::Write) │
//!                           └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use respwire::LineWriter;
//!
//! let mut out = LineWriter::new(Vec::new());
//! out.write_byte(b'*').unwrap();
//! out.write_int_crlf(2).unwrap();
//! out.write_byte(b':').unwrap();
//! out.write_int_crlf(-321).unwrap();
//! out.flush().unwrap();
//!
//! assert_eq!(out.get_ref().as_slice(), b"*2\r\n:-321\r\n");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod encode;
pub mod writer;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{WireError, Result};
pub use config::{WriterConfig, DEFAULT_CAPACITY};
pub use writer::LineWriter;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of respwire
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
