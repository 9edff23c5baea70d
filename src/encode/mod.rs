//! Encode Module
//!
//! Integer-to-decimal encoding for CRLF-terminated lines.
//!
//! ## Line Format
//! ```text
//! ┌──────────┬──────────────────────┬──────┬──────┐
//! │ '-' (0/1)│  ASCII digits (1-10) │ 0x0D │ 0x0A │
//! └──────────┴──────────────────────┴──────┴──────┘
//! ```
//!
//! ## Fast Paths
//! - 0..=100: pre-rendered lines from a compile-time table
//! - i32::MIN: a fixed constant, since its magnitude does not fit in an i32
//!
//! Everything else is rendered right-to-left straight into the writer's buffer.

mod cache;
mod digits;

pub use cache::{cached_line, CACHE_MAX, CRLF, MIN_INT_LINE};
pub use digits::digit_count;

pub(crate) use digits::render_digits;
