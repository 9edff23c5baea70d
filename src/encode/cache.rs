//! Small-integer cache
//!
//! Pre-rendered `digits + CRLF` lines for the values protocol layers send
//! most: argument counts, small lengths and indices.

use super::digits::digit_count;

/// Line delimiter (carriage return, line feed)
pub const CRLF: [u8; 2] = *b"\r\n";

/// Largest value served from the cache
pub const CACHE_MAX: i32 = 100;

/// Encoded line for `i32::MIN`
pub const MIN_INT_LINE: &[u8] = b"-2147483648\r\n";

/// Longest cached line: "100\r\n"
const MAX_CACHED_LEN: usize = 5;

#[derive(Clone, Copy)]
struct CachedLine {
    bytes: [u8; MAX_CACHED_LEN],
    len: u8,
}

impl CachedLine {
    const EMPTY: Self = Self {
        bytes: [0; MAX_CACHED_LEN],
        len: 0,
    };

    fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }
}

static INT_CACHE: [CachedLine; CACHE_MAX as usize + 1] = build_cache();

const fn build_cache() -> [CachedLine; CACHE_MAX as usize + 1] {
    let mut table = [CachedLine::EMPTY; CACHE_MAX as usize + 1];

    let mut n = 0;
    while n <= CACHE_MAX as usize {
        let size = digit_count(n as u32);
        let mut bytes = [0u8; MAX_CACHED_LEN];

        let mut value = n as u32;
        let mut pos = size;
        while pos > 0 {
            pos -= 1;
            bytes[pos] = b'0' + (value % 10) as u8;
            value /= 10;
        }
        bytes[size] = CRLF[0];
        bytes[size + 1] = CRLF[1];

        table[n] = CachedLine {
            bytes,
            len: (size + 2) as u8,
        };
        n += 1;
    }

    table
}

/// Pre-encoded line for `value`, if it has one
///
/// Returns the cached entry for `0..=CACHE_MAX` and the fixed constant for
/// `i32::MIN`; `None` means the value has to be rendered.
#[inline]
pub fn cached_line(value: i32) -> Option<&'static [u8]> {
    if (0..=CACHE_MAX).contains(&value) {
        Some(INT_CACHE[value as usize].as_bytes())
    } else if value == i32::MIN {
        Some(MIN_INT_LINE)
    } else {
        None
    }
}
