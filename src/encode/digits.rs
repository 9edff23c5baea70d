//! Digit math
//!
//! Length lookup and right-to-left digit rendering.

/// Upper bound for each decimal length: index `i` holds the largest value
/// with `i + 1` digits.
const SIZE_TABLE: [u32; 10] = [
    9,
    99,
    999,
    9_999,
    99_999,
    999_999,
    9_999_999,
    99_999_999,
    999_999_999,
    u32::MAX,
];

/// Number of decimal digits in `value`
///
/// Walks the size table instead of dividing, so the common short values
/// resolve in one or two comparisons.
pub const fn digit_count(value: u32) -> usize {
    let mut size = 0;
    while value > SIZE_TABLE[size] {
        size += 1;
    }
    size + 1
}

/// Render `value` into `dst`, least-significant digit last.
///
/// `dst` must be exactly `digit_count(value)` bytes long.
#[inline]
pub(crate) fn render_digits(dst: &mut [u8], mut value: u32) {
    debug_assert_eq!(dst.len(), digit_count(value));

    for slot in dst.iter_mut().rev() {
        *slot = b'0' + (value % 10) as u8;
        value /= 10;
    }
}
