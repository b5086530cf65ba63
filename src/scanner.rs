//! Cursor-style scanning over raw input bytes.
//!
//! Every function takes the input, a position and an exclusive end, and
//! returns the position where scanning stopped. Nothing here holds state.

use crate::char_class::{CharClass, HEX};
use crate::constants::ESCAPE_INTRODUCER;

/// A `%` that is not followed by two hexadecimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EscapeError {
    /// Offset of the offending `%`.
    pub position: usize,
}

/// Consumes a `%HH` escape starting at `pos`.
///
/// Returns `pos + 3` for a well-formed escape and `pos` unchanged when the
/// byte at `pos` is not `%`.
pub(crate) fn scan_escape(input: &[u8], pos: usize, end: usize) -> Result<usize, EscapeError> {
    if input[pos] != ESCAPE_INTRODUCER {
        return Ok(pos);
    }
    if pos + 3 <= end && HEX.matches(input[pos + 1]) && HEX.matches(input[pos + 2]) {
        return Ok(pos + 3);
    }
    Err(EscapeError { position: pos })
}

/// Advances over bytes in `class`, and over `%HH` escapes when the class
/// allows them.
///
/// A malformed escape is an error, never a zero-length match.
pub(crate) fn scan_masked(
    input: &[u8],
    start: usize,
    end: usize,
    class: CharClass,
) -> Result<usize, EscapeError> {
    let mut p = start;
    while p < end {
        if class.matches(input[p]) {
            p += 1;
            continue;
        }
        if class.allows_escapes() {
            let q = scan_escape(input, p, end)?;
            if q > p {
                p = q;
                continue;
            }
        }
        break;
    }
    Ok(p)
}

/// Advances until a byte from `error_chars` or `stop_chars` is found.
pub(crate) fn scan_until_any(
    input: &[u8],
    start: usize,
    end: usize,
    error_chars: &[u8],
    stop_chars: &[u8],
) -> usize {
    let mut p = start;
    while p < end {
        let c = input[p];
        if error_chars.contains(&c) || stop_chars.contains(&c) {
            break;
        }
        p += 1;
    }
    p
}

/// Returns true if `pos` is in bounds and holds `ch`.
pub(crate) fn peek_is(input: &[u8], pos: usize, end: usize, ch: u8) -> bool {
    pos < end && input[pos] == ch
}
