//! ANSI escape sequence stripping
//!
//! A control sequence is `ESC [`, then any run of digits and semicolons, then
//! one terminator character (normally `m`). Stripping removes all of it and
//! keeps everything else in order.
//!
//! Removing a sequence can join an `ESC` on its left with a `[` on its right.
//! That pair starts a new sequence and is stripped too, so the output never
//! contains `ESC [` and stripping twice is the same as stripping once.
//!
//! A sequence cut off by the end of the input drops everything from its `ESC`
//! onward.

mod width;

pub use width::{pad_leading, pad_trailing, visible_width};

const ESC: char = '\x1b';
const ESC_BYTE: u8 = 0x1b;

fn is_parameter(c: char) -> bool {
    c.is_ascii_digit() || c == ';'
}

/// Returns `text` with every ANSI control sequence removed.
///
/// The terminator is a whole character, so a sequence ending in a non-ASCII
/// character never leaves half of it behind.
///
/// # Examples
///
/// ```
/// use ansicodes::strip;
///
/// assert_eq!(strip("\u{1b}[31mHello\u{1b}[39m"), "Hello");
/// assert_eq!(strip("\u{1b}[1m\u{1b}[31mBold Red\u{1b}[0m"), "Bold Red");
/// assert_eq!(strip("plain"), "plain");
/// assert_eq!(strip("cut \u{1b}[38;2;25"), "cut ");
/// ```
pub fn strip(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c == '[' && out.ends_with(ESC) {
            out.pop();
            // Parameters, then the terminator.
            for c in chars.by_ref() {
                if !is_parameter(c) {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }

    out
}

/// Byte-level form of [`strip`] for output that may not be valid UTF-8.
///
/// The terminator is always a single byte here. For sequences ending in an
/// ASCII terminator, which covers everything this crate emits, the result is
/// the same as [`strip`].
pub fn strip_bytes(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    let mut bytes = data.iter().copied();

    while let Some(b) = bytes.next() {
        if b == b'[' && out.last() == Some(&ESC_BYTE) {
            out.pop();
            for b in bytes.by_ref() {
                if !(b.is_ascii_digit() || b == b';') {
                    break;
                }
            }
        } else {
            out.push(b);
        }
    }

    out
}

/// Strip raw captured output, keeping UTF-8 intact whenever possible.
///
/// Valid UTF-8 goes through [`strip`], so a multi-byte terminator is removed
/// whole. Anything else falls back to [`strip_bytes`].
///
/// ```
/// use ansicodes::strip_output;
///
/// assert_eq!(strip_output("a\u{1b}[1éb".as_bytes().to_vec()), b"ab");
/// ```
pub fn strip_output(data: Vec<u8>) -> Vec<u8> {
    match String::from_utf8(data) {
        Ok(text) => strip(&text).into_bytes(),
        Err(e) => strip_bytes(e.as_bytes()),
    }
}
