//! Visible width of styled text

use super::strip;
use unicode_width::UnicodeWidthStr;

/// Terminal columns `text` occupies once its control sequences are removed.
///
/// ```
/// use ansicodes::visible_width;
///
/// assert_eq!(visible_width("\u{1b}[32mDone\u{1b}[39m"), 4);
/// assert_eq!(visible_width("世界"), 4);
/// ```
pub fn visible_width(text: &str) -> usize {
    strip(text).width()
}

/// Right-align `text` in `width` columns by prepending spaces.
///
/// Control sequences do not count toward the width. Text already at least
/// `width` columns wide is returned unchanged.
///
/// ```
/// use ansicodes::pad_leading;
///
/// assert_eq!(pad_leading("\u{1b}[31mNo\u{1b}[39m", 4), "  \u{1b}[31mNo\u{1b}[39m");
/// ```
pub fn pad_leading(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(visible_width(text));
    let mut out = String::with_capacity(text.len() + padding);
    out.extend(std::iter::repeat(' ').take(padding));
    out.push_str(text);
    out
}

/// Left-align `text` in `width` columns by appending spaces.
pub fn pad_trailing(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(visible_width(text));
    let mut out = String::with_capacity(text.len() + padding);
    out.push_str(text);
    out.extend(std::iter::repeat(' ').take(padding));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_width_ignores_sequences() {
        assert_eq!(visible_width("\x1b[1m\x1b[31mBold Red\x1b[0m"), 8);
        assert_eq!(visible_width(""), 0);
    }

    #[test]
    fn test_pad_leading_plain() {
        assert_eq!(pad_leading("7", 3), "  7");
    }

    #[test]
    fn test_pad_leading_no_truncation() {
        assert_eq!(pad_leading("abcdef", 3), "abcdef");
        assert_eq!(pad_leading("abc", 3), "abc");
    }

    #[test]
    fn test_pad_trailing_styled() {
        let styled = "\x1b[33m In \x1b[39m";
        let padded = pad_trailing(styled, 6);
        assert_eq!(padded, "\x1b[33m In \x1b[39m  ");
        assert_eq!(visible_width(&padded), 6);
    }

    #[test]
    fn test_pad_wide_characters() {
        assert_eq!(pad_leading("世", 3), " 世");
    }
}
