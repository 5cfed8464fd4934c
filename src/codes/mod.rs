//! Named SGR color and style codes
//!
//! Every constant is a complete escape sequence that can be concatenated
//! directly into output:
//!
//! ```
//! use ansicodes::codes::{RESET, TXT_CYAN, TXT_MAGENTA};
//!
//! let line = format!("{TXT_CYAN}cyan text{TXT_MAGENTA} and magenta{RESET}");
//! assert_eq!(ansicodes::strip(&line), "cyan text and magenta");
//! ```
//!
//! The bright (`*_L`) variants use SGR 90-97 and 100-107. Some terminals
//! render them the same as the base colors.

mod table;

pub use table::{lookup, NAMED};

// -- Default colors --

/// Default text color.
pub const TXT_DEFAULT: &str = "\x1b[39m";
/// Default background color.
pub const BKG_DEFAULT: &str = "\x1b[49m";

// -- Base and bright colors --

/// Black text.
pub const TXT_BLACK: &str = "\x1b[30m";
/// Black background.
pub const BKG_BLACK: &str = "\x1b[40m";
/// Bright black text.
pub const TXT_BLACK_L: &str = "\x1b[90m";
/// Bright black background.
pub const BKG_BLACK_L: &str = "\x1b[100m";

/// Dark gray text, the same code as bright black.
pub const TXT_DK_GRAY: &str = TXT_BLACK_L;
/// Dark gray background, the same code as bright black.
pub const BKG_DK_GRAY: &str = BKG_BLACK_L;
/// Dark grey text.
pub const TXT_DK_GREY: &str = TXT_BLACK_L;
/// Dark grey background.
pub const BKG_DK_GREY: &str = BKG_BLACK_L;

/// Red text.
pub const TXT_RED: &str = "\x1b[31m";
/// Red background.
pub const BKG_RED: &str = "\x1b[41m";
/// Bright red text.
pub const TXT_RED_L: &str = "\x1b[91m";
/// Bright red background.
pub const BKG_RED_L: &str = "\x1b[101m";

/// "Websafe" orange text, RGB(255, 102, 0).
pub const TXT_ORANGE: &str = "\x1b[38;2;255;102;0m";
/// "Websafe" orange background, RGB(255, 102, 0).
pub const BKG_ORANGE: &str = "\x1b[48;2;255;102;0m";

/// Yellow text.
pub const TXT_YELLOW: &str = "\x1b[33m";
/// Yellow background.
pub const BKG_YELLOW: &str = "\x1b[43m";
/// Bright yellow text.
pub const TXT_YELLOW_L: &str = "\x1b[93m";
/// Bright yellow background.
pub const BKG_YELLOW_L: &str = "\x1b[103m";

/// Green text.
pub const TXT_GREEN: &str = "\x1b[32m";
/// Green background.
pub const BKG_GREEN: &str = "\x1b[42m";
/// Bright green text.
pub const TXT_GREEN_L: &str = "\x1b[92m";
/// Bright green background.
pub const BKG_GREEN_L: &str = "\x1b[102m";

/// Blue text.
pub const TXT_BLUE: &str = "\x1b[34m";
/// Blue background.
pub const BKG_BLUE: &str = "\x1b[44m";
/// Bright blue text.
pub const TXT_BLUE_L: &str = "\x1b[94m";
/// Bright blue background.
pub const BKG_BLUE_L: &str = "\x1b[104m";

/// "Websafe" purple text, RGB(102, 0, 153).
pub const TXT_PURPLE: &str = "\x1b[38;2;102;0;153m";
/// "Websafe" purple background, RGB(102, 0, 153).
pub const BKG_PURPLE: &str = "\x1b[48;2;102;0;153m";

/// Magenta text.
pub const TXT_MAGENTA: &str = "\x1b[35m";
/// Magenta background.
pub const BKG_MAGENTA: &str = "\x1b[45m";
/// Bright magenta text.
pub const TXT_MAGENTA_L: &str = "\x1b[95m";
/// Bright magenta background.
pub const BKG_MAGENTA_L: &str = "\x1b[105m";

/// Cyan text.
pub const TXT_CYAN: &str = "\x1b[36m";
/// Cyan background.
pub const BKG_CYAN: &str = "\x1b[46m";
/// Bright cyan text.
pub const TXT_CYAN_L: &str = "\x1b[96m";
/// Bright cyan background.
pub const BKG_CYAN_L: &str = "\x1b[106m";

/// White text.
pub const TXT_WHITE: &str = "\x1b[37m";
/// White background.
pub const BKG_WHITE: &str = "\x1b[47m";
/// Bright white text.
pub const TXT_WHITE_L: &str = "\x1b[97m";
/// Bright white background.
pub const BKG_WHITE_L: &str = "\x1b[107m";

// -- Styles --

/// Bold text.
pub const BOLD: &str = "\x1b[1m";
/// Faint text.
pub const FAINT: &str = "\x1b[2m";
/// Cancels bold and faint.
pub const NORMAL_INTENSITY: &str = "\x1b[22m";
/// Italic text.
pub const ITALIC: &str = "\x1b[3m";
/// Cancels italic.
pub const NOT_ITALIC: &str = "\x1b[23m";
/// Underlined text.
pub const UNDERLINE: &str = "\x1b[4m";
/// Cancels underline.
pub const NO_UNDERLINE: &str = "\x1b[24m";
/// Blinking text.
pub const BLINK: &str = "\x1b[5m";
/// Cancels blink.
pub const NO_BLINK: &str = "\x1b[25m";
/// Swaps text and background colors.
pub const INVERT: &str = "\x1b[7m";
/// Cancels invert.
pub const NOT_INVERTED: &str = "\x1b[27m";
/// Invisible text.
pub const INVISIBLE: &str = "\x1b[8m";
/// Cancels invisible.
pub const REVEAL: &str = "\x1b[28m";
/// Strikethrough text.
pub const STRIKETHROUGH: &str = "\x1b[9m";
/// Cancels strikethrough.
pub const NO_STRIKETHROUGH: &str = "\x1b[29m";

/// Cancels all style and color changes.
pub const RESET: &str = "\x1b[0m";

/// Wrap `text` in `code`, followed by [`RESET`].
///
/// ```
/// use ansicodes::codes::{paint, BOLD};
///
/// assert_eq!(paint(BOLD, "hi"), "\u{1b}[1mhi\u{1b}[0m");
/// ```
pub fn paint(code: &str, text: &str) -> String {
    let mut out = String::with_capacity(code.len() + text.len() + RESET.len());
    out.push_str(code);
    out.push_str(text);
    out.push_str(RESET);
    out
}
