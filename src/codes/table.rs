//! Name-indexed view of the SGR constants

use super::*;

/// Every named code, keyed by its display name.
///
/// Order follows the module: default colors, the color families, then styles
/// and [`RESET`].
pub const NAMED: &[(&str, &str)] = &[
    ("TxtDefault", TXT_DEFAULT),
    ("BkgDefault", BKG_DEFAULT),
    ("TxtBlack", TXT_BLACK),
    ("BkgBlack", BKG_BLACK),
    ("TxtBlackL", TXT_BLACK_L),
    ("BkgBlackL", BKG_BLACK_L),
    ("TxtDkGray", TXT_DK_GRAY),
    ("BkgDkGray", BKG_DK_GRAY),
    ("TxtDkGrey", TXT_DK_GREY),
    ("BkgDkGrey", BKG_DK_GREY),
    ("TxtRed", TXT_RED),
    ("BkgRed", BKG_RED),
    ("TxtRedL", TXT_RED_L),
    ("BkgRedL", BKG_RED_L),
    ("TxtOrange", TXT_ORANGE),
    ("BkgOrange", BKG_ORANGE),
    ("TxtYellow", TXT_YELLOW),
    ("BkgYellow", BKG_YELLOW),
    ("TxtYellowL", TXT_YELLOW_L),
    ("BkgYellowL", BKG_YELLOW_L),
    ("TxtGreen", TXT_GREEN),
    ("BkgGreen", BKG_GREEN),
    ("TxtGreenL", TXT_GREEN_L),
    ("BkgGreenL", BKG_GREEN_L),
    ("TxtBlue", TXT_BLUE),
    ("BkgBlue", BKG_BLUE),
    ("TxtBlueL", TXT_BLUE_L),
    ("BkgBlueL", BKG_BLUE_L),
    ("TxtPurple", TXT_PURPLE),
    ("BkgPurple", BKG_PURPLE),
    ("TxtMagenta", TXT_MAGENTA),
    ("BkgMagenta", BKG_MAGENTA),
    ("TxtMagentaL", TXT_MAGENTA_L),
    ("BkgMagentaL", BKG_MAGENTA_L),
    ("TxtCyan", TXT_CYAN),
    ("BkgCyan", BKG_CYAN),
    ("TxtCyanL", TXT_CYAN_L),
    ("BkgCyanL", BKG_CYAN_L),
    ("TxtWhite", TXT_WHITE),
    ("BkgWhite", BKG_WHITE),
    ("TxtWhiteL", TXT_WHITE_L),
    ("BkgWhiteL", BKG_WHITE_L),
    ("Bold", BOLD),
    ("Faint", FAINT),
    ("NormalIntensity", NORMAL_INTENSITY),
    ("Italic", ITALIC),
    ("NotItalic", NOT_ITALIC),
    ("Underline", UNDERLINE),
    ("NoUnderline", NO_UNDERLINE),
    ("Blink", BLINK),
    ("NoBlink", NO_BLINK),
    ("Invert", INVERT),
    ("NotInverted", NOT_INVERTED),
    ("Invisible", INVISIBLE),
    ("Reveal", REVEAL),
    ("Strikethrough", STRIKETHROUGH),
    ("NoStrikethrough", NO_STRIKETHROUGH),
    ("Reset", RESET),
];

/// Find a code by display name, ignoring ASCII case.
///
/// ```
/// use ansicodes::codes::{lookup, TXT_CYAN};
///
/// assert_eq!(lookup("txtcyan"), Some(TXT_CYAN));
/// assert_eq!(lookup("TxtChartreuse"), None);
/// ```
pub fn lookup(name: &str) -> Option<&'static str> {
    NAMED
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, code)| *code)
}
