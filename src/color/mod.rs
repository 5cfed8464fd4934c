//! 24-bit RGB escape builders

mod channel;

pub use channel::Channel;

use std::fmt;

/// SGR selector for an extended foreground color.
const FOREGROUND_SELECTOR: u8 = 38;

/// SGR selector for an extended background color.
const BACKGROUND_SELECTOR: u8 = 48;

/// Color-space argument meaning "three 8-bit channels follow".
const TRUECOLOR_MODE: u8 = 2;

/// A 24-bit color.
///
/// The default color is white, since every omitted channel is 255.
///
/// # Examples
///
/// ```
/// use ansicodes::Rgb;
///
/// let orange = Rgb::new(255, 102, 0);
/// assert_eq!(orange.foreground(), "\u{1b}[38;2;255;102;0m");
/// assert_eq!(orange.background(), "\u{1b}[48;2;255;102;0m");
/// assert_eq!(Rgb::default().to_string(), "255;255;255");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel.
    pub red: Channel,
    /// Green channel.
    pub green: Channel,
    /// Blue channel.
    pub blue: Channel,
}

impl Rgb {
    /// Create a color from any three channel-convertible values.
    pub fn new(red: impl Into<Channel>, green: impl Into<Channel>, blue: impl Into<Channel>) -> Self {
        Self {
            red: red.into(),
            green: green.into(),
            blue: blue.into(),
        }
    }

    /// Escape string that sets the text color to this color.
    pub fn foreground(&self) -> String {
        self.sgr(FOREGROUND_SELECTOR)
    }

    /// Escape string that sets the background color to this color.
    pub fn background(&self) -> String {
        self.sgr(BACKGROUND_SELECTOR)
    }

    fn sgr(&self, selector: u8) -> String {
        format!("\x1b[{selector};{TRUECOLOR_MODE};{self}m")
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{};{}", self.red, self.green, self.blue)
    }
}

impl<R, G, B> From<(R, G, B)> for Rgb
where
    R: Into<Channel>,
    G: Into<Channel>,
    B: Into<Channel>,
{
    fn from((red, green, blue): (R, G, B)) -> Self {
        Rgb::new(red, green, blue)
    }
}

/// Returns an escape string that sets the background color of the text which
/// follows to the given RGB color.
///
/// Channels are clamped into `0..=255`; numeral strings are parsed first and
/// non-numeric strings count as 0 (see [`Channel::parse`]). Use
/// `Rgb::default().background()` for the all-omitted white default.
///
/// # Examples
///
/// ```
/// use ansicodes::bkg_rgb;
///
/// assert_eq!(bkg_rgb(10, 20, 30), "\u{1b}[48;2;10;20;30m");
/// assert_eq!(bkg_rgb(-5, 300, 128), bkg_rgb(0, 255, 128));
/// ```
pub fn bkg_rgb(red: impl Into<Channel>, green: impl Into<Channel>, blue: impl Into<Channel>) -> String {
    Rgb::new(red, green, blue).background()
}

/// Returns an escape string that sets the color of the text which follows to
/// the given RGB color.
///
/// Same channel rules as [`bkg_rgb`].
///
/// # Examples
///
/// ```
/// use ansicodes::txt_rgb;
///
/// assert_eq!(txt_rgb("10", "20", "30"), txt_rgb(10, 20, 30));
/// ```
pub fn txt_rgb(red: impl Into<Channel>, green: impl Into<Channel>, blue: impl Into<Channel>) -> String {
    Rgb::new(red, green, blue).foreground()
}
