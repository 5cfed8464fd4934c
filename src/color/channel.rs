//! A single 0-255 color channel

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Upper bound of a channel value.
const CHANNEL_MAX: u8 = 255;

/// One red, green or blue component of a 24-bit color.
///
/// A `Channel` can be built from any integer, float or numeral string. Every
/// conversion clamps into `0..=255` instead of failing:
///
/// - integers below 0 become 0, above 255 become 255
/// - floats are truncated toward zero after clamping, and `NaN` becomes 0
/// - strings go through [`Channel::parse`]
///
/// The default channel is 255, so an omitted component reads as full intensity.
///
/// # Examples
///
/// ```
/// use ansicodes::Channel;
///
/// assert_eq!(Channel::from(-5).value(), 0);
/// assert_eq!(Channel::from(300).value(), 255);
/// assert_eq!(Channel::from("128").value(), 128);
/// assert_eq!(Channel::from("teal").value(), 0);
/// assert_eq!(Channel::default().value(), 255);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Channel(u8);

impl Channel {
    /// Channel at zero intensity.
    pub const MIN: Channel = Channel(0);

    /// Channel at full intensity.
    pub const MAX: Channel = Channel(CHANNEL_MAX);

    /// Create a channel from an in-range value.
    pub const fn new(value: u8) -> Self {
        Channel(value)
    }

    /// The clamped channel value.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Parse a channel from text.
    ///
    /// Surrounding whitespace is ignored. An optional sign followed by the
    /// longest run of ASCII digits is read as an integer and anything after
    /// that run is ignored, so `"12px"` reads as 12. The result is clamped into
    /// `0..=255`; a digit run too long for any integer saturates to the bound
    /// of its sign.
    ///
    /// Text with no leading digits (`""`, `"red"`, `"-"`) is 0.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let end = unsigned
            .bytes()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(unsigned.len());
        let digits = &unsigned[..end];

        if digits.is_empty() || negative {
            return Channel::MIN;
        }

        match digits.parse::<u64>() {
            Ok(value) => Channel::from(value),
            Err(_) => Channel::MAX,
        }
    }
}

impl Default for Channel {
    fn default() -> Self {
        Channel::MAX
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Channel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Channel::parse(s))
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Channel {
                fn from(value: $t) -> Self {
                    Channel((value as i128).clamp(0, i128::from(CHANNEL_MAX)) as u8)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f64> for Channel {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            return Channel::MIN;
        }
        Channel(value.clamp(0.0, f64::from(CHANNEL_MAX)) as u8)
    }
}

impl From<f32> for Channel {
    fn from(value: f32) -> Self {
        Channel::from(f64::from(value))
    }
}

impl From<&str> for Channel {
    fn from(value: &str) -> Self {
        Channel::parse(value)
    }
}

impl From<&String> for Channel {
    fn from(value: &String) -> Self {
        Channel::parse(value)
    }
}

impl From<String> for Channel {
    fn from(value: String) -> Self {
        Channel::parse(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_clamp() {
        assert_eq!(Channel::from(-1).value(), 0);
        assert_eq!(Channel::from(0).value(), 0);
        assert_eq!(Channel::from(255).value(), 255);
        assert_eq!(Channel::from(256).value(), 255);
        assert_eq!(Channel::from(i64::MIN).value(), 0);
        assert_eq!(Channel::from(u64::MAX).value(), 255);
        assert_eq!(Channel::from(usize::MAX).value(), 255);
    }

    #[test]
    fn test_float_clamp() {
        assert_eq!(Channel::from(12.9).value(), 12);
        assert_eq!(Channel::from(-0.5).value(), 0);
        assert_eq!(Channel::from(1e9).value(), 255);
        assert_eq!(Channel::from(f64::INFINITY).value(), 255);
        assert_eq!(Channel::from(f64::NEG_INFINITY).value(), 0);
        assert_eq!(Channel::from(f64::NAN).value(), 0);
        assert_eq!(Channel::from(f32::NAN).value(), 0);
    }

    #[test]
    fn test_parse_numerals() {
        assert_eq!(Channel::parse("10").value(), 10);
        assert_eq!(Channel::parse("  42  ").value(), 42);
        assert_eq!(Channel::parse("+7").value(), 7);
        assert_eq!(Channel::parse("007").value(), 7);
        assert_eq!(Channel::parse("300").value(), 255);
    }

    #[test]
    fn test_parse_trailing_garbage() {
        assert_eq!(Channel::parse("12px").value(), 12);
        assert_eq!(Channel::parse("99.9").value(), 99);
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!(Channel::parse("-5").value(), 0);
        assert_eq!(Channel::parse("-0").value(), 0);
    }

    #[test]
    fn test_parse_non_numeric_is_zero() {
        assert_eq!(Channel::parse("").value(), 0);
        assert_eq!(Channel::parse("   ").value(), 0);
        assert_eq!(Channel::parse("red").value(), 0);
        assert_eq!(Channel::parse("-").value(), 0);
        assert_eq!(Channel::parse("x12").value(), 0);
    }

    #[test]
    fn test_parse_overflow_saturates() {
        assert_eq!(Channel::parse("99999999999999999999999999").value(), 255);
        assert_eq!(Channel::parse("-99999999999999999999999999").value(), 0);
    }

    #[test]
    fn test_from_str() {
        let channel: Channel = "64".parse().unwrap();
        assert_eq!(channel, Channel::new(64));
    }

    #[test]
    fn test_default_is_full_intensity() {
        assert_eq!(Channel::default(), Channel::MAX);
    }

    #[test]
    fn test_display() {
        assert_eq!(Channel::new(7).to_string(), "7");
    }
}
