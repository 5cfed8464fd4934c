//! ansicodes: ANSI terminal formatting helpers
//!
//! ansicodes builds and removes the SGR escape sequences terminals use for
//! color and text style. It is meant for scripts that print colored status
//! tables and need to line columns up by what the player actually sees.
//!
//! # Features
//!
//! - **RGB colors**: 24-bit foreground and background escapes with lenient,
//!   clamped channel input
//! - **Named codes**: the 8 base colors, their bright variants, orange,
//!   purple, every common style toggle and reset
//! - **Stripping**: removal of embedded control sequences
//! - **Visible width**: padding that ignores control sequences
//! - **Override store**: a small persisted list of manual "done" flags
//!
//! # Quick Start
//!
//! ```rust
//! use ansicodes::codes::{RESET, TXT_GREEN, TXT_RED};
//! use ansicodes::{pad_leading, strip, txt_rgb};
//!
//! let done = format!("{TXT_GREEN}Done{RESET}");
//! let todo = format!("{}$1m{RESET}", txt_rgb(255, 102, 0));
//!
//! assert_eq!(strip(&done), "Done");
//! assert_eq!(strip(&pad_leading(&todo, 5)), "  $1m");
//! assert_eq!(TXT_RED, "\u{1b}[31m");
//! ```
//!
//! # Channel Input
//!
//! [`bkg_rgb`] and [`txt_rgb`] take anything convertible into a [`Channel`]:
//! integers, floats and numeral strings. Out-of-range values clamp to 0 or
//! 255, and text without a leading number counts as 0.
//!
//! ```rust
//! use ansicodes::{bkg_rgb, txt_rgb};
//!
//! assert_eq!(bkg_rgb(-5, 300, 128), bkg_rgb(0, 255, 128));
//! assert_eq!(txt_rgb("10", "20", "30"), txt_rgb(10, 20, 30));
//! assert_eq!(txt_rgb("teal", 0, 0), txt_rgb(0, 0, 0));
//! ```

#![warn(missing_docs)]

pub mod codes;
mod color;
mod result;
mod store;
mod strip;

// Public API exports
pub use color::{bkg_rgb, txt_rgb, Channel, Rgb};
pub use result::{CommandError, StoreError, StoreResult};
pub use store::{OverrideStore, StoreBuilder, StoreCommand};
pub use strip::{pad_leading, pad_trailing, strip, strip_bytes, strip_output, visible_width};
