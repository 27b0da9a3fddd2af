//! # Encoded Barcode Inputs
//!
//! The symbol encoders hand every output back-end two strings. This module
//! parses both of them.
//!
//! ## Partial
//!
//! A run-length description of the bar pattern. Each character is one run:
//!
//! | Character | Run width | Label clearance |
//! |-----------|-----------|-----------------|
//! | `0`-`9`   | 0-9       | full (digit)    |
//! | `a`-`j`   | 1-10      | reduced (letter, e.g. guard bars) |
//! | `+`       | -         | labels go above from here on |
//! | `-`       | -         | labels go below from here on |
//!
//! The first character is the leading space (quiet zone); after it runs
//! alternate bar, space, bar, ... Mode characters do not take part in the
//! alternation.
//!
//! ```text
//! "9a1a2" -> space 9, bar 1 (guard), space 1, bar 1 (guard), space 2
//! ```
//!
//! ## Textinfo
//!
//! Space-separated `<x>:<size>:<char>` records placing human-readable
//! characters, optionally interleaved with bare `+`/`-` mode records.
//!
//! ```text
//! "0:12:7 +  10:12:A 20:12:B"
//! ```
//!
//! ## Modules
//!
//! - [`partial`]: bar/space run parsing
//! - [`textinfo`]: label record parsing

pub mod partial;
pub mod textinfo;

pub use partial::{Element, Partial, Run, RunKind};
pub use textinfo::{Glyph, TextEntry};

/// Where human-readable labels go relative to the bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextMode {
    /// Labels under the bars (`-`, default).
    #[default]
    Below,
    /// Labels over the bars (`+`).
    Above,
}

impl TextMode {
    /// Parse a `+`/`-` marker.
    pub fn from_marker(c: char) -> Option<Self> {
        match c {
            '-' => Some(Self::Below),
            '+' => Some(Self::Above),
            _ => None,
        }
    }
}
