//! Human-readable label ("textinfo") parsing.

use std::str::FromStr;

use super::TextMode;

/// One character to print, in unscaled units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    /// Horizontal position, relative to the start of the bar pattern.
    pub x: f64,
    /// Font size in points, before scaling.
    pub size: f64,
    pub ch: char,
}

impl FromStr for Glyph {
    type Err = ();

    fn from_str(record: &str) -> Result<Self, Self::Err> {
        let mut fields = record.splitn(3, ':');
        let x = fields.next().ok_or(())?.parse().map_err(|_| ())?;
        let size = fields.next().ok_or(())?.parse().map_err(|_| ())?;
        let ch = fields.next().and_then(|s| s.chars().next()).ok_or(())?;
        Ok(Self { x, size, ch })
    }
}

/// A single whitespace-separated textinfo record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextEntry<'a> {
    /// Bare `+` or `-`.
    Mode(TextMode),
    Glyph(Glyph),
    /// Could not be parsed; carries the raw record.
    Malformed(&'a str),
}

/// Split a textinfo string into records.
///
/// Only a record that is exactly `+` or `-` switches the text mode. A
/// longer record starting with a sign, such as `-7:9:<`, is a glyph with a
/// negative x.
///
/// ```
/// use barcode_pcl::encoding::{textinfo, TextEntry};
///
/// let entries: Vec<_> = textinfo::entries("0:12:7 + junk").collect();
/// assert_eq!(entries.len(), 3);
/// assert!(matches!(entries[2], TextEntry::Malformed("junk")));
/// ```
pub fn entries(textinfo: &str) -> impl Iterator<Item = TextEntry<'_>> {
    textinfo.split_whitespace().map(|record| {
        let mut chars = record.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(mode) = TextMode::from_marker(c) {
                return TextEntry::Mode(mode);
            }
        }
        record
            .parse()
            .map(TextEntry::Glyph)
            .unwrap_or(TextEntry::Malformed(record))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_glyph() {
        let glyph: Glyph = "10.0:12.0:A".parse().unwrap();
        assert_eq!(glyph.x, 10.0);
        assert_eq!(glyph.size, 12.0);
        assert_eq!(glyph.ch, 'A');
    }

    #[test]
    fn test_parse_glyph_integers_and_negative_x() {
        let glyph: Glyph = "-7:9:<".parse().unwrap();
        assert_eq!(glyph.x, -7.0);
        assert_eq!(glyph.size, 9.0);
        assert_eq!(glyph.ch, '<');
    }

    #[test]
    fn test_colon_character() {
        let glyph: Glyph = "1:2::".parse().unwrap();
        assert_eq!(glyph.ch, ':');
    }

    #[test]
    fn test_malformed_records() {
        assert!("abc".parse::<Glyph>().is_err());
        assert!("1.0:2.0".parse::<Glyph>().is_err());
        assert!("1.0:2.0:".parse::<Glyph>().is_err());
        assert!("x:2.0:A".parse::<Glyph>().is_err());
    }

    #[test]
    fn test_entries_mixed() {
        let entries: Vec<_> = entries("  0:12:7   abc + 10.0:12.0:A - ").collect();
        assert_eq!(
            entries,
            vec![
                TextEntry::Glyph(Glyph {
                    x: 0.0,
                    size: 12.0,
                    ch: '7'
                }),
                TextEntry::Malformed("abc"),
                TextEntry::Mode(TextMode::Above),
                TextEntry::Glyph(Glyph {
                    x: 10.0,
                    size: 12.0,
                    ch: 'A'
                }),
                TextEntry::Mode(TextMode::Below),
            ]
        );
    }

    #[test]
    fn test_signed_record_is_a_glyph_not_a_mode() {
        let entries: Vec<_> = entries("-7:9:< +1:9:>").collect();
        assert_eq!(
            entries,
            vec![
                TextEntry::Glyph(Glyph {
                    x: -7.0,
                    size: 9.0,
                    ch: '<'
                }),
                TextEntry::Glyph(Glyph {
                    x: 1.0,
                    size: 9.0,
                    ch: '>'
                }),
            ]
        );
    }

    #[test]
    fn test_empty_textinfo_has_no_entries() {
        assert_eq!(entries("   ").count(), 0);
    }
}
