//! Run-length bar pattern ("partial") parsing.

use super::TextMode;
use crate::error::BarcodeError;

/// How a run was written, which decides how much room its label gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    /// Written as a digit `0`-`9`.
    Digit,
    /// Written as a letter `a`-`j`; bars extend further into the text area.
    Letter,
}

/// A single bar or space run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// Width in modules (0-10).
    pub width: u8,
    pub kind: RunKind,
}

impl Run {
    /// Decode one run character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Self {
                width: c as u8 - b'0',
                kind: RunKind::Digit,
            }),
            'a'..='j' => Some(Self {
                width: c as u8 - b'a' + 1,
                kind: RunKind::Letter,
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Run(Run),
    Mode(TextMode),
}

/// A parsed partial encoding.
///
/// ```
/// use barcode_pcl::encoding::Partial;
///
/// let partial = Partial::parse("2121").unwrap();
/// assert_eq!(partial.barlen(), 6);
/// assert_eq!(partial.leading().width, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partial {
    leading: Run,
    tokens: Vec<Token>,
}

impl Partial {
    /// Parse a partial string.
    ///
    /// Fails with [`BarcodeError::InvalidInput`] when the string is empty and
    /// with [`BarcodeError::MalformedPartial`] on any character outside the
    /// alphabet. The leading character must be a run.
    pub fn parse(s: &str) -> Result<Self, BarcodeError> {
        let mut chars = s.char_indices();
        let leading = match chars.next() {
            None => return Err(BarcodeError::InvalidInput("partial is empty".into())),
            Some((position, c)) => {
                Run::from_char(c).ok_or(BarcodeError::MalformedPartial { position, token: c })?
            }
        };

        let tokens = chars
            .map(|(position, c)| {
                if let Some(mode) = TextMode::from_marker(c) {
                    Ok(Token::Mode(mode))
                } else {
                    Run::from_char(c)
                        .map(Token::Run)
                        .ok_or(BarcodeError::MalformedPartial { position, token: c })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { leading, tokens })
    }

    /// The leading space (quiet zone) run.
    pub fn leading(&self) -> Run {
        self.leading
    }

    /// Total width of all runs, leading one included, in modules.
    pub fn barlen(&self) -> u32 {
        let rest: u32 = self
            .tokens
            .iter()
            .filter_map(|t| match t {
                Token::Run(run) => Some(u32::from(run.width)),
                Token::Mode(_) => None,
            })
            .sum();
        u32::from(self.leading.width) + rest
    }

    /// Walk the runs after the leading one.
    pub fn elements(&self) -> Elements<'_> {
        Elements {
            tokens: self.tokens.iter(),
            index: 1,
            mode: TextMode::default(),
        }
    }
}

/// One run after the leading space, with the state it is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    pub run: Run,
    /// Bars sit at odd positions, spaces at even ones.
    pub is_bar: bool,
    /// Label placement in effect for this run.
    pub mode: TextMode,
}

/// Iterator returned by [`Partial::elements`].
#[derive(Debug, Clone)]
pub struct Elements<'a> {
    tokens: std::slice::Iter<'a, Token>,
    index: usize,
    mode: TextMode,
}

impl Iterator for Elements<'_> {
    type Item = Element;

    fn next(&mut self) -> Option<Element> {
        loop {
            match self.tokens.next()? {
                Token::Mode(mode) => self.mode = *mode,
                Token::Run(run) => {
                    let element = Element {
                        run: *run,
                        is_bar: self.index % 2 == 1,
                        mode: self.mode,
                    };
                    self.index += 1;
                    return Some(element);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_alphabet() {
        for (i, c) in ('0'..='9').enumerate() {
            let run = Run::from_char(c).unwrap();
            assert_eq!(run.width as usize, i);
            assert_eq!(run.kind, RunKind::Digit);
        }
        for (i, c) in ('a'..='j').enumerate() {
            let run = Run::from_char(c).unwrap();
            assert_eq!(run.width as usize, i + 1);
            assert_eq!(run.kind, RunKind::Letter);
        }
        assert_eq!(Run::from_char('k'), None);
        assert_eq!(Run::from_char('A'), None);
    }

    #[test]
    fn test_barlen_digits() {
        assert_eq!(Partial::parse("2121").unwrap().barlen(), 6);
    }

    #[test]
    fn test_barlen_matches_manual_sum() {
        let s = "9a1a2221213+a1a-0j";
        let manual: u32 = s
            .chars()
            .map(|c| match c {
                '0'..='9' => c.to_digit(10).unwrap(),
                'a'..='j' => c as u32 - 'a' as u32 + 1,
                _ => 0,
            })
            .sum();
        assert_eq!(Partial::parse(s).unwrap().barlen(), manual);
    }

    #[test]
    fn test_leading_letter() {
        let partial = Partial::parse("c1").unwrap();
        assert_eq!(partial.leading().width, 3);
        assert_eq!(partial.barlen(), 4);
    }

    #[test]
    fn test_empty_is_invalid_input() {
        assert!(matches!(
            Partial::parse(""),
            Err(BarcodeError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_bad_character_reports_position() {
        match Partial::parse("21x1") {
            Err(BarcodeError::MalformedPartial { position, token }) => {
                assert_eq!(position, 2);
                assert_eq!(token, 'x');
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            Partial::parse("+21"),
            Err(BarcodeError::MalformedPartial { position: 0, .. })
        ));
    }

    #[test]
    fn test_elements_alternate_bar_space() {
        let partial = Partial::parse("91213").unwrap();
        let bars: Vec<bool> = partial.elements().map(|e| e.is_bar).collect();
        assert_eq!(bars, vec![true, false, true, false]);
    }

    #[test]
    fn test_mode_markers_do_not_shift_parity() {
        let partial = Partial::parse("91+2-13").unwrap();
        let elements: Vec<Element> = partial.elements().collect();
        assert_eq!(elements.len(), 4);
        assert_eq!(
            elements.iter().map(|e| e.is_bar).collect::<Vec<_>>(),
            vec![true, false, true, false]
        );
        assert_eq!(elements[0].mode, TextMode::Below);
        assert_eq!(elements[1].mode, TextMode::Above);
        assert_eq!(elements[2].mode, TextMode::Below);
        assert_eq!(elements[3].mode, TextMode::Below);
        // Markers never contribute width
        assert_eq!(partial.barlen(), 16);
    }
}
