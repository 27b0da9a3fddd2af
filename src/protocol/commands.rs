//! # PCL Protocol Commands
//!
//! This module implements the handful of HP PCL (Printer Command Language)
//! sequences needed to draw a linear barcode: absolute cursor positioning,
//! filled rectangles, and scalable font selection.
//!
//! ## Escape Sequence Structure
//!
//! PCL parameterized commands follow the pattern:
//!
//! ```text
//! ESC <parameterized char> <group char> <value> <terminator>
//! ```
//!
//! e.g. `ESC & a 1200 H` moves the cursor to 1200 decipoints horizontally.
//! Values are ASCII decimal, never binary.
//!
//! ## Units
//!
//! The cursor and rectangle commands used here take **decipoints** (1/720
//! inch). Callers work in points and multiply by ten; see [`deci`].
//!
//! ## Reference
//!
//! Based on "PCL 5 Printer Language Technical Reference Manual",
//! Hewlett-Packard, chapters 6 (cursor positioning), 8 (fonts) and
//! 14 (rectangular area fill).

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Every PCL command begins with ESC (0x1B, decimal 27).
pub const ESC: u8 = 0x1B;

/// LF (Line Feed)
///
/// Not a PCL command here, only a separator after each bar group so that
/// the stream stays line-oriented and diffable.
pub const LF: u8 = 0x0A;

/// Convert points to decipoints, formatted as a rounded decimal.
///
/// Ties go to the even neighbour, matching a C `%.0f` conversion. Bar widths
/// hit exact ties often: `(1.0 * 10.0 - 0.15) * 10.0` is exactly `98.5`.
///
/// ```
/// use barcode_pcl::protocol::commands::deci;
///
/// assert_eq!(deci(12.0), "120");
/// assert_eq!(deci(2.96), "30");
/// assert_eq!(deci(9.85), "98");
/// ```
pub fn deci(points: f64) -> String {
    format!("{:.0}", (points * 10.0).round_ties_even())
}

fn parameterized(group: &[u8], value: &str, terminator: u8) -> Vec<u8> {
    let mut cmd = Vec::with_capacity(1 + group.len() + value.len() + 1);
    cmd.push(ESC);
    cmd.extend_from_slice(group);
    cmd.extend_from_slice(value.as_bytes());
    cmd.push(terminator);
    cmd
}

// ============================================================================
// CURSOR POSITIONING
// ============================================================================

/// # Horizontal Cursor Position, Decipoints (ESC & a # H)
///
/// Moves the cursor to an absolute horizontal position measured from the
/// left edge of the logical page.
///
/// ## Protocol Details
///
/// | Format  | Bytes          |
/// |---------|----------------|
/// | ASCII   | ESC & a # H    |
/// | Hex     | 1B 26 61 .. 48 |
///
/// ## Example
///
/// ```
/// use barcode_pcl::protocol::commands;
///
/// assert_eq!(commands::cursor_x(15.0), b"\x1b&a150H".to_vec());
/// ```
pub fn cursor_x(points: f64) -> Vec<u8> {
    parameterized(b"&a", &deci(points), b'H')
}

/// # Vertical Cursor Position, Decipoints (ESC & a # V)
///
/// Moves the cursor to an absolute vertical position measured from the top
/// margin.
///
/// | Format  | Bytes          |
/// |---------|----------------|
/// | ASCII   | ESC & a # V    |
/// | Hex     | 1B 26 61 .. 56 |
pub fn cursor_y(points: f64) -> Vec<u8> {
    parameterized(b"&a", &deci(points), b'V')
}

// ============================================================================
// RECTANGULAR AREA FILL
// ============================================================================

/// # Horizontal Rectangle Size, Decipoints (ESC * c # H)
///
/// Sets the width of the rectangle drawn by the next fill command.
/// The rectangle's origin is the current cursor position.
///
/// | Format  | Bytes          |
/// |---------|----------------|
/// | ASCII   | ESC * c # H    |
/// | Hex     | 1B 2A 63 .. 48 |
pub fn rect_width(points: f64) -> Vec<u8> {
    parameterized(b"*c", &deci(points), b'H')
}

/// # Vertical Rectangle Size, Decipoints (ESC * c # V)
///
/// Sets the height of the rectangle drawn by the next fill command.
///
/// | Format  | Bytes          |
/// |---------|----------------|
/// | ASCII   | ESC * c # V    |
/// | Hex     | 1B 2A 63 .. 56 |
pub fn rect_height(points: f64) -> Vec<u8> {
    parameterized(b"*c", &deci(points), b'V')
}

/// # Fill Rectangular Area, Solid Black (ESC * c 0 P)
///
/// Fills the rectangle defined by the cursor position and the last
/// width/height commands. Pattern 0 is solid black (100% shading).
///
/// | Format  | Bytes             |
/// |---------|-------------------|
/// | ASCII   | ESC * c 0 P       |
/// | Hex     | 1B 2A 63 30 50    |
#[inline]
pub fn fill_black() -> Vec<u8> {
    vec![ESC, b'*', b'c', b'0', b'P']
}

// ============================================================================
// FONT SELECTION
// ============================================================================

/// # Select Scalable Font (ESC ( 8 U  ESC ( s 1 p # v 0 s 0 b # T)
///
/// Selects the Roman-8 symbol set, then a proportional, upright, medium
/// weight typeface at the given point size.
///
/// ## Parameters
///
/// | Field | Meaning |
/// |-------|---------|
/// | `8U`  | Symbol set Roman-8 |
/// | `1p`  | Proportional spacing |
/// | `#v`  | Height in points, formatted `%5.2f` |
/// | `0s`  | Upright style |
/// | `0b`  | Medium stroke weight |
/// | `#T`  | Typeface family ID |
///
/// ## Example
///
/// ```
/// use barcode_pcl::protocol::commands;
///
/// assert_eq!(
///     commands::select_font(9.0, 16602),
///     b"\x1b(8U\x1b(s1p 9.00v0s0b16602T".to_vec()
/// );
/// ```
pub fn select_font(points: f64, typeface: u16) -> Vec<u8> {
    let mut cmd = vec![ESC, b'(', b'8', b'U', ESC, b'(', b's', b'1', b'p'];
    cmd.extend_from_slice(format!("{:5.2}v0s0b{}T", points, typeface).as_bytes());
    cmd
}

// ============================================================================
// TESTS
// ============================================================================
