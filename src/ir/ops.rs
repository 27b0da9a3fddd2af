//! # IR Opcodes
//!
//! This module defines the intermediate representation (IR) for barcode
//! output. The IR is a sequence of opcodes that can be inspected in tests
//! and compiled to PCL bytes.
//!
//! ## Design Philosophy
//!
//! The IR sits between the emitters and raw printer bytes:
//!
//! ```text
//! Emitters → IR (inspectable) → Codegen → Bytes
//! ```
//!
//! Positions and sizes are kept in points; conversion to decipoints happens
//! in codegen only.

/// IR opcodes - the "bytecode" for barcode printing.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    // ========== Cursor ==========
    /// Absolute horizontal cursor position, points.
    MoveX(f64),

    /// Absolute vertical cursor position, points.
    MoveY(f64),

    // ========== Rectangles ==========
    /// Width of the next filled rectangle, points.
    RectWidth(f64),

    /// Height of the next filled rectangle, points.
    RectHeight(f64),

    /// Fill the current rectangle solid black.
    Fill,

    // ========== Text ==========
    /// Select the scalable label font.
    SelectFont { points: f64, typeface: u16 },

    /// Print one character at the cursor.
    Char(char),

    /// Line feed separator (not a printer command).
    Newline,
}

/// A compiled IR program.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub ops: Vec<Op>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Add an op to the program.
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// Add multiple ops to the program.
    pub fn extend(&mut self, ops: impl IntoIterator<Item = Op>) {
        self.ops.extend(ops);
    }

    /// Get the number of ops in the program.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the program is empty.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterate over ops.
    pub fn iter(&self) -> impl Iterator<Item = &Op> {
        self.ops.iter()
    }
}

impl FromIterator<Op> for Program {
    fn from_iter<T: IntoIterator<Item = Op>>(iter: T) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Program {
    type Item = Op;
    type IntoIter = std::vec::IntoIter<Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_new() {
        let program = Program::new();
        assert!(program.is_empty());
    }

    #[test]
    fn test_program_push() {
        let mut program = Program::new();
        program.push(Op::MoveX(1.0));
        program.push(Op::MoveY(2.0));
        program.push(Op::Char('A'));
        assert_eq!(program.len(), 3);
    }

    #[test]
    fn test_program_from_iter() {
        let program: Program = [Op::Fill, Op::Newline].into_iter().collect();
        assert_eq!(program.ops, vec![Op::Fill, Op::Newline]);
        assert_eq!(program.iter().count(), 2);
    }
}
