//! # Code Generation
//!
//! Converts IR programs to PCL bytes.

use std::io::{self, Write};

use super::ops::{Op, Program};
use crate::protocol::commands;

impl Op {
    /// Compile a single op to PCL bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Op::MoveX(points) => commands::cursor_x(*points),
            Op::MoveY(points) => commands::cursor_y(*points),
            Op::RectWidth(points) => commands::rect_width(*points),
            Op::RectHeight(points) => commands::rect_height(*points),
            Op::Fill => commands::fill_black(),
            Op::SelectFont { points, typeface } => commands::select_font(*points, *typeface),
            Op::Char(c) => {
                let mut buf = [0u8; 4];
                c.encode_utf8(&mut buf).as_bytes().to_vec()
            }
            Op::Newline => vec![commands::LF],
        }
    }
}

impl Program {
    /// Compile the IR program to PCL bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for op in &self.ops {
            out.extend(op.to_bytes());
        }
        out
    }

    /// Stream the program to `sink`, one op at a time.
    ///
    /// Stops at the first failed write; whatever was written before stays
    /// written.
    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        for op in &self.ops {
            sink.write_all(&op.to_bytes())?;
        }
        Ok(())
    }
}
