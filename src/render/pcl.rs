//! # PCL Back-end
//!
//! Draws each bar as a filled rectangle and places each label character
//! with absolute cursor moves and a scalable font.
//!
//! ## Bar heights
//!
//! Unless text is suppressed, bars leave room for their labels. Digit runs
//! are normal bars; letter runs (guard bars) reach further into the text.
//!
//! | Mode | Run | Top offset | Height reduction |
//! |------|-----|------------|------------------|
//! | below (`-`) | digit  | 0  | 10 |
//! | below (`-`) | letter | 0  | 5  |
//! | above (`+`) | digit  | 10 | 20 |
//! | above (`+`) | letter | 0  | 10 |
//!
//! All values are in modules and multiplied by the scale.

use std::io::Write;

use log::{debug, warn};

use super::Renderer;
use super::geometry::{self, ResolvedGeometry};
use crate::encoding::{Partial, RunKind, TextEntry, TextMode, textinfo};
use crate::error::BarcodeError;
use crate::ir::{Op, Program};
use crate::request::RenderRequest;

/// Subtracted from every bar width, in points, to compensate for toner
/// spreading on paper.
pub const SHRINK_AMOUNT: f64 = 0.15;

/// Baseline of labels printed above the bars, in modules from the top.
pub const ABOVE_BASELINE: f64 = 8.0;

/// `(top offset, height reduction)` for a bar, in modules.
fn label_clearance(mode: TextMode, kind: RunKind) -> (f64, f64) {
    match (mode, kind) {
        (TextMode::Below, RunKind::Digit) => (0.0, 10.0),
        (TextMode::Below, RunKind::Letter) => (0.0, 5.0),
        (TextMode::Above, RunKind::Digit) => (10.0, 20.0),
        (TextMode::Above, RunKind::Letter) => (0.0, 10.0),
    }
}

/// Build the bar pass: one positioned rectangle per bar.
pub fn bars(request: &RenderRequest, partial: &Partial, geometry: &ResolvedGeometry) -> Program {
    let scalef = geometry.scalef;
    let mut program = Program::new();
    let mut xpos = f64::from(request.margin) + f64::from(partial.leading().width) * scalef;

    for element in partial.elements() {
        let run = f64::from(element.run.width);
        if element.is_bar {
            let x0 = f64::from(geometry.xoff) + xpos;
            let mut y0 = f64::from(geometry.yoff) + f64::from(request.margin);
            let mut yr = f64::from(geometry.height);
            if !request.flags.no_text {
                let (top, shrink) = label_clearance(element.mode, element.run.kind);
                y0 += top * scalef;
                yr -= shrink * scalef;
            }
            program.extend([
                Op::MoveX(x0),
                Op::MoveY(y0),
                Op::RectWidth(run * scalef - SHRINK_AMOUNT),
                Op::RectHeight(yr),
                Op::Fill,
                Op::Newline,
            ]);
        }
        xpos += run * scalef;
    }

    program
}

/// Build the text pass. Empty when text is suppressed.
///
/// Malformed records are logged and skipped.
pub fn text(request: &RenderRequest, geometry: &ResolvedGeometry) -> Program {
    let mut program = Program::new();
    if request.flags.no_text {
        return program;
    }

    let scalef = geometry.scalef;
    let device = request.flags.device;
    let typeface = device.typeface_id();
    debug!("labels in {} (typeface {})", device.typeface_name(), typeface);
    let left = f64::from(geometry.xoff);
    let top = f64::from(geometry.yoff) + f64::from(request.margin);
    let below = top + f64::from(geometry.height);

    let mut mode = TextMode::default();
    let mut font_size = None;

    for entry in textinfo::entries(&request.textinfo) {
        let glyph = match entry {
            TextEntry::Mode(m) => {
                mode = m;
                continue;
            }
            TextEntry::Malformed(record) => {
                warn!("impossible data: {}", record);
                continue;
            }
            TextEntry::Glyph(glyph) => glyph,
        };

        if font_size != Some(glyph.size) {
            program.push(Op::SelectFont {
                points: glyph.size * scalef,
                typeface,
            });
            font_size = Some(glyph.size);
        }

        program.push(Op::MoveX(left + glyph.x * scalef + f64::from(request.margin)));
        program.push(Op::MoveY(match mode {
            TextMode::Above => top + ABOVE_BASELINE * scalef,
            TextMode::Below => below,
        }));
        program.push(Op::Char(glyph.ch));
    }

    program
}

/// Write the bar pass to `sink`.
pub fn emit_bars<W: Write + ?Sized>(
    request: &RenderRequest,
    geometry: &ResolvedGeometry,
    sink: &mut W,
) -> Result<(), BarcodeError> {
    let partial = request.validate()?;
    bars(request, &partial, geometry).write_to(sink)?;
    Ok(())
}

/// Write the text pass to `sink`.
pub fn emit_text<W: Write + ?Sized>(
    request: &RenderRequest,
    geometry: &ResolvedGeometry,
    sink: &mut W,
) -> Result<(), BarcodeError> {
    text(request, geometry).write_to(sink)?;
    Ok(())
}

/// The PCL back-end.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pcl;

impl Renderer for Pcl {
    fn name(&self) -> &'static str {
        "pcl"
    }

    fn render(
        &self,
        request: &RenderRequest,
        geometry: &ResolvedGeometry,
        sink: &mut dyn Write,
    ) -> Result<(), BarcodeError> {
        emit_bars(request, geometry, sink)?;
        emit_text(request, geometry, sink)
    }
}

/// Resolve the geometry of `request` and compile it to a PCL program.
pub fn program(request: &RenderRequest) -> Result<Program, BarcodeError> {
    let partial = request.validate()?;
    let geometry = geometry::resolve_partial(request, &partial)?;
    let mut program = bars(request, &partial, &geometry);
    program.extend(text(request, &geometry));
    Ok(program)
}
