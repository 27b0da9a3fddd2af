//! # Geometry Resolution
//!
//! Turns a [`RenderRequest`] with possibly unset sizes into concrete numbers
//! every back-end can draw with.
//!
//! ## Rules
//!
//! 1. `barlen` is the total width of the pattern in modules.
//! 2. No scale: the scale is `width / barlen` (width defaults to `barlen`).
//! 3. No width: just enough for the pattern plus one unit.
//! 4. Width too small for the pattern: grow it, moving `xoff` left by half
//!    the growth. `xoff` never goes below zero; the width absorbs the rest.
//! 5. No height: `80 * scalef`.
//! 6. Height below the minimum (5 units of bars, plus 10 for a text line):
//!    the scale shrinks to fit the height, and the width shrinks with it,
//!    recentred. Height wins over width.
//!
//! Resolving an already-resolved request ([`RenderRequest::with_geometry`])
//! returns the same geometry.

use log::debug;
use serde::Serialize;

use crate::encoding::Partial;
use crate::error::BarcodeError;
use crate::request::RenderRequest;

/// Default height, in modules.
pub const DEFAULT_HEIGHT: f64 = 80.0;

/// Minimum bar height, in modules.
pub const MIN_BAR_ROWS: u32 = 5;

/// Room for one line of human-readable text, in modules.
pub const TEXT_ROWS: u32 = 10;

/// Final sizes for one render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedGeometry {
    /// Pattern width in modules.
    pub barlen: u32,
    /// Points per module.
    pub scalef: f64,
    pub width: u32,
    pub height: u32,
    pub xoff: u32,
    pub yoff: u32,
}

impl ResolvedGeometry {
    /// Horizontal extent of the bar pattern in points.
    pub fn extent(&self) -> f64 {
        f64::from(self.barlen) * self.scalef
    }
}

/// Rows that must fit in the height, in modules.
pub fn reserved_rows(no_text: bool) -> u32 {
    if no_text {
        MIN_BAR_ROWS
    } else {
        MIN_BAR_ROWS + TEXT_ROWS
    }
}

/// Resolve the geometry of `request`.
///
/// # Errors
///
/// [`BarcodeError::InvalidInput`] when `partial` or `textinfo` is missing,
/// the pattern has zero width, or the sizes cannot produce a drawable
/// barcode; [`BarcodeError::MalformedPartial`] for a bad pattern.
///
/// ```
/// use barcode_pcl::{RenderRequest, render::geometry};
///
/// let mut request = RenderRequest::new("2121", "0:12:A");
/// request.width = 60;
///
/// let geometry = geometry::resolve(&request).unwrap();
/// assert_eq!(geometry.scalef, 10.0);
/// assert_eq!(geometry.height, 800);
/// ```
pub fn resolve(request: &RenderRequest) -> Result<ResolvedGeometry, BarcodeError> {
    let partial = request.validate()?;
    resolve_partial(request, &partial)
}

/// Like [`resolve`], for a pattern the caller already parsed.
pub fn resolve_partial(
    request: &RenderRequest,
    partial: &Partial,
) -> Result<ResolvedGeometry, BarcodeError> {
    let barlen = partial.barlen();
    if barlen == 0 {
        return Err(BarcodeError::InvalidInput(
            "bar pattern has zero width".into(),
        ));
    }
    if !request.scalef.is_finite() || request.scalef < 0.0 {
        return Err(BarcodeError::InvalidInput(format!(
            "scale factor {} must be zero (automatic) or positive",
            request.scalef
        )));
    }
    let modules = f64::from(barlen);

    let mut width = i64::from(request.width);
    let mut xoff = i64::from(request.xoff);
    let mut scalef = request.scalef;

    if scalef == 0.0 {
        if width == 0 {
            width = i64::from(barlen);
        }
        scalef = width as f64 / modules;
    }

    let extent = modules * scalef;
    if extent + 1.0 > f64::from(u32::MAX) {
        return Err(BarcodeError::InvalidInput(format!(
            "scale factor {} makes the bars {} points wide",
            scalef, extent
        )));
    }

    if width == 0 {
        width = (extent + 1.0) as i64;
    }

    fit_width(&mut width, &mut xoff, extent);

    let mut height = i64::from(request.height);
    if height == 0 {
        height = (DEFAULT_HEIGHT * scalef) as i64;
    }

    let rows = reserved_rows(request.flags.no_text);
    let scaleg = height as f64 / f64::from(rows);
    if scaleg < scalef {
        let wid = (width as f64 * scaleg / scalef) as i64;
        debug!(
            "height {} below {} rows at scale {}, shrinking scale to {}",
            height, rows, scalef, scaleg
        );
        xoff += (width - wid) / 2;
        width = wid;
        scalef = scaleg;
        // truncating the width may leave it a fraction short of the pattern
        fit_width(&mut width, &mut xoff, modules * scalef);
    }

    if scalef <= 0.0 || height <= 0 {
        return Err(BarcodeError::InvalidInput(format!(
            "{}x{} at scale {} leaves no room for the bars",
            width, height, scalef
        )));
    }

    let geometry = ResolvedGeometry {
        barlen,
        scalef,
        width: to_units(width, "width")?,
        height: to_units(height, "height")?,
        xoff: to_units(xoff, "xoff")?,
        yoff: request.yoff,
    };
    debug!("resolved geometry {:?}", geometry);
    Ok(geometry)
}

/// Grow `width` to hold `extent`, keeping the content centred on the
/// requested box but never left of `xoff == 0`.
fn fit_width(width: &mut i64, xoff: &mut i64, extent: f64) {
    if (*width as f64) >= extent {
        return;
    }
    let wid = (extent + 1.0) as i64;
    debug!("width {} too small for {}, enlarging to {}", width, extent, wid);
    *xoff -= (wid - *width) / 2;
    *width = wid;
    if *xoff < 0 {
        *width += -*xoff;
        *xoff = 0;
    }
}

fn to_units(value: i64, field: &str) -> Result<u32, BarcodeError> {
    u32::try_from(value)
        .map_err(|_| BarcodeError::InvalidInput(format!("{} {} is out of range", field, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(partial: &str) -> RenderRequest {
        RenderRequest::new(partial, "0:12:A")
    }

    fn assert_invariants(geometry: &ResolvedGeometry) {
        assert!(geometry.extent() <= f64::from(geometry.width), "{:?}", geometry);
    }

    #[test]
    fn test_scale_from_width() {
        let mut req = request("2121");
        req.width = 60;
        let g = resolve(&req).unwrap();
        assert_eq!(g.barlen, 6);
        assert_eq!(g.scalef, 10.0);
        assert_eq!(g.width, 60);
        assert_eq!(g.height, 800);
        assert_eq!(g.xoff, 0);
        assert_invariants(&g);
    }

    #[test]
    fn test_all_defaults() {
        let g = resolve(&request("2121")).unwrap();
        assert_eq!(g.scalef, 1.0);
        assert_eq!(g.width, 6);
        assert_eq!(g.height, 80);
    }

    #[test]
    fn test_width_from_scale() {
        let mut req = request("2121");
        req.scalef = 2.5;
        let g = resolve(&req).unwrap();
        assert_eq!(g.width, 16); // 6 * 2.5 + 1
        assert_eq!(g.height, 200);
        assert_invariants(&g);
    }

    #[test]
    fn test_small_width_is_enlarged_and_centred() {
        let mut req = request("2121");
        req.scalef = 10.0;
        req.width = 40;
        req.xoff = 50;
        let g = resolve(&req).unwrap();
        assert_eq!(g.width, 61);
        assert_eq!(g.xoff, 40); // 50 - (61 - 40) / 2
        assert_invariants(&g);
    }

    #[test]
    fn test_enlarged_width_absorbs_negative_xoff() {
        let mut req = request("2121");
        req.scalef = 10.0;
        req.width = 40;
        req.xoff = 4;
        let g = resolve(&req).unwrap();
        // xoff would be 4 - 10 = -6
        assert_eq!(g.xoff, 0);
        assert_eq!(g.width, 67);
        assert_invariants(&g);
    }

    #[test]
    fn test_short_height_shrinks_scale() {
        let mut req = request("2121");
        req.width = 150;
        req.height = 30;
        req.xoff = 5;
        let g = resolve(&req).unwrap();
        // 15 rows at scale 25 would need 375
        assert_eq!(g.scalef, 2.0);
        assert_eq!(f64::from(g.height), f64::from(reserved_rows(false)) * g.scalef);
        assert_eq!(g.width, 12); // 150 * 2 / 25
        assert_eq!(g.xoff, 74); // 5 + (150 - 12) / 2
        assert_invariants(&g);
    }

    #[test]
    fn test_short_height_without_text() {
        let mut req = request("2121");
        req.width = 60;
        req.height = 10;
        req.flags.no_text = true;
        let g = resolve(&req).unwrap();
        assert_eq!(g.scalef, 2.0);
        assert_eq!(g.width, 12);
        assert_eq!(g.xoff, 24);
    }

    #[test]
    fn test_truncated_width_is_refitted() {
        // 100 / 7 does not divide evenly; after shrinking, truncation would
        // leave the width short of the pattern
        let mut req = request("1111111");
        req.width = 100;
        req.height = 20;
        let g = resolve(&req).unwrap();
        assert_invariants(&g);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let cases = [
            (60, 0, 0.0, 0),
            (0, 0, 2.5, 3),
            (40, 0, 10.0, 4),
            (150, 30, 0.0, 5),
            (100, 20, 0.0, 0),
            (101, 17, 0.0, 9),
        ];
        for (width, height, scalef, xoff) in cases {
            let mut req = request("9a1a2221213a1a");
            req.width = width;
            req.height = height;
            req.scalef = scalef;
            req.xoff = xoff;
            let first = resolve(&req).unwrap();
            assert_invariants(&first);
            let second = resolve(&req.with_geometry(&first)).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_zero_width_pattern() {
        assert!(matches!(
            resolve(&request("000")),
            Err(BarcodeError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_bad_scale() {
        let mut req = request("2121");
        req.scalef = -1.0;
        assert!(resolve(&req).is_err());
        req.scalef = f64::NAN;
        assert!(resolve(&req).is_err());
    }

    #[test]
    fn test_huge_scale_is_rejected() {
        let mut req = request("2121");
        req.scalef = 1e19;
        req.width = 1;
        assert!(matches!(resolve(&req), Err(BarcodeError::InvalidInput(_))));

        req.scalef = f64::MAX;
        req.width = 0;
        assert!(matches!(resolve(&req), Err(BarcodeError::InvalidInput(_))));
    }

    #[test]
    fn test_large_scale_shrinks_to_height() {
        let mut req = request("1");
        req.flags.no_text = true;
        req.scalef = 1e6;
        req.height = 5;
        let g = resolve(&req).unwrap();
        assert_invariants(&g);
    }

    #[test]
    fn test_missing_inputs() {
        assert!(matches!(
            resolve(&RenderRequest::new("2121", "")),
            Err(BarcodeError::InvalidInput(_))
        ));
        assert!(matches!(
            resolve(&RenderRequest::new("", "0:12:A")),
            Err(BarcodeError::InvalidInput(_))
        ));
    }
}
