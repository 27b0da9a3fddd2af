//! # Rendering Module
//!
//! Geometry resolution shared by all back-ends, and the back-ends themselves.
//!
//! ## Modules
//!
//! - [`geometry`]: Fill in unset sizes so the pattern fits its box
//! - [`pcl`]: HP PCL back-end
//!
//! ## Usage Example
//!
//! ```
//! use barcode_pcl::RenderRequest;
//! use barcode_pcl::render::{self, OutputFormat};
//!
//! let mut request = RenderRequest::new("2121", "0:12:A");
//! request.width = 60;
//!
//! let mut out = Vec::new();
//! let geometry = render::render(&request, OutputFormat::Pcl, &mut out).unwrap();
//! assert_eq!(geometry.scalef, 10.0);
//! assert!(out.starts_with(b"\x1b&a200H"));
//! ```

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::BarcodeError;
use crate::request::RenderRequest;

pub mod geometry;
pub mod pcl;

pub use geometry::ResolvedGeometry;

/// A barcode output back-end.
///
/// Back-ends receive an already-resolved geometry; they never compute
/// sizes themselves.
pub trait Renderer {
    /// Back-end name (lowercase, e.g., "pcl").
    fn name(&self) -> &'static str;

    /// Write the barcode to `sink`.
    ///
    /// Stops at the first failed write. Output written so far is left in
    /// the sink.
    fn render(
        &self,
        request: &RenderRequest,
        geometry: &ResolvedGeometry,
        sink: &mut dyn Write,
    ) -> Result<(), BarcodeError>;
}

/// Output format, selecting a [`Renderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Pcl,
}

impl OutputFormat {
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            Self::Pcl => Box::new(pcl::Pcl),
        }
    }
}

/// Get an output format by name.
pub fn by_name(name: &str) -> Option<OutputFormat> {
    match name.to_lowercase().as_str() {
        "pcl" => Some(OutputFormat::Pcl),
        _ => None,
    }
}

/// List available output formats.
pub fn list_formats() -> &'static [&'static str] {
    &["pcl"]
}

/// Resolve the geometry of `request` and render it in `format`.
///
/// Returns the geometry that was used.
pub fn render(
    request: &RenderRequest,
    format: OutputFormat,
    sink: &mut dyn Write,
) -> Result<ResolvedGeometry, BarcodeError> {
    let geometry = geometry::resolve(request)?;
    format.renderer().render(request, &geometry, sink)?;
    Ok(geometry)
}
