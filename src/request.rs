//! # Render Requests
//!
//! A [`RenderRequest`] is everything a back-end needs: the two encoded strings
//! produced by a symbol encoder, the requested size, and output flags.
//! Sizes left at `0` are filled in by [`crate::render::geometry::resolve`];
//! the request itself is never modified.
//!
//! Requests deserialize from JSON. Only `partial` and `textinfo` are needed:
//!
//! ```
//! use barcode_pcl::RenderRequest;
//!
//! let json = r#"{
//!     "partial": "9a1a2221213a1a",
//!     "textinfo": "0:12:5 10:12:0",
//!     "width": 200,
//!     "flags": { "device": "pcl3" }
//! }"#;
//!
//! let request: RenderRequest = serde_json::from_str(json).unwrap();
//! assert_eq!(request.width, 200);
//! assert_eq!(request.height, 0);
//! assert!(!request.flags.no_text);
//! ```

use serde::{Deserialize, Serialize};

use crate::encoding::Partial;
use crate::error::BarcodeError;
use crate::printer::DeviceClass;
use crate::render::geometry::ResolvedGeometry;

/// Output options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderFlags {
    /// Suppress human-readable text; bars use the full height.
    #[serde(default)]
    pub no_text: bool,
    /// Printer class, selects the label typeface.
    #[serde(default)]
    pub device: DeviceClass,
}

/// A barcode to render, in points (1/72 inch).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderRequest {
    /// Run-length bar pattern.
    #[serde(default)]
    pub partial: String,
    /// Label placement records.
    #[serde(default)]
    pub textinfo: String,
    /// Total width; `0` = derive from the pattern and scale.
    #[serde(default)]
    pub width: u32,
    /// Total height; `0` = 80 units at the resolved scale.
    #[serde(default)]
    pub height: u32,
    /// Points per module; `0.0` = derive from `width`.
    #[serde(default)]
    pub scalef: f64,
    #[serde(default)]
    pub xoff: u32,
    #[serde(default)]
    pub yoff: u32,
    #[serde(default)]
    pub margin: u32,
    #[serde(default)]
    pub flags: RenderFlags,
}

impl RenderRequest {
    pub fn new(partial: impl Into<String>, textinfo: impl Into<String>) -> Self {
        Self {
            partial: partial.into(),
            textinfo: textinfo.into(),
            ..Default::default()
        }
    }

    /// Check the mandatory inputs and parse the bar pattern.
    ///
    /// Both strings are required, even when text is suppressed.
    pub fn validate(&self) -> Result<Partial, BarcodeError> {
        if self.partial.is_empty() {
            return Err(BarcodeError::InvalidInput("partial is missing".into()));
        }
        if self.textinfo.is_empty() {
            return Err(BarcodeError::InvalidInput("textinfo is missing".into()));
        }
        Partial::parse(&self.partial)
    }

    /// A copy of this request with every sizing field pinned to `geometry`.
    pub fn with_geometry(&self, geometry: &ResolvedGeometry) -> Self {
        Self {
            width: geometry.width,
            height: geometry.height,
            scalef: geometry.scalef,
            xoff: geometry.xoff,
            yoff: geometry.yoff,
            ..self.clone()
        }
    }
}
