//! # barcode-pcl - Barcode Output for PCL Printers
//!
//! barcode-pcl turns an already-encoded linear barcode into HP PCL commands
//! for LaserJet-class printers. It provides:
//!
//! - **Input parsing**: the `partial` run-length bar pattern and the
//!   `textinfo` label records produced by symbol encoders
//! - **Geometry**: scale, size and offset resolution so the barcode fits
//!   the requested box
//! - **Protocol implementation**: PCL cursor, rectangle and font commands
//!
//! Symbol encoding (EAN-13, Code 39, ...) happens elsewhere; this crate
//! only consumes its output.
//!
//! ## Quick Start
//!
//! ```
//! use barcode_pcl::{RenderRequest, render::{self, OutputFormat}};
//!
//! let mut request = RenderRequest::new("9a1a2221213a1a", "0:12:5 10:12:0");
//! request.width = 200;
//!
//! let mut out = Vec::new();
//! render::render(&request, OutputFormat::Pcl, &mut out)?;
//! assert!(!out.is_empty());
//!
//! # Ok::<(), barcode_pcl::BarcodeError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`encoding`] | `partial` and `textinfo` parsing |
//! | [`render`] | Geometry resolution and back-ends |
//! | [`ir`] | Inspectable op list compiled to bytes |
//! | [`protocol`] | PCL command builders |
//! | [`printer`] | Device classes and fonts |
//! | [`error`] | Error types |
//!
//! ## Threading
//!
//! Rendering is synchronous and borrows the request immutably; a request
//! can be rendered from several threads at once.

pub mod encoding;
pub mod error;
pub mod ir;
pub mod printer;
pub mod protocol;
pub mod render;
pub mod request;

// Re-exports for convenience
pub use error::BarcodeError;
pub use printer::DeviceClass;
pub use render::{OutputFormat, ResolvedGeometry};
pub use request::{RenderFlags, RenderRequest};
