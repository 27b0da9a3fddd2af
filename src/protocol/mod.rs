//! # PCL Protocol Implementation
//!
//! This module provides low-level command builders for the subset of HP PCL
//! used to draw barcodes on LaserJet-class printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Cursor positioning, rectangle fill, font selection
//!
//! ## Usage Example
//!
//! ```
//! use barcode_pcl::protocol::commands;
//!
//! // One 2pt wide, 50pt tall bar at (10pt, 10pt)
//! let mut data = Vec::new();
//! data.extend(commands::cursor_x(10.0));
//! data.extend(commands::cursor_y(10.0));
//! data.extend(commands::rect_width(2.0));
//! data.extend(commands::rect_height(50.0));
//! data.extend(commands::fill_black());
//!
//! assert_eq!(data, b"\x1b&a100H\x1b&a100V\x1b*c20H\x1b*c500V\x1b*c0P".to_vec());
//! ```

pub mod commands;
