//! # Printer Configuration
//!
//! PCL printers differ in which scalable typefaces they carry in ROM. The
//! barcode labels only need one proportional sans-serif face, so a device
//! class maps to exactly one typeface ID.
//!
//! ## Supported Device Classes
//!
//! | Class | Typical models | Typeface | ID |
//! |-------|----------------|----------|----|
//! | LaserJet | LaserJet 4/5/6, Color LaserJet, DeskJet | Arial | 16602 |
//! | PCL III | LaserJet III series, 4L, 5L | Univers | 4148 |
//!
//! Older LaserJet II units only have the non-scalable Line Printer font
//! (ID 0) and are not supported.
//!
//! ## Usage
//!
//! ```
//! use barcode_pcl::printer::DeviceClass;
//!
//! assert_eq!(DeviceClass::default().typeface_id(), 16602);
//! assert_eq!(DeviceClass::Pcl3.typeface_id(), 4148);
//! ```

use serde::{Deserialize, Serialize};

/// Typeface family ID for Arial.
pub const ARIAL: u16 = 16602;

/// Typeface family ID for Univers.
pub const UNIVERS: u16 = 4148;

/// Target printer class, used to pick the label typeface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    /// LaserJet 4 and later (default).
    #[default]
    Laserjet,
    /// LaserJet III class devices.
    Pcl3,
}

impl DeviceClass {
    /// PCL typeface family ID used for human-readable text.
    pub fn typeface_id(self) -> u16 {
        match self {
            Self::Laserjet => ARIAL,
            Self::Pcl3 => UNIVERS,
        }
    }

    /// Human-readable typeface name.
    pub fn typeface_name(self) -> &'static str {
        match self {
            Self::Laserjet => "Arial",
            Self::Pcl3 => "Univers",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_table() {
        assert_eq!(DeviceClass::Laserjet.typeface_id(), 16602);
        assert_eq!(DeviceClass::Pcl3.typeface_id(), 4148);
        assert_eq!(DeviceClass::Laserjet.typeface_name(), "Arial");
        assert_eq!(DeviceClass::Pcl3.typeface_name(), "Univers");
    }

    #[test]
    fn test_serde_names() {
        let class: DeviceClass = serde_json::from_str("\"pcl3\"").unwrap();
        assert_eq!(class, DeviceClass::Pcl3);
        assert_eq!(
            serde_json::to_string(&DeviceClass::Laserjet).unwrap(),
            "\"laserjet\""
        );
    }
}
