//! # Error Types
//!
//! This module defines error types used throughout the barcode-pcl library.

use thiserror::Error;

/// Main error type for barcode-pcl operations
#[derive(Debug, Error)]
pub enum BarcodeError {
    /// A mandatory input is missing or unusable (empty partial/textinfo,
    /// zero-length bar pattern, non-finite scale factor)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The partial encoding contains a character outside its alphabet
    #[error("Malformed partial encoding: unexpected '{token}' at position {position}")]
    MalformedPartial { position: usize, token: char },

    /// Request file could not be decoded
    #[error("Invalid request JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while writing to the sink
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BarcodeError {
    /// errno-style code for callers that report failures as integers.
    pub fn errno(&self) -> i32 {
        match self {
            Self::InvalidInput(_) | Self::MalformedPartial { .. } | Self::Json(_) => libc::EINVAL,
            Self::Io(e) => e.raw_os_error().unwrap_or(libc::EIO),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_map_to_einval() {
        let err = BarcodeError::InvalidInput("partial is empty".into());
        assert_eq!(err.errno(), libc::EINVAL);

        let err = BarcodeError::MalformedPartial {
            position: 3,
            token: 'Z',
        };
        assert_eq!(err.errno(), libc::EINVAL);
        assert_eq!(
            err.to_string(),
            "Malformed partial encoding: unexpected 'Z' at position 3"
        );
    }

    #[test]
    fn test_io_errors_keep_os_code() {
        let err = BarcodeError::from(std::io::Error::from_raw_os_error(libc::ENOSPC));
        assert_eq!(err.errno(), libc::ENOSPC);

        let err = BarcodeError::from(std::io::Error::other("sink closed"));
        assert_eq!(err.errno(), libc::EIO);
    }
}
