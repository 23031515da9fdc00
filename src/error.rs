//! Error type for hex conversion and viewing.

use std::path::PathBuf;

/// Errors that can occur while encoding, decoding or viewing hex images.
///
/// Individual malformed pixel lines are not errors: the decoder skips them
/// and counts them in its report.
#[derive(Debug, thiserror::Error)]
pub enum HexError {
    #[error("Failed to load image '{}': {source}", .path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to save image '{}': {source}", .path.display())]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Cannot parse size header '{line}' (expected WIDTHxHEIGHT)")]
    HeaderParse { line: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HexError {
    /// Map an I/O error on `path`, turning `NotFound` into `FileNotFound`.
    pub fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            HexError::FileNotFound(path.into())
        } else {
            HexError::Io(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_file_not_found() {
        let err = HexError::from_io(
            "/tmp/missing.hex",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(matches!(err, HexError::FileNotFound(_)));
        assert!(format!("{}", err).contains("missing.hex"));
    }

    #[test]
    fn test_other_io_kinds_stay_io() {
        let err = HexError::from_io(
            "x",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, HexError::Io(_)));
    }

    #[test]
    fn test_header_parse_display() {
        let err = HexError::HeaderParse {
            line: "// Size: tenxten".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("tenxten"));
        assert!(msg.contains("WIDTHxHEIGHT"));
    }
}
