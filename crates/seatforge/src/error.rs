//! Unified error type for Seatforge.

use seatforge_model::ModelError;
use seatforge_preview::PreviewError;

/// Top-level error that wraps the crate-specific errors.
///
/// The `#[from]` attributes let `?` convert sub-crate errors directly.
/// The engine itself never fails, so it has no variant here.
#[derive(Debug, thiserror::Error)]
pub enum SeatforgeError {
    /// Loading, validating, or editing a configuration failed.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The live preview rejected a request or has shut down.
    #[error(transparent)]
    Preview(#[from] PreviewError),

    /// Reading or writing a configuration file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_model_error() {
        let err: SeatforgeError = ModelError::RoomNotFound(4).into();
        assert!(matches!(err, SeatforgeError::Model(_)));
        assert!(err.to_string().contains("room 4"));
    }

    #[test]
    fn test_from_preview_error() {
        let err: SeatforgeError = PreviewError::Unavailable.into();
        assert!(matches!(err, SeatforgeError::Preview(_)));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "exam.json");
        let err: SeatforgeError = io.into();
        assert!(err.to_string().contains("exam.json"));
    }
}
