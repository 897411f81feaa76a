//! Error types for the preview layer.

use seatforge_model::ModelError;

/// Errors returned by a [`PreviewHandle`](crate::PreviewHandle).
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// The edit was rejected; the configuration is unchanged.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The actor has shut down or its command channel is closed.
    #[error("preview is unavailable")]
    Unavailable,
}
