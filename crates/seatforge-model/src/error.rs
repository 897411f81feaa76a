//! Error types for the model layer.
//!
//! The allocation engine never fails on bad input, so these errors only
//! come from two places: the codec (turning configs into bytes and back)
//! and the up-front validation / layout-editing helpers that callers run
//! before handing a config to the engine.

/// Errors produced while loading, validating, or editing an exam config.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Serializing a config failed.
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// The bytes are not a valid config (malformed JSON, missing
    /// required fields, wrong types).
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// A room index that does not exist in the config.
    #[error("room {0} not found")]
    RoomNotFound(usize),

    /// A batch index that does not exist in the config.
    #[error("batch {0} not found")]
    BatchNotFound(usize),

    /// A room whose dimensions cannot hold any seat.
    #[error("room {room} is invalid: {reason}")]
    InvalidRoom { room: usize, reason: String },

    /// A seat coordinate outside the room grid (coordinates are 1-indexed).
    #[error("seat ({row}, {col}) is outside room {room}")]
    SeatOutOfBounds { room: usize, row: u32, col: u32 },

    /// A zone references a batch index that is not in the batch list.
    #[error("room {room} zones seats for unknown batch index {batch}")]
    UnknownBatch { room: usize, batch: usize },

    /// Two batches share the same id.
    #[error("duplicate batch id {0:?}")]
    DuplicateBatchId(String),
}
