//! Codec trait and implementations for reading and writing exam configs.
//!
//! The engine never touches storage, so anything that arrives from the
//! outside (an HTTP body, a file on disk, a UI state store) goes through a
//! [`Codec`] first. [`JsonCodec`] is the only implementation today.

use serde::{de::DeserializeOwned, Serialize};

use crate::ModelError;

/// Converts model values to bytes and back.
///
/// ## Trait bounds
///
/// - `Send + Sync` lets one codec be shared by a preview actor and the
///   code feeding it, whichever Tokio worker thread each runs on.
/// - `'static` means the codec borrows nothing, so it can live inside a
///   long-running task.
///
/// Both methods are generic over the value, not the codec: the same
/// `JsonCodec` reads an [`ExamConfig`](crate::ExamConfig) and writes a
/// seating plan. `decode` asks for `DeserializeOwned` so the decoded value
/// owns its strings and the input buffer can be dropped straight away.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns `ModelError::Encode` if the value cannot be represented
    /// in this format.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ModelError>;

    /// Deserializes bytes back into a value.
    ///
    /// # Errors
    /// Returns `ModelError::Decode` if the bytes are malformed or don't
    /// match the expected shape.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ModelError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] backed by `serde_json`.
///
/// Behind the `json` feature (enabled by default).
///
/// ```rust
/// use seatforge_model::{Codec, ExamConfig, JsonCodec};
///
/// let codec = JsonCodec;
/// let config: ExamConfig = codec
///     .decode(br#"{ "batches": [], "rooms": [{ "rows": 2, "cols": 3 }] }"#)
///     .unwrap();
/// assert_eq!(config.rooms[0].raw_capacity(), 6);
///
/// let bytes = codec.encode(&config).unwrap();
/// let again: ExamConfig = codec.decode(&bytes).unwrap();
/// assert_eq!(config, again);
/// ```
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ModelError> {
        serde_json::to_vec(value).map_err(ModelError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ModelError> {
        serde_json::from_slice(data).map_err(ModelError::Decode)
    }
}
