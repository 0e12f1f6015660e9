use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::SerializationError;

pub mod json;

pub use self::json::JsonCodec;

/// Codec trait for serializing request bodies and deserializing responses
pub trait Codec: Send + Sync {
    /// Encode a value into bytes
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, SerializationError>;

    /// Decode bytes into a value
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, SerializationError>;
}
