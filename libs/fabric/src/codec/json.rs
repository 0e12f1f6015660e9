use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec::Codec;
use crate::error::SerializationError;

/// JSON text codec
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, SerializationError> {
        serde_json::to_vec(value).map_err(Into::into)
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, SerializationError> {
        serde_json::from_slice(bytes).map_err(Into::into)
    }
}
