pub use stratus_core::error::{Error, SerializationError, TransportError};

pub type Result<T> = std::result::Result<T, TransportError>;
