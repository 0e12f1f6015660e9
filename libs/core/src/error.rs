use thiserror::Error;

/// Raised when a function name cannot be turned into a target address
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Function name is empty")]
    EmptyName,
}

/// Raised by a transport client when an exchange fails
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("{0} timeout exceeded")]
    Timeout(String),

    #[error("Server responded with status {status}: {message}")]
    Status {
        status: u16,
        code: Option<i64>,
        message: String,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid uri: {0}")]
    InvalidUri(String),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Missing configuration: {0} is not set")]
    MissingConfig(&'static str),
}

/// Raised when parameters cannot be encoded into a request body
#[derive(Error, Debug)]
#[error("Serialization error: {0}")]
pub struct SerializationError(#[from] serde_json::Error);

/// Every failure a remote function call can surface
///
/// Each variant carries the collaborator's error as it was raised.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Address(#[from] AddressError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Serialization(#[from] SerializationError),
}

pub type Result<T> = std::result::Result<T, Error>;
