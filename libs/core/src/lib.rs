//! Stratus Core - Shared types for remote function calls
//!
//! Holds the error taxonomy, the parameter mapping sent to a function and the
//! response envelope its result is read from.

pub mod envelope;
pub mod error;
pub mod value;

pub use envelope::Envelope;
pub use error::{AddressError, Error, Result, SerializationError, TransportError};
pub use value::{Params, Value};
