//! Stratus Fabric - Transport and codec layer
//!
//! Provides the transport abstraction used to post serialized parameters to a
//! remote endpoint, an HTTP implementation of it, and the JSON codec.
//!
//! # Example
//!
//! ```no_run
//! use stratus_fabric::{codec::JsonCodec, request, HttpTransport};
//! use stratus_core::Params;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = HttpTransport::builder()
//!     .base_url("http://localhost:1337")
//!     .application_id("my-app")
//!     .build()?;
//!
//! let envelope = request::post(&transport, "/1/functions/hello", &Params::new(), &JsonCodec).await?;
//! println!("{:?}", envelope.result());
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod error;
pub mod request;
pub mod transport;

// Re-exports for convenience
pub use error::{Error, Result};
pub use transport::{HttpTransport, HttpTransportBuilder, Transport};
