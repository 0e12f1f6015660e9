//! Stratus Cloud - Remote cloud function calls
//!
//! Binds a function name to a [`Transport`](stratus_fabric::Transport) and
//! invokes it, returning the `result` field of the server's response.
//!
//! # Example
//!
//! ```no_run
//! use stratus_cloud::RemoteFunctionHandle;
//! use stratus_core::{Params, Value};
//! use stratus_fabric::HttpTransport;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = HttpTransport::builder()
//!     .base_url("http://localhost:1337")
//!     .application_id("my-app")
//!     .rest_api_key("my-key")
//!     .build()?;
//!
//! let welcome = RemoteFunctionHandle::create(&transport, "sendWelcomeEmail");
//! let mut params = Params::new();
//! params.insert("userId".to_string(), Value::from(42));
//! let result = welcome.call_with(&params).await?;
//! println!("{result:?}");
//! # Ok(())
//! # }
//! ```

pub mod function;
pub mod protocol;

pub use function::RemoteFunctionHandle;
