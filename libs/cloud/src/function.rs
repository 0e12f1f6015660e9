use serde::Serialize;
use stratus_core::{AddressError, Error, Params, Value};
use stratus_fabric::codec::{Codec, JsonCodec};
use stratus_fabric::request;
use stratus_fabric::transport::Transport;

use crate::protocol;

/// Bound reference to one server-side cloud function
///
/// Borrows its transport; every call is a single independent request with no
/// retry or caching.
pub struct RemoteFunctionHandle<'a, T: ?Sized, C = JsonCodec> {
    name: String,
    client: &'a T,
    codec: C,
}

impl<'a, T: Transport + ?Sized> RemoteFunctionHandle<'a, T> {
    /// Bind `client` to the function `name`, serializing parameters as JSON
    pub fn create(client: &'a T, name: impl Into<String>) -> Self {
        Self::with_codec(client, name, JsonCodec)
    }
}

impl<'a, T: Transport + ?Sized, C: Codec> RemoteFunctionHandle<'a, T, C> {
    /// Bind `client` to the function `name` with an explicit serializer
    pub fn with_codec(client: &'a T, name: impl Into<String>, codec: C) -> Self {
        Self {
            name: name.into(),
            client,
            codec,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Point the handle at another function
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn client(&self) -> &'a T {
        self.client
    }

    /// Address of the bound function
    pub fn uri(&self) -> Result<String, AddressError> {
        protocol::cloud_function_uri(&self.name)
    }

    /// Invoke the function with no parameters
    pub async fn call(&self) -> Result<Option<Value>, Error> {
        self.call_with(&Params::new()).await
    }

    /// Invoke the function and return the response's `result` field
    ///
    /// `Ok(None)` means the server answered without a `result` field.
    pub async fn call_with<P>(&self, params: &P) -> Result<Option<Value>, Error>
    where
        P: Serialize + ?Sized,
    {
        let uri = self.uri()?;
        tracing::debug!(function = %self.name, %uri, "invoking remote function");

        let envelope = request::post(self.client, &uri, params, &self.codec).await?;
        Ok(envelope.into_result())
    }
}
