use std::sync::Arc;

use stratus_core::Envelope;

use crate::error::Result;

pub mod http;

pub use self::http::{HttpTransport, HttpTransportBuilder};

/// Transport trait for posting a serialized body to an address
///
/// Implementations are shared: a single client may serve many handles and
/// concurrent calls, so `post` takes `&self`.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Post `body` to `uri` and return the parsed response object
    async fn post(&self, uri: &str, body: Vec<u8>) -> Result<Envelope>;
}

#[async_trait::async_trait]
impl<T: Transport + ?Sized> Transport for &T {
    async fn post(&self, uri: &str, body: Vec<u8>) -> Result<Envelope> {
        (**self).post(uri, body).await
    }
}

#[async_trait::async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn post(&self, uri: &str, body: Vec<u8>) -> Result<Envelope> {
        (**self).post(uri, body).await
    }
}

#[async_trait::async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn post(&self, uri: &str, body: Vec<u8>) -> Result<Envelope> {
        (**self).post(uri, body).await
    }
}
