use serde::Serialize;
use stratus_core::Envelope;

use crate::codec::Codec;
use crate::error::Error;
use crate::transport::Transport;

/// Perform a one-off request/response against `uri`
///
/// Encodes `params` with `codec` and posts the body exactly once. Errors from
/// the codec and the transport are returned as raised.
pub async fn post<T, P, C>(
    transport: &T,
    uri: &str,
    params: &P,
    codec: &C,
) -> Result<Envelope, Error>
where
    T: Transport + ?Sized,
    P: Serialize + ?Sized,
    C: Codec,
{
    let body = codec.encode(params)?;
    let envelope = transport.post(uri, body).await?;
    Ok(envelope)
}
