use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use hyper::{Method, Request, StatusCode, Uri};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use stratus_core::Envelope;

use crate::codec::{Codec, JsonCodec};
use crate::error::{Result, TransportError};
use crate::transport::Transport;

const JSON: &str = "application/json";

pub const APPLICATION_ID_HEADER: &str = "x-parse-application-id";
pub const REST_API_KEY_HEADER: &str = "x-parse-rest-api-key";
pub const MASTER_KEY_HEADER: &str = "x-parse-master-key";
pub const SESSION_TOKEN_HEADER: &str = "x-parse-session-token";

pub const SERVER_URL_ENV: &str = "PARSE_SERVER_URL";
pub const APPLICATION_ID_ENV: &str = "PARSE_APPLICATION_ID";
pub const REST_API_KEY_ENV: &str = "PARSE_REST_API_KEY";
pub const MASTER_KEY_ENV: &str = "PARSE_MASTER_KEY";

pub const DEFAULT_BASE_URL: &str = "http://localhost:1337";

/// HTTP/1.1 transport posting JSON bodies to a fixed server
///
/// Connections are pooled by the underlying client, so one instance should
/// be shared across handles.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client<HttpConnector, Full<Bytes>>,
    base_url: String,
    headers: HeaderMap,
    request_timeout: Option<Duration>,
}

impl HttpTransport {
    /// Create a transport for `base_url` with no credentials and no timeouts
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a builder for configuring the transport
    pub fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::new()
    }

    /// Server prefix every posted uri is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers sent with every request
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn target(&self, uri: &str) -> Result<Uri> {
        format!("{}{}", self.base_url, uri)
            .parse()
            .map_err(|e: hyper::http::uri::InvalidUri| TransportError::InvalidUri(e.to_string()))
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn post(&self, uri: &str, body: Vec<u8>) -> Result<Envelope> {
        let target = self.target(uri)?;
        tracing::trace!(uri = %target, bytes = body.len(), "posting request");

        let mut request = Request::builder()
            .method(Method::POST)
            .uri(target)
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
            .body(Full::new(Bytes::from(body)))
            .map_err(|e| TransportError::Http(e.to_string()))?;
        let headers = request.headers_mut();
        for (name, value) in &self.headers {
            headers.insert(name.clone(), value.clone());
        }

        let exchange = async {
            let response = self.client.request(request).await.map_err(classify)?;
            let status = response.status();
            let bytes = response
                .into_body()
                .collect()
                .await
                .map_err(|e| TransportError::Http(e.to_string()))?
                .to_bytes();

            Ok::<(StatusCode, Bytes), TransportError>((status, bytes))
        };

        let (status, bytes) = if let Some(timeout) = self.request_timeout {
            tokio::time::timeout(timeout, exchange)
                .await
                .map_err(|_| TransportError::Timeout("Request".to_string()))??
        } else {
            exchange.await?
        };

        tracing::trace!(status = status.as_u16(), bytes = bytes.len(), "received response");

        if !status.is_success() {
            return Err(status_error(status, &bytes));
        }

        JsonCodec
            .decode(&bytes)
            .map_err(|e| TransportError::MalformedResponse(e.to_string()))
    }
}

/// Build the error for a non-success answer, preferring the server's own
/// `{"code", "error"}` body over the raw text
fn status_error(status: StatusCode, body: &[u8]) -> TransportError {
    let failure: Option<Envelope> = JsonCodec.decode(body).ok();
    let code = failure.as_ref().and_then(Envelope::error_code);
    let message = failure
        .as_ref()
        .and_then(Envelope::error_message)
        .map(str::to_owned)
        .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned());

    tracing::warn!(status = status.as_u16(), ?code, error = %message, "request failed");

    TransportError::Status {
        status: status.as_u16(),
        code,
        message,
    }
}

fn classify(err: hyper_util::client::legacy::Error) -> TransportError {
    let timed_out = std::iter::successors(err.source(), |&e| e.source())
        .filter_map(|e| e.downcast_ref::<std::io::Error>())
        .any(|e| e.kind() == std::io::ErrorKind::TimedOut);

    if timed_out {
        TransportError::Timeout("Connect".to_string())
    } else if err.is_connect() {
        TransportError::Connect(describe(&err))
    } else {
        TransportError::Http(describe(&err))
    }
}

// hyper's top-level messages are generic; the cause sits further down the chain
fn describe(err: &(dyn StdError + 'static)) -> String {
    std::iter::successors(Some(err), |&e| e.source())
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(": ")
}

/// Builder for configuring HTTP transport
#[derive(Default)]
pub struct HttpTransportBuilder {
    base_url: Option<String>,
    headers: Vec<(String, String)>,
    connect_timeout: Option<Duration>,
    request_timeout: Option<Duration>,
}

// Header values carry credentials
impl fmt::Debug for HttpTransportBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(name, _)| (name.as_str(), "<redacted>"))
            .collect();

        f.debug_struct("HttpTransportBuilder")
            .field("base_url", &self.base_url)
            .field("headers", &headers)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl HttpTransportBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a builder from `PARSE_SERVER_URL`, `PARSE_APPLICATION_ID`,
    /// `PARSE_REST_API_KEY` and `PARSE_MASTER_KEY`
    ///
    /// `PARSE_APPLICATION_ID` is required; the other variables are skipped
    /// when unset.
    pub fn from_env() -> Result<Self> {
        let id = std::env::var(APPLICATION_ID_ENV)
            .map_err(|_| TransportError::MissingConfig(APPLICATION_ID_ENV))?;

        let mut builder = Self::new().application_id(id);
        if let Ok(url) = std::env::var(SERVER_URL_ENV) {
            builder = builder.base_url(url);
        }
        if let Ok(key) = std::env::var(REST_API_KEY_ENV) {
            builder = builder.rest_api_key(key);
        }
        if let Ok(key) = std::env::var(MASTER_KEY_ENV) {
            builder = builder.master_key(key);
        }
        Ok(builder)
    }

    /// Set the server prefix, e.g. `http://localhost:1337`
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the application id sent with every request
    pub fn application_id(self, id: impl Into<String>) -> Self {
        self.header(APPLICATION_ID_HEADER, id)
    }

    /// Set the REST API key sent with every request
    pub fn rest_api_key(self, key: impl Into<String>) -> Self {
        self.header(REST_API_KEY_HEADER, key)
    }

    /// Set the master key sent with every request
    pub fn master_key(self, key: impl Into<String>) -> Self {
        self.header(MASTER_KEY_HEADER, key)
    }

    /// Set the session token sent with every request
    pub fn session_token(self, token: impl Into<String>) -> Self {
        self.header(SESSION_TOKEN_HEADER, token)
    }

    /// Add an arbitrary header, replacing an earlier value for the same name
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
        self
    }

    /// Set the connection timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the timeout for a whole request/response exchange
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Validate the settings and create the transport
    pub fn build(self) -> Result<HttpTransport> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let parsed: Uri = base_url
            .parse()
            .map_err(|e: hyper::http::uri::InvalidUri| TransportError::InvalidUri(e.to_string()))?;
        if parsed.scheme_str() != Some("http") {
            return Err(TransportError::InvalidUri(format!(
                "Unsupported base url {base_url:?}, expected an http:// address"
            )));
        }

        let mut headers = HeaderMap::new();
        for (name, value) in self.headers {
            let name = HeaderName::try_from(name.as_str())
                .map_err(|e| TransportError::InvalidHeader(format!("{name}: {e}")))?;
            let mut value = HeaderValue::try_from(value)
                .map_err(|e| TransportError::InvalidHeader(format!("{name}: {e}")))?;
            value.set_sensitive(true);
            headers.insert(name, value);
        }

        let mut connector = HttpConnector::new();
        connector.set_connect_timeout(self.connect_timeout);
        let client = Client::builder(TokioExecutor::new()).build(connector);

        Ok(HttpTransport {
            client,
            base_url,
            headers,
            request_timeout: self.request_timeout,
        })
    }
}
