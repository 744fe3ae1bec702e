//! HTTP transport seam and envelope contract checks

use crate::utils::error::ResolveError;
use async_trait::async_trait;
use tracing::debug;
use url::Url;

/// Exact MIME type the upstream must answer with.
pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

/// One raw transport response. Lives for the duration of a single fetch and
/// is never retained past it.
#[derive(Debug, Clone)]
pub struct Envelope {
    pub status: u16,
    pub status_text: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// Core trait for HTTP transports
///
/// Isolates the resolver from network policy: timeouts, retries, connection
/// pooling, proxies and TLS all live behind this seam, never in the
/// pipeline. Implementations must be safe for concurrent use.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a single GET and return the raw response.
    async fn get(&self, url: &Url) -> Result<Envelope, ResolveError>;
}

/// Production transport over a shared `reqwest` client.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Wrap an existing client, keeping whatever timeout/proxy policy it
    /// was built with.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<Envelope, ResolveError> {
        let response = self.client.get(url.as_str()).send().await?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?.to_vec();

        Ok(Envelope {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("").to_string(),
            content_type,
            body,
        })
    }
}

/// Fetch the raw envelope body for `url`, enforcing transport-level success.
///
/// A non-2xx status or a content type other than the exact form MIME type
/// fails without the body ever being interpreted. No retries here: the
/// upstream is rate-sensitive, so retry policy belongs to the caller's
/// transport.
pub async fn fetch(transport: &dyn Transport, url: &Url) -> Result<Vec<u8>, ResolveError> {
    debug!("fetching video info from {}", url);
    let envelope = transport.get(url).await?;

    if !(200..300).contains(&envelope.status) {
        return Err(ResolveError::UpstreamStatus {
            code: envelope.status,
            status: envelope.status_text,
        });
    }

    match envelope.content_type.as_deref() {
        Some(CONTENT_TYPE_FORM) => Ok(envelope.body),
        other => Err(ResolveError::UnexpectedContentType(
            other.unwrap_or("").to_string(),
        )),
    }
}
