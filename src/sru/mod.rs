//! SRU (Search/Retrieve via URL) client: query normalization, request URLs and a single-shot fetch.

pub mod query;
pub mod request;

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

pub use query::normalize;
pub use request::{SruRequest, build_request_url};

const MAX_RESPONSE_BYTES: usize = 10_000_000;

#[derive(Debug, thiserror::Error)]
pub enum SruError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("server returned status {0}")]
    Status(u16),

    #[error("response too large (>{} bytes)", MAX_RESPONSE_BYTES)]
    TooLarge,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SruError {
    /// Process exit code for this failure.
    ///
    /// A server status is passed through unchanged; the OS may keep only its
    /// low 8 bits.
    pub fn exit_code(&self) -> i32 {
        match self {
            SruError::Status(code) => i32::from(*code),
            _ => 1,
        }
    }
}

#[derive(Clone)]
pub struct SruClient {
    http: Client,
    timeout: Option<Duration>,
}

impl SruClient {
    /// `timeout: None` blocks until the server answers or the connection drops.
    pub fn new(http: Client, timeout: Option<Duration>) -> Self {
        Self { http, timeout }
    }

    /// Issue one GET and return the raw body. No retries.
    pub async fn fetch(&self, url: &Url) -> Result<Vec<u8>, SruError> {
        debug!(url = %url, "sending SRU request");
        let mut request = self
            .http
            .get(url.as_str())
            .header("User-Agent", crate::USER_AGENT);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let mut response = request.send().await.map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "SRU server returned error status");
            return Err(SruError::Status(status.as_u16()));
        }

        if let Some(len) = response.content_length()
            && len as usize > MAX_RESPONSE_BYTES
        {
            return Err(SruError::TooLarge);
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(|e| self.classify(e))? {
            body.extend_from_slice(&chunk);
            if body.len() > MAX_RESPONSE_BYTES {
                return Err(SruError::TooLarge);
            }
        }

        debug!(bytes = body.len(), "SRU response received");
        Ok(body)
    }

    fn classify(&self, e: reqwest::Error) -> SruError {
        match self.timeout {
            Some(timeout) if e.is_timeout() => SruError::Timeout(timeout),
            _ => SruError::Http(e),
        }
    }
}
