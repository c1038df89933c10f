//! A single configurable HTTP request.
//!
//! Build one with a verb constructor, adjust it with setters, then call one of
//! the terminal operations: `read` (body as text) or `download` (body to a
//! file). Every terminal call is an independent round trip and refreshes
//! `response_code` / `response_message`.

mod download;
mod read;
mod sink;

use crate::auth::Credentials;
use crate::config::HttpreqConfig;
use crate::error::{Error, Result};
use crate::method::Method;
use crate::progress::{ProgressListener, ProgressTracker};
use crate::transport::{CurlTransport, Outgoing, Transport};
use sink::{CaptureSink, ResponseStatus};
use std::fmt;
use std::io::Write;
use std::time::Duration;
use url::Url;

/// Connect and read timeout used unless `set_timeout` is called.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Receive buffer size for a transfer.
pub const READ_BUFFER_SIZE: usize = 4096;

pub struct Request<T = CurlTransport> {
    url: Url,
    method: Method,
    body: Option<String>,
    credentials: Credentials,
    content_type: Option<String>,
    timeout: Duration,
    status: ResponseStatus,
    progress: Option<Box<dyn ProgressListener + Send>>,
    transport: T,
}

impl Request<CurlTransport> {
    pub fn get(uri: &str) -> Result<Self> {
        Self::with_transport(Method::Get, uri, None, CurlTransport)
    }

    pub fn delete(uri: &str) -> Result<Self> {
        Self::with_transport(Method::Delete, uri, None, CurlTransport)
    }

    pub fn post(uri: &str, data: impl Into<String>) -> Result<Self> {
        Self::with_transport(Method::Post, uri, Some(data.into()), CurlTransport)
    }

    pub fn put(uri: &str, data: impl Into<String>) -> Result<Self> {
        Self::with_transport(Method::Put, uri, Some(data.into()), CurlTransport)
    }

    pub fn patch(uri: &str, data: impl Into<String>) -> Result<Self> {
        Self::with_transport(Method::Patch, uri, Some(data.into()), CurlTransport)
    }
}

impl<T: Transport> Request<T> {
    /// Create a request that runs over `transport`.
    ///
    /// The body is kept only for POST, PUT and PATCH; those always send one
    /// (empty when `body` is `None`). Fails before any network activity when
    /// `uri` is not an absolute http(s) URL.
    pub fn with_transport(
        method: Method,
        uri: &str,
        body: Option<String>,
        transport: T,
    ) -> Result<Self> {
        let url = parse_url(uri)?;
        let body = if method.has_body() {
            Some(body.unwrap_or_default())
        } else {
            None
        };
        Ok(Self {
            url,
            method,
            body,
            credentials: Credentials::default(),
            content_type: None,
            timeout: DEFAULT_TIMEOUT,
            status: ResponseStatus::default(),
            progress: None,
            transport,
        })
    }

    /// Authenticate with `Authorization: token <token>`. Takes precedence over basic auth.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.credentials.set_token(token);
    }

    /// Authenticate with HTTP Basic credentials.
    pub fn set_basic_auth(&mut self, username: impl Into<String>, password: impl Into<String>) {
        self.credentials.set_basic(username, password);
    }

    /// Forget both the token and the basic credentials.
    pub fn clear_authentication(&mut self) {
        self.credentials.clear();
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    pub fn set_content_type(&mut self, content_type: impl Into<String>) {
        self.content_type = Some(content_type.into());
    }

    pub fn set_progress_listener(&mut self, listener: impl ProgressListener + Send + 'static) {
        self.progress = Some(Box::new(listener));
    }

    /// Copy defaults from the config file: timeout, content type and credentials.
    pub fn apply_config(&mut self, cfg: &HttpreqConfig) {
        self.timeout = Duration::from_millis(cfg.timeout_ms);
        if let Some(ct) = &cfg.content_type {
            self.content_type = Some(ct.clone());
        }
        if let Some(auth) = &cfg.auth {
            if let (Some(user), Some(pass)) = (&auth.username, &auth.password) {
                self.credentials.set_basic(user.clone(), pass.clone());
            }
            if let Some(token) = &auth.token {
                self.credentials.set_token(token.clone());
            }
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `Authorization` header value the next terminal call will send.
    pub fn authorization(&self) -> Option<String> {
        self.credentials.header_value()
    }

    /// Status code of the last terminal call, `None` until a status was received.
    pub fn response_code(&self) -> Option<u32> {
        self.status.code
    }

    /// Reason phrase of the last terminal call's status line.
    pub fn response_message(&self) -> Option<&str> {
        self.status.message.as_deref()
    }

    /// Runs one exchange, streaming the body into `out`.
    fn transfer<W: Write>(&mut self, out: W) -> Result<W> {
        self.status = ResponseStatus::default();

        let mut headers = Vec::new();
        if let Some(auth) = self.credentials.header_value() {
            headers.push(("Authorization", auth));
        }
        if let Some(ct) = &self.content_type {
            headers.push(("Content-Type", ct.clone()));
        }
        let outgoing = Outgoing {
            method: self.method,
            url: &self.url,
            headers,
            body: self.body.as_deref().map(str::as_bytes),
            timeout: self.timeout,
            buffer_size: READ_BUFFER_SIZE,
        };

        let tracker = ProgressTracker::new(self.progress.as_deref_mut());
        let mut sink = CaptureSink::new(&mut self.status, tracker, out);
        match self.transport.execute(&outgoing, &mut sink) {
            Ok(()) => {
                let (out, transferred) = sink.finish();
                tracing::debug!(
                    method = %self.method,
                    url = %self.url,
                    code = ?self.status.code,
                    transferred,
                    "transfer complete"
                );
                Ok(out)
            }
            Err(e) => {
                drop(sink);
                tracing::warn!(
                    method = %self.method,
                    url = %self.url,
                    code = ?self.status.code,
                    "transfer failed: {}",
                    e
                );
                Err(Error::Transfer(e))
            }
        }
    }
}

impl<T> fmt::Debug for Request<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("body_len", &self.body.as_ref().map(String::len))
            .field("content_type", &self.content_type)
            .field("timeout", &self.timeout)
            .field("response_code", &self.status.code)
            .finish_non_exhaustive()
    }
}

fn parse_url(uri: &str) -> Result<Url> {
    let url = Url::parse(uri).map_err(|e| Error::Configuration {
        url: uri.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::Configuration {
            url: uri.to_string(),
            reason: format!("unsupported scheme {:?}", other),
        }),
    }
}
