//! Transport seam between `Request` and the HTTP stack.
//!
//! A transport performs exactly one HTTP exchange per `execute` call and
//! pushes the response into a `ResponseSink`: the head once, as soon as the
//! final status line and headers are in, then the body chunk by chunk.

mod easy;
mod parse;

pub use easy::CurlTransport;

use crate::error::TransferError;
use crate::method::Method;
use std::time::Duration;
use url::Url;

/// Everything a transport needs to put one request on the wire.
#[derive(Debug, Clone)]
pub struct Outgoing<'a> {
    pub method: Method,
    pub url: &'a Url,
    /// Extra request headers (`Authorization`, `Content-Type`).
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<&'a [u8]>,
    /// Applied to the connect phase and, separately, to the read phase.
    pub timeout: Duration,
    /// Receive buffer size.
    pub buffer_size: usize,
}

/// Status line and the headers `Request` cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHead {
    pub code: u32,
    /// Reason phrase of the status line, if the server sent one.
    pub message: Option<String>,
    /// `Content-Length`, when present and valid.
    pub content_length: Option<u64>,
}

/// Receives a response as it arrives.
///
/// `on_head` is called at most once and always before the first `on_data`.
/// When either method fails the transport aborts and returns that error.
pub trait ResponseSink {
    fn on_head(&mut self, head: ResponseHead) -> Result<(), TransferError>;
    fn on_data(&mut self, chunk: &[u8]) -> Result<(), TransferError>;
}

/// Performs one blocking HTTP exchange.
pub trait Transport {
    fn execute(
        &self,
        outgoing: &Outgoing<'_>,
        sink: &mut dyn ResponseSink,
    ) -> Result<(), TransferError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(
        &self,
        outgoing: &Outgoing<'_>,
        sink: &mut dyn ResponseSink,
    ) -> Result<(), TransferError> {
        (**self).execute(outgoing, sink)
    }
}
