//! Error types for request construction and transfers.
//!
//! `Configuration` means the request never left the process; `Transfer` means
//! a connection was attempted and something failed along the way.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The URL given to a constructor is malformed or not http(s).
    #[error("invalid URL {url:?}: {reason}")]
    Configuration { url: String, reason: String },
    /// Connecting, sending the body, or consuming the response failed.
    #[error("transfer failed: {0}")]
    Transfer(#[from] TransferError),
}

impl Error {
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration { .. })
    }

    pub fn is_transfer(&self) -> bool {
        matches!(self, Error::Transfer(_))
    }
}

/// Failure during a single transfer.
#[derive(Debug, Error)]
pub enum TransferError {
    /// Curl reported an error (timeout, connection refused, send/recv failure).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// The server answered with an error status; its body is not readable.
    #[error("HTTP {code}: response body unavailable")]
    BodyUnavailable { code: u32 },
    /// Local I/O failed (destination file, directory creation).
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),
}

impl From<curl::Error> for Error {
    fn from(e: curl::Error) -> Self {
        Error::Transfer(TransferError::Curl(e))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Transfer(TransferError::Io(e))
    }
}
