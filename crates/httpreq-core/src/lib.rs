pub mod config;
pub mod logging;

pub mod auth;
pub mod error;
pub mod method;
pub mod progress;
pub mod request;
pub mod transport;

pub use error::{Error, TransferError};
pub use method::Method;
pub use progress::ProgressListener;
pub use request::Request;
pub use transport::{CurlTransport, Transport};
