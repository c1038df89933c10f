//! CLI command handlers, one per terminal operation.

mod download;
mod read;

pub use download::run_download;
pub use read::run_read;

use httpreq_core::Request;

/// "GET http://... (HTTP 404 Not Found)" for error context and logs.
fn describe(request: &Request) -> String {
    match request.response_code() {
        Some(code) => format!(
            "{} {} (HTTP {} {})",
            request.method(),
            request.url(),
            code,
            request.response_message().unwrap_or("")
        )
        .trim_end()
        .to_string(),
        None => format!("{} {}", request.method(), request.url()),
    }
}
