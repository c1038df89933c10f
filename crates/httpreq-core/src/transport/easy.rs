//! Blocking transport on a libcurl Easy handle.
//!
//! One Easy handle per `execute`: nothing is pooled or reused, so every call
//! is an independent round trip and the handle is released when it returns.

use super::parse::parse_head;
use super::{Outgoing, ResponseSink, Transport};
use crate::error::TransferError;
use crate::method::Method;
use std::cell::RefCell;
use std::str;
use std::time::Duration;

/// Default transport used by the verb constructors.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurlTransport;

impl Transport for CurlTransport {
    fn execute(
        &self,
        outgoing: &Outgoing<'_>,
        sink: &mut dyn ResponseSink,
    ) -> Result<(), TransferError> {
        let mut easy = curl::easy::Easy::new();
        easy.url(outgoing.url.as_str())?;
        easy.follow_location(true)?;
        easy.connect_timeout(outgoing.timeout)?;
        // Read timeout: give up when nothing arrives for a whole timeout period.
        // Curl only takes whole seconds here and treats 0 as "off".
        easy.low_speed_limit(1)?;
        easy.low_speed_time(stall_window(outgoing.timeout))?;
        if outgoing.timeout < Duration::from_secs(1) {
            // The stall window is rounded up to 1s; keep sub-second timeouts honest.
            easy.timeout(outgoing.timeout)?;
        }
        easy.buffer_size(outgoing.buffer_size)?;

        match outgoing.method {
            Method::Get => easy.get(true)?,
            Method::Post => easy.post(true)?,
            other => easy.custom_request(other.as_str())?,
        }
        if let Some(body) = outgoing.body {
            easy.post_fields_copy(body)?;
        }

        let mut list = curl::easy::List::new();
        for (name, value) in &outgoing.headers {
            list.append(&format!("{}: {}", name, value.trim()))?;
        }
        // Send the body right away instead of waiting on `100 Continue`.
        list.append("Expect:")?;
        easy.http_headers(list)?;

        tracing::debug!(
            method = %outgoing.method,
            url = %outgoing.url,
            body_len = ?outgoing.body.map(<[u8]>::len),
            "sending request"
        );

        let lines: RefCell<Vec<String>> = RefCell::new(Vec::new());
        let mut head_sent = false;
        let mut sink_error: Option<TransferError> = None;

        let performed = {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    lines.borrow_mut().push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.write_function(|data| {
                if !head_sent {
                    head_sent = true;
                    if let Some(head) = parse_head(&lines.borrow()) {
                        if let Err(e) = sink.on_head(head) {
                            sink_error = Some(e);
                            return Ok(0); // abort transfer
                        }
                    }
                }
                match sink.on_data(data) {
                    Ok(()) => Ok(data.len()),
                    Err(e) => {
                        sink_error = Some(e);
                        Ok(0)
                    }
                }
            })?;
            transfer.perform()
        };

        if let Some(e) = sink_error {
            return Err(e);
        }

        // Empty body, or the transfer failed between headers and body.
        let head_result = if head_sent {
            Ok(())
        } else {
            match parse_head(&lines.borrow()) {
                Some(head) => sink.on_head(head),
                None => Ok(()),
            }
        };

        performed?;
        head_result
    }
}

/// Read-phase stall window: `timeout` rounded up to whole seconds, at least 1s.
fn stall_window(timeout: Duration) -> Duration {
    let ms = timeout.as_millis() as u64;
    Duration::from_secs(ms.div_ceil(1000).max(1))
}
