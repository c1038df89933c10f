//! Response sink shared by `read` and `download`.

use crate::error::TransferError;
use crate::progress::ProgressTracker;
use crate::transport::{ResponseHead, ResponseSink};
use std::io::Write;

/// Lowest status whose body is treated as unreadable.
const FIRST_ERROR_STATUS: u32 = 400;

#[derive(Debug, Clone, Default)]
pub(super) struct ResponseStatus {
    pub(super) code: Option<u32>,
    pub(super) message: Option<String>,
}

/// Records the status, writes the body to `out` and drives progress.
pub(super) struct CaptureSink<'a, W> {
    status: &'a mut ResponseStatus,
    progress: ProgressTracker<'a>,
    out: W,
}

impl<'a, W: Write> CaptureSink<'a, W> {
    pub(super) fn new(status: &'a mut ResponseStatus, progress: ProgressTracker<'a>, out: W) -> Self {
        Self {
            status,
            progress,
            out,
        }
    }

    /// Sends the final progress notification and hands back the writer.
    pub(super) fn finish(mut self) -> (W, u64) {
        self.progress.finish();
        let transferred = self.progress.transferred();
        (self.out, transferred)
    }
}

impl<W: Write> ResponseSink for CaptureSink<'_, W> {
    fn on_head(&mut self, head: ResponseHead) -> Result<(), TransferError> {
        tracing::debug!(
            code = head.code,
            message = ?head.message,
            content_length = ?head.content_length,
            "response status"
        );
        self.status.code = Some(head.code);
        self.status.message = head.message;
        self.progress.set_total(head.content_length);
        if head.code >= FIRST_ERROR_STATUS {
            return Err(TransferError::BodyUnavailable { code: head.code });
        }
        Ok(())
    }

    fn on_data(&mut self, chunk: &[u8]) -> Result<(), TransferError> {
        self.out.write_all(chunk)?;
        self.progress.advance(chunk.len());
        Ok(())
    }
}
