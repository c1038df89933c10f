//! Download command: stream the response body to a file, progress on stderr.

use anyhow::{Context, Result};
use httpreq_core::{ProgressListener, Request};
use std::io::Write;
use std::path::Path;

/// Prints a one-line progress indicator to stderr.
struct StderrProgress;

impl ProgressListener for StderrProgress {
    fn on_progress(&mut self, total: u64, transferred: u64) {
        let pct = if total == 0 {
            100.0
        } else {
            (transferred as f64 / total as f64 * 100.0).min(100.0)
        };
        let mut err = std::io::stderr().lock();
        let _ = write!(err, "\r{:>6.1}%  {} / {} bytes", pct, transferred, total);
        let _ = err.flush();
    }

    fn on_indeterminate(&mut self) {
        let mut err = std::io::stderr().lock();
        let _ = write!(err, "\rdownloading (size unknown)...");
        let _ = err.flush();
    }
}

pub fn run_download(request: &mut Request, path: &Path) -> Result<()> {
    request.set_progress_listener(StderrProgress);
    let result = request.download(path);
    eprintln!();
    result.with_context(|| super::describe(request))?;

    tracing::info!("{} saved to {}", super::describe(request), path.display());
    eprintln!("saved to {}", path.display());
    Ok(())
}
