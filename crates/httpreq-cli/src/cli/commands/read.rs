//! Read command: print the response body to stdout.

use anyhow::{Context, Result};
use httpreq_core::Request;
use std::io::Write;

pub fn run_read(request: &mut Request) -> Result<()> {
    let body = request.read().with_context(|| super::describe(request))?;
    tracing::info!("{}", super::describe(request));

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(body.as_bytes())?;
    if !body.ends_with('\n') {
        writeln!(stdout)?;
    }
    Ok(())
}
