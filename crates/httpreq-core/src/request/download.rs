use super::{Request, READ_BUFFER_SIZE};
use crate::error::Result;
use crate::transport::Transport;
use std::fs;
use std::io::BufWriter;
use std::path::Path;

impl<T: Transport> Request<T> {
    /// Performs the request and streams the response body into `destination`.
    ///
    /// Missing parent directories are created. The body goes to a temp file
    /// next to `destination`, which replaces any existing file only once the
    /// transfer succeeded; on failure the temp file is removed and an existing
    /// destination is left as it was.
    pub fn download(&mut self, destination: impl AsRef<Path>) -> Result<()> {
        let destination = destination.as_ref();
        let parent = match destination.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let temp = tempfile::NamedTempFile::new_in(parent)?;
        let writer = self.transfer(BufWriter::with_capacity(READ_BUFFER_SIZE, temp))?;
        let temp = writer.into_inner().map_err(|e| e.into_error())?;
        temp.as_file().sync_all()?;
        temp.persist(destination).map_err(|e| e.error)?;

        tracing::debug!("downloaded {} to {}", self.url, destination.display());
        Ok(())
    }
}
