use super::Request;
use crate::error::Result;
use crate::transport::Transport;

impl<T: Transport> Request<T> {
    /// Performs the request and returns the whole response body as text.
    ///
    /// The body is buffered in memory and decoded as UTF-8 once complete;
    /// invalid sequences are replaced with U+FFFD. Fails without returning any
    /// text when the transfer fails or the server answers with an error
    /// status; `response_code` still reflects whatever status was received.
    pub fn read(&mut self) -> Result<String> {
        let bytes = self.transfer(Vec::new())?;
        Ok(match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })
    }
}
