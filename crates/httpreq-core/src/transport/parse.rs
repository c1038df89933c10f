//! Parse collected response header lines into a `ResponseHead`.

use super::ResponseHead;

/// Parse the last header block in `lines`.
///
/// Curl reports every block it sees (`100 Continue`, redirects), so the final
/// response starts at the last status line.
pub(crate) fn parse_head(lines: &[String]) -> Option<ResponseHead> {
    let start = lines.iter().rposition(|l| l.starts_with("HTTP/"))?;
    let (code, message) = parse_status_line(&lines[start])?;

    let mut content_length = None;
    for line in &lines[start + 1..] {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse::<u64>().ok();
            }
        }
    }

    Some(ResponseHead {
        code,
        message,
        content_length,
    })
}

/// `HTTP/1.1 404 Not Found` -> (404, Some("Not Found")).
fn parse_status_line(line: &str) -> Option<(u32, Option<String>)> {
    let mut parts = line.trim().splitn(3, ' ');
    let _version = parts.next()?;
    let code = parts.next()?.trim().parse::<u32>().ok()?;
    let message = parts
        .next()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string);
    Some((code, message))
}
