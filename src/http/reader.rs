use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

const CONTENT_LENGTH_PREFIX: &str = "Content-Length: ";

/// Bytes of one request exactly as they arrived.
///
/// `head` is the request line and header lines with their terminators,
/// up to and including the empty line. `body` is present only when a
/// positive `Content-Length` was announced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRequest {
    pub head: String,
    pub body: Option<Vec<u8>>,
}

/// Reads the next request off `reader`.
///
/// Returns `None` once the stream has nothing more to give: end of
/// stream or a read error before the request line, a read error while
/// scanning headers, or a body cut short. The connection loop takes
/// `None` as "no more requests".
///
/// A request line that is only a terminator is returned on its own, so
/// stray blank lines between requests never swallow the next request
/// line as a header.
pub async fn read_request<R>(reader: &mut R) -> Option<RawRequest>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = Vec::new();

    match reader.read_until(b'\n', &mut line).await {
        Ok(0) => return None,
        Ok(_) => {}
        Err(e) => {
            tracing::debug!(error = %e, "read failed on request line");
            return None;
        }
    }

    let mut head = String::from_utf8_lossy(&line).into_owned();
    if is_terminator(&line) {
        return Some(RawRequest { head, body: None });
    }

    let mut content_length = 0usize;

    loop {
        line.clear();
        match reader.read_until(b'\n', &mut line).await {
            // Peer stopped sending mid-headers; serve what we have.
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = %e, "read failed while scanning headers");
                return None;
            }
        }

        let text = String::from_utf8_lossy(&line);
        if let Some(value) = text.strip_prefix(CONTENT_LENGTH_PREFIX) {
            content_length = parse_content_length(value);
        }
        head.push_str(&text);

        if is_terminator(&line) {
            break;
        }
    }

    let body = if content_length > 0 {
        let mut body = Vec::new();
        let limit = content_length as u64;
        if let Err(e) = (&mut *reader).take(limit).read_to_end(&mut body).await {
            tracing::warn!(error = %e, "read failed on request body");
            return None;
        }
        if body.len() < content_length {
            tracing::warn!(
                expected = content_length,
                received = body.len(),
                "stream ended before request body was complete"
            );
            return None;
        }
        Some(body)
    } else {
        None
    };

    Some(RawRequest { head, body })
}

fn is_terminator(line: &[u8]) -> bool {
    line == b"\r\n" || line == b"\n"
}

fn parse_content_length(value: &str) -> usize {
    match value.trim().parse::<usize>() {
        Ok(n) => n,
        Err(e) => {
            tracing::warn!(value = value.trim(), error = %e, "malformed Content-Length, using 0");
            0
        }
    }
}
