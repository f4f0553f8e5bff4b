use crate::http::reader::RawRequest;
use crate::http::request::{Method, Request, RequestLine};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Request line of length 0 or 1, typically a stray terminator.
    Degenerate,
    /// No request target after the method.
    MissingTarget,
}

/// Splits a raw request into its lines and body.
///
/// Lines are split on `\n` with a trailing `\r` removed, and collection
/// stops at the empty line that ends the header block.
pub fn parse_request(raw: RawRequest) -> Request {
    let mut lines = Vec::new();

    for (i, line) in raw.head.split('\n').enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if i > 0 && line.is_empty() {
            break;
        }
        lines.push(line.to_string());
    }

    Request {
        lines,
        body: raw.body,
    }
}

/// Splits a request line on single spaces: method, path, version.
///
/// This is a fixed-position split, not a grammar. Extra fields are
/// ignored and a missing version is accepted as empty.
pub fn parse_request_line(line: &str) -> Result<RequestLine, ParseError> {
    if line.len() <= 1 {
        return Err(ParseError::Degenerate);
    }

    let mut parts = line.split(' ');

    let method = Method::parse(parts.next().unwrap_or(""));
    let path = parts.next().ok_or(ParseError::MissingTarget)?;
    let version = parts.next().unwrap_or("");

    Ok(RequestLine {
        method,
        path: path.to_string(),
        version: version.to_string(),
    })
}
