use crate::http::compression;
use crate::http::negotiate::Encoding;
use crate::http::response::{Response, ResponseBuilder, StatusCode};

const ECHO_PREFIX: &str = "/echo/";

/// `GET /echo/<value>`: replies with `<value>` as plain text.
///
/// The body is gzip-compressed when the client accepted it; otherwise it
/// is sent as is.
pub fn handle(path: &str, encoding: Encoding) -> Response {
    let value = path.strip_prefix(ECHO_PREFIX).unwrap_or("");

    let (body, encoding) = match compression::encode(value.as_bytes(), encoding) {
        Ok(body) => (body, encoding),
        Err(e) => {
            tracing::warn!(error = %e, encoding = encoding.token(), "compression failed, sending identity");
            (value.as_bytes().to_vec(), Encoding::Identity)
        }
    };

    ResponseBuilder::new(StatusCode::Ok)
        .content_type("text/plain")
        .encoding(encoding)
        .body(body)
        .build()
}
