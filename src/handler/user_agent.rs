use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};

const USER_AGENT_PREFIX: &str = "User-Agent: ";

/// `GET /user-agent`: reflects the first `User-Agent` header, uncompressed.
/// Without one the body is empty.
pub fn handle(req: &Request) -> Response {
    let agent = req.header_value(USER_AGENT_PREFIX).unwrap_or("");

    ResponseBuilder::new(StatusCode::Ok)
        .content_type("text/plain")
        .body(agent.as_bytes().to_vec())
        .build()
}
