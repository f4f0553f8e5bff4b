use crate::http::response::Response;

/// `GET /`: empty 200.
pub fn handle() -> Response {
    Response::ok()
}
