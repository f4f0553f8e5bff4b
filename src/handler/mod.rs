//! Request dispatch and the route handlers.

pub mod echo;
pub mod files;
pub mod root;
pub mod router;
pub mod user_agent;

use crate::config::ServeRoot;
use crate::http::negotiate::{ConnectionPolicy, negotiate_encoding};
use crate::http::parser::parse_request_line;
use crate::http::request::Request;
use crate::http::response::Response;

use router::Route;

/// Produces the response for `req`, or `None` when nothing is sent.
///
/// Degenerate request lines, unmatched POSTs and unsupported methods
/// yield `None`; the connection stays open either way.
pub async fn handle_request(req: &Request, root: &ServeRoot) -> Option<Response> {
    let line = match parse_request_line(req.request_line()) {
        Ok(line) => line,
        Err(e) => {
            tracing::debug!(error = ?e, line = req.request_line(), "skipping request");
            return None;
        }
    };

    let route = router::route(&line.method, &line.path);
    tracing::debug!(method = ?line.method, path = %line.path, ?route, "dispatching");

    let connection = ConnectionPolicy::from_request(req);

    let response = match route {
        Route::Root => root::handle(),
        Route::Echo => echo::handle(&line.path, negotiate_encoding(req)),
        Route::UserAgent => user_agent::handle(req),
        Route::FileRead => files::read(&line.path, root).await,
        Route::FileWrite => files::write(&line.path, req.body(), root).await,
        Route::NotFound => Response::not_found(),
        Route::Ignore => return None,
    };

    Some(response.with_connection(connection))
}
