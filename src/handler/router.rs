use crate::http::request::Method;

/// What a request is routed to.
///
/// The set is closed: five behaviours plus the two fall-through cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Root,
    Echo,
    UserAgent,
    FileRead,
    FileWrite,
    /// Unmatched GET
    NotFound,
    /// Unmatched POST or unsupported method; nothing is sent
    Ignore,
}

/// Maps a method and path to a route. First match wins.
///
/// | Method | Path test            | Route       |
/// |--------|----------------------|-------------|
/// | GET    | exact `/`            | `Root`      |
/// | GET    | prefix `/echo`       | `Echo`      |
/// | GET    | prefix `/user-agent` | `UserAgent` |
/// | GET    | prefix `/files`      | `FileRead`  |
/// | POST   | prefix `/files`      | `FileWrite` |
/// | GET    | anything else        | `NotFound`  |
/// | other  | anything else        | `Ignore`    |
pub fn route(method: &Method, path: &str) -> Route {
    match method {
        Method::GET if path == "/" => Route::Root,
        Method::GET if path.starts_with("/echo") => Route::Echo,
        Method::GET if path.starts_with("/user-agent") => Route::UserAgent,
        Method::GET if path.starts_with("/files") => Route::FileRead,
        Method::GET => Route::NotFound,
        Method::POST if path.starts_with("/files") => Route::FileWrite,
        _ => Route::Ignore,
    }
}
