use crate::http::negotiate::{ConnectionPolicy, Encoding};

/// HTTP status codes the server produces.
///
/// - `Ok` (200): Request successful
/// - `Created` (201): File written
/// - `NotFound` (404): Unknown path or unreadable file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use plainhttp::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::NotFound => 404,
        }
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::NotFound => "Not Found",
        }
    }

    /// Full status line without its terminator.
    ///
    /// ```
    /// # use plainhttp::http::response::StatusCode;
    /// assert_eq!(StatusCode::Created.status_line(), "HTTP/1.1 201 Created");
    /// ```
    pub fn status_line(&self) -> &'static str {
        match self {
            StatusCode::Ok => "HTTP/1.1 200 OK",
            StatusCode::Created => "HTTP/1.1 201 Created",
            StatusCode::NotFound => "HTTP/1.1 404 Not Found",
        }
    }
}

/// A complete response ready to be serialized.
///
/// `Content-Length` is not stored; it is always the length of `body`
/// at the time the response is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: Option<&'static str>,
    /// Coding already applied to `body`
    pub encoding: Encoding,
    pub connection: ConnectionPolicy,
    pub body: Vec<u8>,
}

/// Builder for constructing responses in a fluent style.
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .content_type("text/plain")
///     .body(b"abc".to_vec())
///     .build();
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    content_type: Option<&'static str>,
    encoding: Encoding,
    connection: ConnectionPolicy,
    body: Vec<u8>,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: None,
            encoding: Encoding::Identity,
            connection: ConnectionPolicy::default(),
            body: Vec::new(),
        }
    }

    pub fn content_type(mut self, content_type: &'static str) -> Self {
        self.content_type = Some(content_type);
        self
    }

    /// Declares the coding the body has already been encoded with.
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn connection(mut self, connection: ConnectionPolicy) -> Self {
        self.connection = connection;
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub fn build(self) -> Response {
        Response {
            status: self.status,
            content_type: self.content_type,
            encoding: self.encoding,
            connection: self.connection,
            body: self.body,
        }
    }
}

impl Response {
    /// 200 OK with an empty body.
    pub fn ok() -> Self {
        ResponseBuilder::new(StatusCode::Ok).build()
    }

    /// 201 Created with an empty body.
    pub fn created() -> Self {
        ResponseBuilder::new(StatusCode::Created).build()
    }

    /// 404 Not Found with an empty body.
    pub fn not_found() -> Self {
        ResponseBuilder::new(StatusCode::NotFound).build()
    }

    pub fn with_connection(mut self, connection: ConnectionPolicy) -> Self {
        self.connection = connection;
        self
    }

    pub fn content_length(&self) -> usize {
        self.body.len()
    }

    pub fn must_close(&self) -> bool {
        self.connection.close
    }
}
