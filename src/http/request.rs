/// HTTP request methods.
///
/// Only `GET` and `POST` are routed. Anything else is carried as
/// `Other` so the dispatcher can drop it without a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create a resource
    POST,
    /// Any other token found in the method position
    Other(String),
}

impl Method {
    /// Parses an HTTP method token. Matching is case-sensitive.
    ///
    /// # Example
    ///
    /// ```
    /// # use plainhttp::http::request::Method;
    /// assert_eq!(Method::parse("GET"), Method::GET);
    /// assert_eq!(Method::parse("get"), Method::Other("get".to_string()));
    /// ```
    pub fn parse(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "POST" => Method::POST,
            other => Method::Other(other.to_string()),
        }
    }
}

/// The three space-separated fields of a request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: Method,
    /// Request target as sent, e.g. `/echo/abc`
    pub path: String,
    /// Protocol version as sent. Accepted, never negotiated.
    pub version: String,
}

/// A request as read off the wire.
///
/// `lines` holds the request line followed by every header line, in
/// arrival order and without their terminators. Headers are kept raw:
/// lookups are prefix scans over these lines, and repeated headers are
/// never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub lines: Vec<String>,
    pub body: Option<Vec<u8>>,
}

impl Request {
    /// The first line, or `""` for an empty request.
    pub fn request_line(&self) -> &str {
        self.lines.first().map(String::as_str).unwrap_or("")
    }

    /// Header lines, i.e. everything after the request line.
    pub fn header_lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().skip(1).map(String::as_str)
    }

    /// Returns the remainder of the first header line starting with `prefix`.
    ///
    /// `prefix` includes the separator, e.g. `"User-Agent: "`.
    pub fn header_value(&self, prefix: &str) -> Option<&str> {
        self.header_lines().find_map(|line| line.strip_prefix(prefix))
    }

    /// Whether any header line contains `needle`.
    pub fn has_header_containing(&self, needle: &str) -> bool {
        self.header_lines().any(|line| line.contains(needle))
    }

    pub fn body(&self) -> &[u8] {
        self.body.as_deref().unwrap_or(&[])
    }

    /// The request rendered on one line, for logs.
    pub fn summary(&self) -> String {
        self.lines.join(", ")
    }
}
