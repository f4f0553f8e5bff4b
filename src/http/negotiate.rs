//! Per-request decisions taken from the `Accept-Encoding` and
//! `Connection` headers.
//!
//! Both scans work on raw header lines with case-sensitive matching,
//! and both are recomputed for every request.

use crate::http::request::Request;

const ACCEPT_ENCODING_PREFIX: &str = "Accept-Encoding: ";
const CONNECTION_CLOSE: &str = "Connection: close";

/// Content codings the server can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Identity,
    Gzip,
}

/// Codings offered to clients, in preference order.
pub const SUPPORTED_ENCODINGS: &[Encoding] = &[Encoding::Gzip];

impl Encoding {
    pub fn token(&self) -> &'static str {
        match self {
            Encoding::Identity => "identity",
            Encoding::Gzip => "gzip",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        SUPPORTED_ENCODINGS
            .iter()
            .copied()
            .find(|enc| enc.token() == token)
    }

    /// `Content-Encoding` header line, or `""` for identity.
    pub fn fragment(&self) -> &'static str {
        match self {
            Encoding::Identity => "",
            Encoding::Gzip => "Content-Encoding: gzip\r\n",
        }
    }
}

/// Picks the first supported coding listed in an `Accept-Encoding` line.
///
/// Lines are visited in order and the first one that names a supported
/// token decides. Tokens are separated by `", "` and compared exactly.
pub fn negotiate_encoding(req: &Request) -> Encoding {
    req.header_lines()
        .filter_map(|line| line.strip_prefix(ACCEPT_ENCODING_PREFIX))
        .find_map(|value| value.split(", ").find_map(Encoding::from_token))
        .unwrap_or_default()
}

/// Whether the connection ends after the current response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConnectionPolicy {
    pub close: bool,
}

impl ConnectionPolicy {
    pub fn from_request(req: &Request) -> Self {
        Self {
            close: req.has_header_containing(CONNECTION_CLOSE),
        }
    }

    /// `Connection` header line, or `""` when the connection stays open.
    pub fn fragment(&self) -> &'static str {
        if self.close {
            "Connection: close\r\n"
        } else {
            ""
        }
    }
}
