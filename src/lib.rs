//! plainhttp - minimal HTTP/1.1 server
//!
//! Request parsing, routing and response framing built directly on
//! byte streams.

pub mod config;
pub mod handler;
pub mod http;
pub mod server;
