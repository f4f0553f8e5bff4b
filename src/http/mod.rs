//! HTTP/1.1 protocol handling.
//!
//! This module reads requests straight off a byte stream and writes
//! framed responses back, with persistent connections.
//!
//! # Architecture
//!
//! - **`reader`**: Pulls one request's bytes off the stream (head, then an exact-length body)
//! - **`parser`**: Splits a raw request into lines and the request line into fields
//! - **`request`**: Request representation and raw header-line lookups
//! - **`negotiate`**: `Accept-Encoding` and `Connection: close` decisions
//! - **`compression`**: gzip body encoding
//! - **`response`**: Status table and response builder
//! - **`writer`**: Serializes a response and sends it in one write
//! - **`connection`**: The per-connection request-response state machine
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for the next request
//!        └──────┬──────┘
//!               │ Request received          (end of stream → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Route and run the handler
//!        └──────┬───────────┘
//!               │ Response ready            (nothing to send → Reading)
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ├─ Keep open → Reading (same connection)
//!               └─ Connection: close → Closed
//! ```

pub mod compression;
pub mod connection;
pub mod negotiate;
pub mod parser;
pub mod reader;
pub mod request;
pub mod response;
pub mod writer;
