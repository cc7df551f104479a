//! HTTP protocol implementation.
//!
//! A minimal HTTP/1.1 server layer for streaming one fixed chunked response
//! per connection.
//!
//! # Architecture
//!
//! - **`connection`**: The per-connection handler implementing the
//!   request-response state machine
//! - **`parser`**: Parses incoming HTTP request heads from byte buffers
//! - **`request`**: HTTP request representation
//! - **`response`**: HTTP response head representation with builder pattern
//! - **`chunked`**: Chunked transfer encoding and the streaming writer
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for a complete request head
//!        └──────┬──────┘
//!               │ Request received
//!               ▼
//!        ┌──────────────────┐
//!        │    Streaming     │ ← Write timed chunks to the client
//!        └──────┬───────────┘
//!               │ Final chunk sent
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │
//!        └──────────────────┘
//! ```
//!
//! There is no keep-alive: the response ends the connection.

pub mod chunked;
pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
