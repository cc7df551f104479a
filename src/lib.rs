//! Drip - Chunked Transfer Encoding Test Server
//!
//! A fixture for exercising chunked-transfer behavior in HTTP clients:
//! every request gets the same HTML document, streamed in timed chunks.

pub mod config;
pub mod http;
pub mod page;
pub mod server;
