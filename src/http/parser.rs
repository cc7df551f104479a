use crate::http::request::{Method, Request};
use std::collections::HashMap;

#[derive(Debug)]
pub enum ParseError {
    InvalidRequest,
    InvalidMethod,
    InvalidHeader,
    Incomplete,
}

/// Parses an HTTP request head from the front of `buf`.
///
/// Returns the request plus the number of bytes consumed (the head only;
/// any request body is deliberately left in the buffer unread). Returns
/// `Incomplete` until the blank line ending the head has arrived.
pub fn parse_request_head(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    // Look for the head/body separator
    let head_end = find_head_end(buf).ok_or(ParseError::Incomplete)?;
    let head_bytes = &buf[..head_end];

    let head_str = std::str::from_utf8(head_bytes).map_err(|_| ParseError::InvalidRequest)?;

    let mut lines = head_str.split("\r\n");

    // Request line
    let request_line = lines.next().ok_or(ParseError::InvalidRequest)?;
    let mut parts = request_line.split_whitespace();

    let method_str = parts.next().ok_or(ParseError::InvalidRequest)?;
    let path = parts.next().ok_or(ParseError::InvalidRequest)?;
    let version = parts.next().ok_or(ParseError::InvalidRequest)?;

    let method = Method::from_str(method_str).ok_or(ParseError::InvalidMethod)?;

    // Headers
    let mut headers = HashMap::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        let (key, value) = line.split_once(':').ok_or(ParseError::InvalidHeader)?;

        headers.insert(key.trim().to_string(), value.trim().to_string());
    }

    let request = Request {
        method,
        path: path.to_string(),
        version: version.to_string(),
        headers,
    };

    Ok((request, head_end + 4))
}

fn find_head_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
