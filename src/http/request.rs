use std::collections::HashMap;

/// HTTP request methods.
///
/// The server treats every method identically, so any RFC 7230 token is
/// accepted; the named variants just cover the common ones. Parsing the
/// method only serves to reject byte streams that are not HTTP at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
    HEAD,
    OPTIONS,
    PATCH,
    /// Any other token method (TRACE, CONNECT, WebDAV verbs, ...)
    Extension(String),
}

/// A parsed HTTP request head.
///
/// Only the head is ever read: the response does not depend on the request,
/// so any body the client sends is left unconsumed on the socket.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request path/URL (e.g., "/index.html")
    pub path: String,
    /// HTTP version (typically "HTTP/1.1")
    pub version: String,
    /// Request headers as key-value pairs
    pub headers: HashMap<String, String>,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// Returns `None` only when the string is not a valid token, i.e. the
    /// request line cannot be HTTP.
    ///
    /// # Example
    ///
    /// ```
    /// # use drip::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(
    ///     Method::from_str("TRACE"),
    ///     Some(Method::Extension("TRACE".to_string()))
    /// );
    /// assert_eq!(Method::from_str("B@D"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "HEAD" => Some(Method::HEAD),
            "OPTIONS" => Some(Method::OPTIONS),
            "PATCH" => Some(Method::PATCH),
            other if is_token(other) => Some(Method::Extension(other.to_string())),
            _ => None,
        }
    }
}

/// RFC 7230 `token`: one or more tchar.
fn is_token(s: &str) -> bool {
    !s.is_empty()
        && s.bytes().all(|b| {
            matches!(b,
                b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.'
                | b'^' | b'_' | b'`' | b'|' | b'~'
                | b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z')
        })
}

impl Request {
    /// Retrieves a header value by name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }
}
