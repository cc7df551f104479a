/// HTTP status codes this server actually sends.
///
/// - `Ok` (200): every well-formed request, before the chunked body
/// - `BadRequest` (400): bytes that do not parse as an HTTP request head
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use drip::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
        }
    }
}

/// The status line and headers of a response, without any body framing.
///
/// Headers keep insertion order so they serialize onto the wire in the
/// order they were declared.
///
/// # Example
///
/// ```
/// # use drip::http::response::{ResponseHead, StatusCode};
/// let head = ResponseHead::new(StatusCode::Ok)
///     .header("Content-Type", "text/html; charset=UTF-8")
///     .header("Transfer-Encoding", "chunked");
/// assert_eq!(head.headers.len(), 2);
/// ```
#[derive(Debug)]
pub struct ResponseHead {
    /// The HTTP status code
    pub status: StatusCode,
    /// HTTP headers, in the order they will be written
    pub headers: Vec<(String, String)>,
}

impl ResponseHead {
    /// Creates a head with the given status and no headers.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
        }
    }

    /// Appends a header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }
}
