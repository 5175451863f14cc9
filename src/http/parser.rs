use std::fmt;

use crate::http::request::{Method, Request};

const HEADERS_END: &[u8] = b"\r\n\r\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The method token is not GET. Carries the token as received.
    UnsupportedMethod(String),
    /// A GET request line with no path token.
    MissingPath,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::UnsupportedMethod(m) => write!(f, "unsupported method {:?}", m),
            ParseError::MissingPath => write!(f, "request line has no path"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Extracts the request path from the request line of `raw`.
///
/// Only the first line is looked at. The caller is expected to have read at
/// least that far; nothing past the request line is validated.
pub fn parse_request(raw: &str) -> Result<Request, ParseError> {
    let request_line = raw.lines().next().unwrap_or("");
    let mut parts = request_line.split_whitespace();

    let method = Method::from_str(parts.next().unwrap_or(""));
    if !method.is_retrieval() {
        return Err(ParseError::UnsupportedMethod(method.to_string()));
    }

    let path = parts.next().ok_or(ParseError::MissingPath)?;

    Ok(Request::new(method, path))
}

/// Position of the first CRLF CRLF in `buf`, if any.
pub fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(HEADERS_END.len())
        .position(|w| w == HEADERS_END)
}
