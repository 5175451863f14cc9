use std::fmt;

/// HTTP request methods.
///
/// Only `GET` is served; every other token is kept verbatim in `Other` so it
/// can be logged before the request is answered with 405 Method Not Allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// Any other method token, as received
    Other(String),
}

/// A parsed request line.
///
/// Lives for a single connection and is dropped once the response is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method
    pub method: Method,
    /// The request path as sent by the client (e.g., "/index.html")
    pub path: String,
}

impl Method {
    /// Parses an HTTP method token.
    ///
    /// Matching is case-sensitive, as method names are in HTTP.
    ///
    /// # Example
    ///
    /// ```
    /// # use webroot::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Method::GET);
    /// assert_eq!(Method::from_str("get"), Method::Other("get".to_string()));
    /// ```
    pub fn from_str(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            other => Method::Other(other.to_string()),
        }
    }

    /// Whether this is the retrieval method the server supports.
    pub fn is_retrieval(&self) -> bool {
        matches!(self, Method::GET)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Method::GET => write!(f, "GET"),
            Method::Other(s) => write!(f, "{}", s),
        }
    }
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }
}
