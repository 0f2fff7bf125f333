//! Input transport: a small HTTP/1.1 front end that turns requests into
//! controller calls.
//!
//! Parsing lives here and is synchronous so it can be tested without a
//! socket; [`http`] owns the tokio listener.

use std::fmt;

use crate::core::Move;

pub mod http;

/// Largest request head (request line plus headers) accepted, in bytes.
pub const MAX_HEAD_SIZE: usize = 8 * 1024;

/// Largest request body accepted, in bytes.
pub const MAX_BODY_SIZE: usize = 4 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Other(String),
}

/// A parsed request. Only what routing needs is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub content_length: usize,
    pub body: Vec<u8>,
}

/// Errors while reading a request off the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// Request line is not `METHOD PATH VERSION`.
    BadRequestLine,
    BadHeader,
    HeadTooLarge,
    BodyTooLarge(usize),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::BadRequestLine => write!(f, "malformed request line"),
            RequestError::BadHeader => write!(f, "malformed header"),
            RequestError::HeadTooLarge => {
                write!(f, "request head exceeds {} bytes", MAX_HEAD_SIZE)
            }
            RequestError::BodyTooLarge(len) => {
                write!(f, "request body of {} bytes exceeds {}", len, MAX_BODY_SIZE)
            }
        }
    }
}

/// Parse the request line and headers. The body is filled in separately.
pub fn parse_head(head: &str) -> Result<Request, RequestError> {
    let mut lines = head.split("\r\n").flat_map(|l| l.split('\n'));
    let request_line = lines.next().ok_or(RequestError::BadRequestLine)?;
    let mut parts = request_line.split_whitespace();
    let (method, target, version) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(m), Some(t), Some(v), None) => (m, t, v),
        _ => return Err(RequestError::BadRequestLine),
    };
    if !version.starts_with("HTTP/1.") || !target.starts_with('/') {
        return Err(RequestError::BadRequestLine);
    }
    let method = match method {
        "GET" => Method::Get,
        "POST" => Method::Post,
        other => Method::Other(other.to_string()),
    };
    let path = target.split('?').next().unwrap_or(target).to_string();

    let mut content_length = 0;
    for line in lines.filter(|l| !l.is_empty()) {
        let (name, value) = line.split_once(':').ok_or(RequestError::BadHeader)?;
        if name.trim().eq_ignore_ascii_case("content-length") {
            content_length = value
                .trim()
                .parse()
                .map_err(|_| RequestError::BadHeader)?;
        }
    }
    if content_length > MAX_BODY_SIZE {
        return Err(RequestError::BodyTooLarge(content_length));
    }
    Ok(Request {
        method,
        path,
        content_length,
        body: Vec::new(),
    })
}

/// Extract a move from an `application/x-www-form-urlencoded` body.
///
/// Accepts `row`/`col`, or the board's older `x`/`y` field names. Returns
/// `None` when either field is missing or not a number.
pub fn parse_form_move(body: &[u8]) -> Option<Move> {
    let body = std::str::from_utf8(body).ok()?;
    let mut row = None;
    let mut col = None;
    for pair in body.trim().split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let value = value.replace('+', " ");
        let parsed = value.trim().parse::<i32>().ok();
        match key {
            "row" | "x" => row = parsed,
            "col" | "y" => col = parsed,
            _ => {}
        }
    }
    Some(Move::new(row?, col?))
}

/// Extract a move from a JSON body such as `{"row": 3, "col": 7}`.
pub fn parse_json_move(body: &[u8]) -> Option<Move> {
    serde_json::from_slice(body).ok()
}

/// A response ready to be written to the socket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, content_type: &'static str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type,
            body: body.into(),
        }
    }

    pub fn html(body: impl Into<Vec<u8>>) -> Self {
        Self::new(200, "text/html; charset=utf-8", body)
    }

    pub fn json(body: impl Into<Vec<u8>>) -> Self {
        Self::new(200, "application/json", body)
    }

    pub fn not_found() -> Self {
        Self::new(404, "text/plain; charset=utf-8", "Not Found")
    }

    pub fn bad_request(reason: &str) -> Self {
        Self::new(400, "text/plain; charset=utf-8", reason.as_bytes().to_vec())
    }

    pub fn internal_error() -> Self {
        Self::new(500, "text/plain; charset=utf-8", "Internal Server Error")
    }

    /// Status line, headers and body as sent on the wire.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            self.status,
            reason_phrase(self.status),
            self.content_type,
            self.body.len()
        )
        .into_bytes();
        out.extend_from_slice(&self.body);
        out
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
