//! Outgoing HTTP/1.0 request construction.
//!
//! The request is write-only: it is serialized once and never parsed back.

/// Optional pieces of the outgoing request, gathered in one place instead of
/// a long positional parameter list.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub user_agent: Option<String>,
    pub accept: Option<String>,
    pub accept_encoding: Option<String>,
    pub accept_charset: Option<String>,
    pub accept_language: Option<String>,
    /// Already base64-encoded Basic-Auth credentials.
    pub credentials: Option<String>,
}

/// A fully assembled request head: the request line followed by header
/// lines, in fixed order. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingRequest {
    lines: Vec<String>,
}

impl OutgoingRequest {
    /// Request line and header lines, without line terminators.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Wire form: every line CRLF-terminated, closed by one blank line.
    /// No body follows (GET).
    pub fn as_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();

        for line in &self.lines {
            buf.extend_from_slice(line.as_bytes());
            buf.extend_from_slice(b"\r\n");
        }
        buf.extend_from_slice(b"\r\n");

        buf
    }
}

/// Assemble a `GET <path> HTTP/1.0` request.
///
/// Header order is fixed: `Host` (with `:<port>` when a port was parsed from
/// the URL), then `Authorization`, `User-Agent`, `Accept`,
/// `Accept-Encoding`, `Accept-Charset`, `Accept-Language` — each emitted
/// only when the corresponding option is set.
pub fn build_request(
    path: &str,
    host: &str,
    port: Option<&str>,
    opts: &RequestOptions,
) -> OutgoingRequest {
    let mut lines = Vec::with_capacity(8);

    lines.push(format!("GET {path} HTTP/1.0"));

    match port {
        Some(port) => lines.push(format!("Host: {host}:{port}")),
        None => lines.push(format!("Host: {host}")),
    }

    if let Some(credentials) = &opts.credentials {
        lines.push(format!("Authorization: Basic {credentials}"));
    }
    if let Some(ua) = &opts.user_agent {
        lines.push(format!("User-Agent: {ua}"));
    }
    if let Some(value) = &opts.accept {
        lines.push(format!("Accept: {value}"));
    }
    if let Some(value) = &opts.accept_encoding {
        lines.push(format!("Accept-Encoding: {value}"));
    }
    if let Some(value) = &opts.accept_charset {
        lines.push(format!("Accept-Charset: {value}"));
    }
    if let Some(value) = &opts.accept_language {
        lines.push(format!("Accept-Language: {value}"));
    }

    OutgoingRequest { lines }
}
