//! Incremental response scanning.
//!
//! The transport may deliver the response in many reads of arbitrary size,
//! so the scanner accumulates chunks and searches for the CRLFCRLF boundary
//! across chunk edges. Nothing past the boundary is processed; locating
//! where the body starts is all this layer does with it.

use bytes::BytesMut;

/// Scanner lifecycle. `HeaderComplete` and `Closed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Still looking for the header/body boundary.
    Scanning,
    /// The CRLFCRLF boundary was found; the header block is complete.
    HeaderComplete,
    /// The stream ended before a boundary was seen. Not an error at this
    /// level: the caller decides how to report an incomplete response.
    Closed,
}

/// Append-only accumulator over one connection's response bytes.
///
/// Created when the read loop starts, discarded when the boundary is found
/// or the connection closes.
#[derive(Debug)]
pub struct ResponseScanner {
    buf: BytesMut,
    /// How far the boundary search has already looked.
    scanned: usize,
    /// Byte offset of the CRLFCRLF sequence, once found.
    boundary: Option<usize>,
    state: ScanState,
}

impl ResponseScanner {
    pub fn new() -> Self {
        Self {
            buf: BytesMut::with_capacity(4096),
            scanned: 0,
            boundary: None,
            state: ScanState::Scanning,
        }
    }

    /// Append a chunk and search the newly valid window for CRLFCRLF.
    ///
    /// The search rewinds three bytes so a boundary straddling a chunk edge
    /// is still found. Returns the state after the append; pushes after a
    /// terminal state are ignored.
    pub fn push(&mut self, chunk: &[u8]) -> ScanState {
        if self.state != ScanState::Scanning {
            return self.state;
        }

        self.buf.extend_from_slice(chunk);

        let from = self.scanned.saturating_sub(3);
        if let Some(pos) = self.buf[from..].windows(4).position(|w| w == b"\r\n\r\n") {
            self.boundary = Some(from + pos);
            self.state = ScanState::HeaderComplete;
        }
        self.scanned = self.buf.len();

        self.state
    }

    /// Mark the stream as ended. A scanner still searching moves to
    /// `Closed`.
    pub fn finish(&mut self) -> ScanState {
        if self.state == ScanState::Scanning {
            self.state = ScanState::Closed;
        }
        self.state
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// The header block: everything up to and including the first CRLF of
    /// the boundary. `None` until the boundary is found.
    pub fn header_block(&self) -> Option<&[u8]> {
        self.boundary.map(|b| &self.buf[..b + 2])
    }

    /// Offset where the body starts, just past the full CRLFCRLF.
    pub fn body_start(&self) -> Option<usize> {
        self.boundary.map(|b| b + 4)
    }

    /// Everything received so far.
    pub fn buffered(&self) -> &[u8] {
        &self.buf
    }
}

impl Default for ResponseScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the 3-character status code from a (possibly partial) header
/// block.
///
/// Scans for the literal `HTTP/` token, skips to the next space, skips any
/// run of spaces, and takes exactly the next three characters. Returns
/// `None` if `HTTP/` is absent or the line ends before three code
/// characters are found.
pub fn extract_status_code(head: &[u8]) -> Option<&str> {
    let start = head.windows(5).position(|w| w == b"HTTP/")?;
    let rest = &head[start..];

    let space = rest.iter().position(|&b| b == b' ')?;
    let rest = &rest[space..];
    let code_start = rest.iter().position(|&b| b != b' ')?;

    let code = rest.get(code_start..code_start + 3)?;
    if code.contains(&b'\r') || code.contains(&b'\n') {
        return None;
    }

    std::str::from_utf8(code).ok()
}
