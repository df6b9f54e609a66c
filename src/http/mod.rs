//! Minimal HTTP/1.0 client protocol pieces.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`url`**: splits a raw URL-like string into host, port, path, user and
//!   password without a URI grammar library
//! - **`auth`**: base64 encoding and Basic-Auth credential derivation
//! - **`request`**: assembles the outgoing HTTP/1.0 request head
//! - **`response`**: scans the raw response byte stream for the header/body
//!   boundary and the status code
//!
//! # Response Scanner State Machine
//!
//! The response side is a small state machine fed with chunks of arbitrary
//! size as they arrive from the socket:
//!
//! ```text
//!        ┌─────────────┐
//!        │  Scanning   │ ← Accumulate chunks, search for CRLFCRLF
//!        └──────┬──────┘
//!               │
//!               ├─ CRLFCRLF found → HeaderComplete (header block ready)
//!               └─ Peer closed    → Closed (incomplete response)
//! ```
//!
//! Everything here is a pure function or a single-pass scan over
//! caller-supplied input; the actual socket I/O lives in [`crate::net`].

pub mod auth;
pub mod request;
pub mod response;
pub mod url;
