//! httphead - show the HTTP headers of a website
//!
//! Core library: URL decomposition and minimal HTTP/1.0 request/response
//! handling over a single TCP connection.

pub mod cli;
pub mod http;
pub mod net;
