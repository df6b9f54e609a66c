//! Networking collaborator: one TCP connection, blocking-style sequential
//! I/O driven by the orchestrator.
//!
//! No timeouts and no retries anywhere: a hung connect or read blocks
//! indefinitely, and every failure is surfaced immediately with the name of
//! the operation that failed.

use anyhow::{Context, Result};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// Read chunk size for the response loop.
pub const CHUNK_SIZE: usize = 512;

/// One connection to an origin server.
#[derive(Debug)]
pub struct Connection {
    stream: TcpStream,
}

impl Connection {
    /// Resolve `host` and open a TCP connection to `host:port`. DNS and
    /// TCP-level failures both surface here.
    pub async fn open(host: &str, port: u16) -> Result<Self> {
        let stream = TcpStream::connect((host, port)).await.context("connect")?;
        tracing::debug!(host, port, "connected");

        Ok(Self { stream })
    }

    pub async fn send(&mut self, bytes: &[u8]) -> Result<()> {
        self.stream.write_all(bytes).await.context("write")?;
        self.stream.flush().await.context("write")?;
        Ok(())
    }

    /// Read one chunk of whatever is available. Returns 0 when the peer has
    /// closed.
    pub async fn read_chunk(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.stream.read(buf).await.context("recv")
    }

    pub async fn close(mut self) -> Result<()> {
        self.stream.shutdown().await.context("shutdown")
    }
}
