//! End-to-end tests against a local TCP server speaking canned HTTP.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use httphead::http::request::{RequestOptions, build_request};
use httphead::http::response::{ResponseScanner, ScanState, extract_status_code};
use httphead::net::{CHUNK_SIZE, Connection};

/// Serve one connection: read until the request's blank line, write
/// `response`, then close.
async fn one_shot_server(response: &'static [u8]) -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        let (mut socket, _addr) = listener.accept().await.unwrap();

        let mut buf = Vec::new();
        let mut chunk = [0u8; 256];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }

        socket.write_all(response).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    port
}

async fn fetch(port: u16, opts: &RequestOptions) -> ResponseScanner {
    let request = build_request("/", "127.0.0.1", None, opts);

    let mut conn = Connection::open("127.0.0.1", port).await.unwrap();
    conn.send(&request.as_bytes()).await.unwrap();

    let mut scanner = ResponseScanner::new();
    let mut chunk = [0u8; CHUNK_SIZE];
    loop {
        let n = conn.read_chunk(&mut chunk).await.unwrap();
        if n == 0 {
            scanner.finish();
            break;
        }
        if scanner.push(&chunk[..n]) == ScanState::HeaderComplete {
            break;
        }
    }

    conn.close().await.unwrap();
    scanner
}

#[tokio::test]
async fn test_full_round_trip() {
    let port =
        one_shot_server(b"HTTP/1.0 200 OK\r\nServer: canned\r\n\r\nhello world").await;

    let scanner = fetch(port, &RequestOptions::default()).await;

    assert_eq!(scanner.state(), ScanState::HeaderComplete);
    assert_eq!(
        scanner.header_block().unwrap(),
        b"HTTP/1.0 200 OK\r\nServer: canned\r\n"
    );
    assert_eq!(
        extract_status_code(scanner.header_block().unwrap()),
        Some("200")
    );
}

#[tokio::test]
async fn test_server_closes_before_boundary() {
    let port = one_shot_server(b"HTTP/1.0 200 OK\r\nSer").await;

    let scanner = fetch(port, &RequestOptions::default()).await;

    assert_eq!(scanner.state(), ScanState::Closed);
    assert_eq!(scanner.header_block(), None);
    assert_eq!(scanner.buffered(), b"HTTP/1.0 200 OK\r\nSer");
}

#[tokio::test]
async fn test_connect_failure_names_the_operation() {
    // Port 1 on localhost is almost certainly closed.
    let err = Connection::open("127.0.0.1", 1).await.unwrap_err();

    assert!(format!("{err:#}").starts_with("connect:"));
}
