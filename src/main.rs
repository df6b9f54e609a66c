//! httphead - show http header of a website
//!
//! Issues a single HTTP/1.0 GET request and prints the response headers, or
//! with `-q` only the status code. One connection, one request, no retries.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use httphead::cli::{Cli, LICENSE, VERSION};
use httphead::http::auth::basic_credentials;
use httphead::http::request::build_request;
use httphead::http::response::{ResponseScanner, ScanState, extract_status_code};
use httphead::http::url::decompose;
use httphead::net::{CHUNK_SIZE, Connection};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.version {
        println!("{VERSION}");
        return ExitCode::SUCCESS;
    }
    if cli.license {
        print!("{LICENSE}");
        return ExitCode::SUCCESS;
    }

    let Some(url) = cli.url.clone() else {
        // A missing URL shows usage and is not treated as failure.
        let _ = Cli::command().print_help();
        return ExitCode::SUCCESS;
    };

    match run(&cli, &url).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Renders as "<operation>: <system error message>".
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli, url: &str) -> Result<()> {
    let parts = decompose(url);
    tracing::debug!(
        host = %parts.host,
        port = ?parts.port,
        path = %parts.path,
        "decomposed URL"
    );

    let credentials = basic_credentials(parts.user.as_deref(), parts.password.as_deref());
    let opts = cli.request_options(credentials);
    let request = build_request(&parts.path, &parts.host, parts.port.as_deref(), &opts);

    // atoi semantics: a non-numeric port degrades to 0 and fails at connect
    // time. Default is 80.
    let port = parts.port.as_deref().map_or(80, |p| p.parse().unwrap_or(0));

    let mut conn = Connection::open(&parts.host, port).await?;

    let mut stdout = std::io::stdout();
    if cli.show_request {
        stdout.write_all(&request.as_bytes())?;
        stdout.write_all(b"Response:\n\n")?;
        stdout.flush()?;
    }

    conn.send(&request.as_bytes()).await?;

    let mut scanner = ResponseScanner::new();
    let mut chunk = [0u8; CHUNK_SIZE];

    loop {
        let n = conn.read_chunk(&mut chunk).await?;
        if n == 0 {
            scanner.finish();
            break;
        }

        let state = scanner.push(&chunk[..n]);

        if cli.status_only {
            // The status line usually arrives well before the boundary;
            // stop reading as soon as a code can be extracted.
            if let Some(code) = extract_status_code(scanner.buffered()) {
                println!("{code}");
                break;
            }
        }

        if state == ScanState::HeaderComplete {
            break;
        }
    }

    if !cli.status_only {
        if let Some(block) = scanner.header_block() {
            stdout.write_all(block)?;
        } else {
            // Stream ended without complete headers; flush what arrived.
            tracing::warn!("stream ended without complete headers");
            stdout.write_all(scanner.buffered())?;
        }
        stdout.flush()?;
    }

    conn.close().await?;
    Ok(())
}
