//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use code_watch::config::TimeoutConfig;
use code_watch::probe::http::client_builder;
use code_watch::probe::HttpProber;

/// Start a mock backend that answers every request with `status` and an
/// optional `Location` header.
#[allow(dead_code)]
pub async fn start_redirect_backend(status: u16, location: Option<&'static str>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let mut buf = [0u8; 1024];
                        let _ = socket.read(&mut buf).await;

                        let status_text = match status {
                            200 => "200 OK",
                            301 => "301 Moved Permanently",
                            302 => "302 Found",
                            307 => "307 Temporary Redirect",
                            404 => "404 Not Found",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };
                        let location_header = location
                            .map(|l| format!("Location: {}\r\n", l))
                            .unwrap_or_default();

                        let response_str = format!(
                            "HTTP/1.1 {}\r\n{}Content-Length: 0\r\nConnection: close\r\n\r\n",
                            status_text, location_header
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// An address nothing is listening on.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Prober with production settings, minus system proxies.
pub fn prober() -> HttpProber {
    let timeouts = TimeoutConfig {
        connect_secs: 2,
        request_secs: 5,
    };
    HttpProber::with_client(client_builder(&timeouts).no_proxy().build().unwrap())
}
