//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use in2http::config::{ListenerConfig, ServerConfig};
use in2http::lifecycle::{self, Shutdown};

/// Config bound to an ephemeral loopback port.
#[allow(dead_code)]
pub fn loopback_config(headers: &[&str]) -> ServerConfig {
    ServerConfig {
        listener: ListenerConfig {
            host: "127.0.0.1".into(),
            port: 0,
        },
        headers: headers.iter().map(|h| h.to_string()).collect(),
    }
}

/// Start a server replaying `stdin` with the given header specs.
///
/// Returns the bound address; the server stops when `shutdown` triggers.
#[allow(dead_code)]
pub async fn start_server(stdin: &'static [u8], headers: &[&str], shutdown: &Shutdown) -> SocketAddr {
    let ready = lifecycle::initialize(&loopback_config(headers), stdin)
        .await
        .unwrap();
    let addr = ready.listener.local_addr().unwrap();

    let signal = shutdown.signalled();
    tokio::spawn(async move {
        let _ = ready.serve(signal).await;
    });

    addr
}

/// HTTP client without connection pooling or system proxies.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}
