//! TCP listener binding.
//!
//! # Responsibilities
//! - Resolve the configured host and port into a socket address
//! - Bind the listener, surfacing failures as fatal startup errors
//! - Serve IPv4 and IPv6 from one socket when bound to `::`
//!
//! # Design Decisions
//! - `IPV6_V6ONLY` is cleared on the unspecified IPv6 address, so the
//!   outcome does not depend on the host's `bindv6only` sysctl
//! - Hosts without IPv6 fall back to `0.0.0.0`; address-in-use and
//!   permission errors never fall back

use socket2::{Domain, Protocol, Socket, Type};
use std::io::ErrorKind;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ListenerConfig;

const BACKLOG: i32 = 1024;

/// Error type for listener operations.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// The configured host is not an IP address.
    #[error("Invalid bind address {host:?}: {source}")]
    Address {
        host: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Failed to bind to address.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Socket address described by the listener config.
pub fn socket_addr(config: &ListenerConfig) -> Result<SocketAddr, ListenerError> {
    let ip: IpAddr = config.host.parse().map_err(|source| ListenerError::Address {
        host: config.host.clone(),
        source,
    })?;
    Ok(SocketAddr::new(ip, config.port))
}

/// Bind to the configured address.
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, ListenerError> {
    let addr = socket_addr(config)?;

    let listener = match create_listener(addr) {
        Ok(listener) => listener,
        Err(source) if is_any_ipv6(addr) && !is_fatal(&source) => {
            let fallback = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), addr.port());
            tracing::warn!(
                address = %addr,
                fallback = %fallback,
                error = %source,
                "IPv6 unavailable, listening on IPv4 only"
            );
            create_listener(fallback).map_err(|source| ListenerError::Bind {
                addr: fallback,
                source,
            })?
        }
        Err(source) => return Err(ListenerError::Bind { addr, source }),
    };

    let local_addr = listener
        .local_addr()
        .map_err(|source| ListenerError::Bind { addr, source })?;

    tracing::info!(
        address = %local_addr,
        "Listener bound"
    );

    Ok(listener)
}

/// Create a non-blocking listening socket on `addr`.
fn create_listener(addr: SocketAddr) -> std::io::Result<TcpListener> {
    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))?;

    if is_any_ipv6(addr) {
        socket.set_only_v6(false)?;
    }

    // SO_REUSEADDR only skips TIME_WAIT; a live listener still conflicts.
    socket.set_reuse_address(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(BACKLOG)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

fn is_any_ipv6(addr: SocketAddr) -> bool {
    addr.ip() == IpAddr::V6(Ipv6Addr::UNSPECIFIED)
}

fn is_fatal(err: &std::io::Error) -> bool {
    matches!(err.kind(), ErrorKind::AddrInUse | ErrorKind::PermissionDenied)
}
