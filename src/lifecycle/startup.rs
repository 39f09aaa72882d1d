//! Startup orchestration.
//!
//! # Responsibilities
//! - Capture standard input
//! - Resolve response headers
//! - Bind the listener
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Steps run in order, not concurrently
//! - The listener is bound last so traffic only arrives once the payload is ready

use tokio::io::AsyncRead;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::StartupError;
use crate::headers;
use crate::http::{to_header_map, HttpServer};
use crate::input::CapturedInput;
use crate::net;

/// Everything needed to start serving. Only produced by [`initialize`].
pub struct Ready {
    pub server: HttpServer,
    pub listener: TcpListener,
}

impl Ready {
    /// Serve until `shutdown` resolves.
    pub async fn serve<F>(self, shutdown: F) -> Result<(), StartupError>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        self.server
            .run(self.listener, shutdown)
            .await
            .map_err(StartupError::Serve)
    }
}

/// Capture `stdin`, resolve headers, then bind the listener.
pub async fn initialize<R>(config: &ServerConfig, stdin: R) -> Result<Ready, StartupError>
where
    R: AsyncRead + Unpin,
{
    let input = CapturedInput::capture(stdin)
        .await
        .map_err(StartupError::Stdin)?;

    tracing::debug!(bytes = input.len(), "Captured stdin");

    let resolved = headers::resolve(&config.headers);
    for (name, value) in resolved.iter() {
        tracing::debug!(header = %name, value = %value, "Response header");
    }
    let header_map = to_header_map(&resolved);

    let listener = net::bind(&config.listener).await?;

    tracing::info!(
        bytes = input.len(),
        headers = header_map.len(),
        "Ready to serve"
    );

    Ok(Ready {
        server: HttpServer::new(header_map, &input),
        listener,
    })
}
