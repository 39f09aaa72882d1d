//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum Router with a single catch-all handler
//! - Wire up tracing middleware
//! - Serve on a bound listener until the shutdown future resolves

use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
    response::Response,
    routing::any,
    Router,
};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::http::response;
use crate::input::CapturedInput;

/// Application state injected into the handler.
///
/// Both fields are read-only once the server is built.
#[derive(Clone)]
pub struct AppState {
    pub headers: Arc<HeaderMap>,
    pub body: Bytes,
}

/// HTTP server that replays captured input.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server answering every request with `headers` and `input`.
    pub fn new(headers: HeaderMap, input: &CapturedInput) -> Self {
        let state = AppState {
            headers: Arc::new(headers),
            body: input.bytes(),
        };

        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(stdin_handler))
            .route("/", any(stdin_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// The router, for embedding or driving without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server on `listener` until `shutdown` resolves.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Answers every method on every path with the captured input.
async fn stdin_handler(State(state): State<AppState>) -> Response {
    response::replay(&state.headers, state.body.clone())
}
