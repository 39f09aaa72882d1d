//! Serve standard input over HTTP.
//!
//! Everything piped into the process is read once at startup and replayed as
//! the body of every response, on every path and for every method, under a
//! resolved set of response headers.
//!
//! # Architecture Overview
//!
//! ```text
//!   stdin ──▶ input ─────────────┐
//!                                ▼
//!   cli/config ──▶ headers ──▶ lifecycle::startup ──▶ net::listener
//!                                │
//!                                ▼
//!   Client ◀──── http::response ◀── http::server (catch-all route)
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod headers;
pub mod http;
pub mod input;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::ServerConfig;
pub use error::StartupError;
pub use headers::{resolve, HeaderSet};
pub use http::HttpServer;
pub use input::CapturedInput;
pub use lifecycle::Shutdown;
