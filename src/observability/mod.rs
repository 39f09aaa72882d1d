//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! startup and listener events
//!     → logging.rs (structured log events on stderr)
//! per-request spans
//!     → tower_http::trace::TraceLayer (debug level)
//! ```
//!
//! # Design Decisions
//! - Request handling logs nothing itself
//! - Log level configurable via `RUST_LOG`

pub mod logging;
