//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig (host, port)
//!     → listener.rs (parse address, bind)
//!     → tokio TcpListener handed to axum::serve
//! ```
//!
//! # Design Decisions
//! - Binding is the last step of startup; a bind failure is fatal
//! - Connection accounting is left to the HTTP stack

pub mod listener;

pub use listener::{bind, ListenerError};
