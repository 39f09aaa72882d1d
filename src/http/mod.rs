//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, catch-all route)
//!     → response.rs (status 200 + resolved headers + captured body)
//!     → Send to client
//! ```

pub mod response;
pub mod server;

pub use response::to_header_map;
pub use server::HttpServer;
