//! Response header resolution.
//!
//! # Data Flow
//! ```text
//! config file `headers = [...]` + repeated `-h/--header` flags
//!     → resolver.rs (parse "Name: Value", merge over defaults)
//!     → HeaderSet (lower-cased names, last write wins)
//!     → http::response converts to a HeaderMap once at startup
//! ```
//!
//! # Design Decisions
//! - Resolution is a pure, total function; malformed specs are dropped
//! - Defaults live in a const table, never in mutable global state
//! - Values keep every colon after the first one

pub mod resolver;

pub use resolver::{parse_spec, resolve, HeaderSet, DEFAULT_HEADERS};
