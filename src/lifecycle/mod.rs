//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Initializing (startup.rs):
//!     Capture stdin → Resolve headers → Bind listener → Ready
//!
//! Serving:
//!     Ready::serve answers requests until the process exits
//!     (or, when embedded, until Shutdown::trigger)
//! ```
//!
//! # Design Decisions
//! - Initializing → Serving happens once and never reverses
//! - A failure anywhere in Initializing aborts before the port is open

pub mod shutdown;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{initialize, Ready};
