//! Fatal startup errors.

use std::fmt;
use thiserror::Error;

use crate::config::ConfigError;
use crate::net::ListenerError;

/// Anything that stops the process before it starts serving.
///
/// `Debug` prints the same text as `Display`: returning this from `main`
/// is the single diagnostic written to stderr.
#[derive(Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unable to read from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error(transparent)]
    Listener(#[from] ListenerError),

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

impl fmt::Debug for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
