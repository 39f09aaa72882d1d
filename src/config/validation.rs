//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the listener host is a literal IP address
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Header specs are never validated here; malformed ones are ignored later

use std::net::IpAddr;
use thiserror::Error;

use crate::config::schema::ServerConfig;

/// A single semantic problem found in a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The listener host is empty.
    #[error("listener.host must not be empty")]
    EmptyHost,

    /// The listener host is not an IP address.
    #[error("listener.host {0:?} is not a valid IP address")]
    InvalidHost(String),
}

/// Check a config for semantic errors.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let host = config.listener.host.as_str();
    if host.is_empty() {
        errors.push(ValidationError::EmptyHost);
    } else if host.parse::<IpAddr>().is_err() {
        errors.push(ValidationError::InvalidHost(config.listener.host.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
