//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use super::limits::MIN_LINE;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Line capacity below [`MIN_LINE`].
    #[error("limits.max_line must be at least {min} bytes, got {0}", min = MIN_LINE)]
    LineTooShort(usize),
    /// Port 0 outside of tests.
    #[error("listen.address port must not be 0")]
    ZeroPort,
    /// Peers and their endpoints are IPv4 only.
    #[error("listen.address must be an IPv4 address, got {0}")]
    NotIpv4(std::net::IpAddr),
}

/// Validate a configuration, returning all errors found.
///
/// Port 0 is only rejected when `allow_ephemeral` is false; tests bind to an
/// ephemeral port on purpose.
pub fn validate(config: &Config, allow_ephemeral: bool) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.limits.max_line < MIN_LINE {
        errors.push(ValidationError::LineTooShort(config.limits.max_line));
    }

    if !allow_ephemeral && config.listen.address.port() == 0 {
        errors.push(ValidationError::ZeroPort);
    }

    if !config.listen.address.is_ipv4() {
        errors.push(ValidationError::NotIpv4(config.listen.address.ip()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
