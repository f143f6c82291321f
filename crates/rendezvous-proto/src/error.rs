//! Error types for the rendezvous protocol library.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Errors raised while framing or encoding protocol lines.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Underlying transport failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A request grew past the line capacity without a terminator.
    #[error("request too long: {actual} bytes buffered without terminator (limit {limit})")]
    RequestTooLong {
        /// Bytes buffered for the pending request.
        actual: usize,
        /// Configured line capacity.
        limit: usize,
    },
}
