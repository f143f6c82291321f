//! Error handling utilities for connection teardown.
//!
//! Classifies the error that ended a connection so ordinary disconnects are
//! not logged like protocol violations.

use crate::error::ConnectionError;
use rendezvous_proto::ProtocolError;
use std::io;

/// Classification of the error that closed a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Peer reset, aborted, or vanished mid-write.
    PeerGone,
    /// The peer sent something the protocol does not allow.
    ProtocolViolation,
    /// No complete request within the idle timeout.
    Idle,
    /// The server is shutting down.
    Shutdown,
    /// Any other transport failure.
    IoError,
}

/// Classify a connection error into an actionable category.
pub fn classify_close(e: &ConnectionError) -> CloseReason {
    match e {
        ConnectionError::Protocol(ProtocolError::RequestTooLong { .. }) => {
            CloseReason::ProtocolViolation
        }
        ConnectionError::Protocol(ProtocolError::Io(io_err)) => match io_err.kind() {
            io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::BrokenPipe
            | io::ErrorKind::UnexpectedEof => CloseReason::PeerGone,
            _ => CloseReason::IoError,
        },
        ConnectionError::IdleTimeout(_) => CloseReason::Idle,
        ConnectionError::RegistryGone => CloseReason::Shutdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_reset_is_peer_gone() {
        let e = ConnectionError::Protocol(ProtocolError::Io(io::Error::from(
            io::ErrorKind::ConnectionReset,
        )));
        assert_eq!(classify_close(&e), CloseReason::PeerGone);
    }

    #[test]
    fn test_too_long_is_violation() {
        let e = ConnectionError::Protocol(ProtocolError::RequestTooLong {
            actual: 2048,
            limit: 1024,
        });
        assert_eq!(classify_close(&e), CloseReason::ProtocolViolation);
    }

    #[test]
    fn test_other_reasons() {
        assert_eq!(
            classify_close(&ConnectionError::IdleTimeout(Duration::from_secs(1))),
            CloseReason::Idle
        );
        assert_eq!(
            classify_close(&ConnectionError::RegistryGone),
            CloseReason::Shutdown
        );
        let e = ConnectionError::Protocol(ProtocolError::Io(io::Error::from(
            io::ErrorKind::PermissionDenied,
        )));
        assert_eq!(classify_close(&e), CloseReason::IoError);
    }
}
