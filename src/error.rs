//! Unified error handling for the rendezvous server.
//!
//! Handler errors are recoverable and always answered on the wire; connection
//! errors end a single session and are only logged.

use rendezvous_proto::{ProtocolError, Query, Reply};
use std::time::Duration;
use thiserror::Error;

// ============================================================================
// Handler Errors (command processing)
// ============================================================================

/// Errors that can occur during command handling.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Wrong argument count, unparsable address or port, trailing tokens.
    #[error("invalid request data")]
    InvalidData,

    /// Command other than `connect` before a successful `connect`.
    #[error("not registered")]
    NotRegistered,

    /// Command word not in the dispatch table.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Another session holds the requested name.
    #[error("name in use: {0}")]
    NameInUse(String),

    /// Target of `get_info` or `start_dialog` is not registered.
    #[error("unknown client: {name}")]
    UnknownClient { query: Query, name: String },
}

impl HandlerError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidData => "invalid_data",
            Self::NotRegistered => "not_registered",
            Self::UnknownCommand(_) => "unknown_command",
            Self::NameInUse(_) => "name_in_use",
            Self::UnknownClient { .. } => "unknown_client",
        }
    }

    /// Convert to the reply marker sent back to the client.
    pub fn to_reply(&self) -> Reply {
        match self {
            Self::InvalidData => Reply::InvalidRequestData,
            Self::NotRegistered => Reply::NotRegisteredUser,
            Self::UnknownCommand(_) => Reply::InvalidRequestCommand,
            Self::NameInUse(_) => Reply::NameAlreadyExists,
            Self::UnknownClient { query, .. } => Reply::UnknownClient(*query),
        }
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<Reply, HandlerError>;

// ============================================================================
// Connection Errors (session teardown)
// ============================================================================

/// Reasons a connection stops serving requests.
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// Transport failure or a request over the line capacity.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The registry was dropped; the server is shutting down.
    #[error("registry no longer available")]
    RegistryGone,

    /// No complete request within the configured idle timeout.
    #[error("idle for {0:?}")]
    IdleTimeout(Duration),
}
