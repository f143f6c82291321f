//! Command handler context and trait.

use crate::error::HandlerResult;
use crate::state::{Registry, Session};
use rendezvous_proto::{LINE_TERMINATOR, Tokens};
use std::sync::Arc;

/// Handler context passed to each command handler.
pub struct Context<'a> {
    /// The requesting session.
    pub session: &'a Arc<Session>,
    /// Shared client registry.
    pub registry: &'a Registry,
    /// Line capacity of the requesting connection.
    pub max_line: usize,
}

impl<'a> Context<'a> {
    /// Build the context for one request.
    pub fn new(session: &'a Arc<Session>, registry: &'a Registry, max_line: usize) -> Self {
        Self {
            session,
            registry,
            max_line,
        }
    }

    /// Bytes available for reply text once the terminator is accounted for.
    #[inline]
    pub fn reply_budget(&self) -> usize {
        self.max_line.saturating_sub(LINE_TERMINATOR.len())
    }
}

/// A command handler.
///
/// Handlers run to completion without suspending; anything that must reach
/// another connection goes through that session's relay inbox.
pub trait Handler: Send + Sync {
    /// Handle one request. `args` holds the tokens after the command word.
    fn handle(&self, ctx: &Context<'_>, args: Tokens<'_>) -> HandlerResult;

    /// Whether the session must have completed `connect` first.
    fn requires_registration(&self) -> bool {
        true
    }
}
