//! Command table and dispatch.
//!
//! The `Dispatcher` maps command words to handlers, applies the
//! registration gate, and turns handler errors into reply markers.

use super::context::{Context, Handler};
use crate::error::HandlerError;
use crate::handlers::{ConnectHandler, GetInfoHandler, GetListHandler, StartDialogHandler};
use rendezvous_proto::{Reply, Tokens};
use std::collections::HashMap;
use tracing::{Level, debug, span};

/// Table of command handlers.
pub struct Dispatcher {
    handlers: HashMap<&'static str, Box<dyn Handler>>,
}

impl Dispatcher {
    /// Create a dispatcher with all handlers registered.
    pub fn new() -> Self {
        let mut handlers: HashMap<&'static str, Box<dyn Handler>> = HashMap::new();

        // Registration
        handlers.insert("connect", Box::new(ConnectHandler));

        // Discovery
        handlers.insert("get_list", Box::new(GetListHandler));
        handlers.insert("get_info", Box::new(GetInfoHandler));

        // Introduction
        handlers.insert("start_dialog", Box::new(StartDialogHandler));

        Self { handlers }
    }

    /// Registered command words, sorted.
    pub fn commands(&self) -> Vec<&'static str> {
        let mut commands: Vec<_> = self.handlers.keys().copied().collect();
        commands.sort_unstable();
        commands
    }

    /// Dispatch one request line and produce its reply.
    ///
    /// Never fails: every outcome, including unknown commands and malformed
    /// arguments, is a reply for the client.
    pub fn dispatch(&self, ctx: &Context<'_>, line: &str) -> Reply {
        let mut tokens = Tokens::new(line);
        let command = tokens.next_token();

        let result = match self.handlers.get(command) {
            None => Err(HandlerError::UnknownCommand(command.to_owned())),
            Some(handler) if handler.requires_registration() && !ctx.session.is_registered() => {
                Err(HandlerError::NotRegistered)
            }
            Some(handler) => {
                let span = span!(
                    Level::DEBUG,
                    "command",
                    command = %command,
                    session = %ctx.session.id(),
                    remote_addr = %ctx.session.remote(),
                );
                let _enter = span.enter();
                handler.handle(ctx, tokens)
            }
        };

        match result {
            Ok(reply) => reply,
            Err(e) => {
                debug!(command = %command, code = e.error_code(), error = %e, "Command error");
                e.to_reply()
            }
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
