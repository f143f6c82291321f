//! Command handlers.
//!
//! This module contains the Handler trait and the dispatcher that routes
//! incoming request lines to the appropriate handler.
//!
//! Handlers receive the argument [`Tokens`](rendezvous_proto::Tokens) that
//! follow the command word, borrowed straight from the request line, and
//! return a typed [`Reply`](rendezvous_proto::Reply) or a [`HandlerError`]
//! that maps to a failure marker.

mod connection;
mod core;
mod helpers;
mod messaging;
mod user_query;

pub use self::core::{Context, Dispatcher, Handler};
pub use crate::error::{HandlerError, HandlerResult};
pub use connection::ConnectHandler;
pub use helpers::{expect_args, parse_port};
pub use messaging::StartDialogHandler;
pub use user_query::{GetInfoHandler, GetListHandler};
