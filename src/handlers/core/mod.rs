//! Core handler infrastructure.
//!
//! This module contains the fundamental types of the command handler
//! system: the [`Handler`] trait, the per-request [`Context`], and the
//! [`Dispatcher`] that owns the command table.
//!
//! ## Registration Gate
//!
//! Every handler declares whether it needs a registered session via
//! [`Handler::requires_registration`]. The dispatcher answers
//! `<NOT REGISTERED USER>` before the handler sees its arguments, so
//! post-registration handlers may assume the session has a name.

pub mod context;
pub mod dispatcher;

pub use context::{Context, Handler};
pub use dispatcher::Dispatcher;
