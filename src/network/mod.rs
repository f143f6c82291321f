//! Network module.
//!
//! Contains the Gateway (TCP listener) and the per-client Connection task.

mod connection;
mod gateway;

pub use connection::{CloseReason, Connection, classify_close};
pub use gateway::Gateway;
