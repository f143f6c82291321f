//! State management module.
//!
//! Contains the client [`Registry`] (shared server state) and the per-connection
//! [`Session`] handles it indexes.

mod registry;
mod session;
mod uid;

pub use registry::Registry;
pub use session::{RelayReceiver, Session, SessionInfo};
pub use uid::{SessionId, SessionIdGenerator};
