//! Per-connection session handle.
//!
//! A [`Session`] is the part of a connection other sessions can see: its
//! name, its endpoints, and a relay inbox. The connection task owns the
//! socket and the receiving end of the inbox; the [`Registry`](super::Registry)
//! and handlers only ever hold `Arc<Session>`.

use super::uid::SessionId;
use parking_lot::RwLock;
use rendezvous_proto::Relay;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::mpsc;
use tracing::debug;

/// Receiving end of a session's relay inbox.
pub type RelayReceiver = mpsc::Receiver<Relay>;

/// Mutable, cross-session visible fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    /// Display name; empty until a successful `connect`.
    pub name: String,
    /// Endpoint the peer declared for its local network.
    pub private: SocketAddrV4,
}

impl Default for SessionInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            private: SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 0),
        }
    }
}

/// Shared handle to one client connection.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    remote: SocketAddr,
    info: RwLock<SessionInfo>,
    relay_tx: mpsc::Sender<Relay>,
    relay_in_flight: AtomicBool,
}

impl Session {
    /// Create a session for a connection observed at `remote`.
    ///
    /// Returns the shared handle and the relay inbox the connection task
    /// drains. The inbox holds at most one relay.
    pub fn new(id: SessionId, remote: SocketAddr) -> (Arc<Self>, RelayReceiver) {
        let (relay_tx, relay_rx) = mpsc::channel(1);
        let session = Arc::new(Self {
            id,
            remote,
            info: RwLock::new(SessionInfo::default()),
            relay_tx,
            relay_in_flight: AtomicBool::new(false),
        });
        (session, relay_rx)
    }

    /// Process-unique connection identifier.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Observed TCP peer address.
    pub fn remote(&self) -> SocketAddr {
        self.remote
    }

    /// Current display name (empty when unregistered).
    pub fn name(&self) -> String {
        self.info.read().name.clone()
    }

    /// Whether the session holds a name.
    pub fn is_registered(&self) -> bool {
        !self.info.read().name.is_empty()
    }

    /// Endpoint declared by the last successful `connect`, `0.0.0.0:0`
    /// before that.
    pub fn private_endpoint(&self) -> SocketAddrV4 {
        self.info.read().private
    }

    /// Record the endpoint declared by `connect`.
    pub fn set_private_endpoint(&self, endpoint: SocketAddrV4) {
        self.info.write().private = endpoint;
    }

    /// Consistent copy of name and private endpoint.
    pub fn info(&self) -> SessionInfo {
        self.info.read().clone()
    }

    /// Only the registry renames sessions, under its own lock.
    pub(super) fn set_name(&self, name: &str) {
        let mut info = self.info.write();
        info.name.clear();
        info.name.push_str(name);
    }

    /// Queue a one-way relay for this session's connection.
    ///
    /// Returns `false` when the relay is dropped: either a previous relay is
    /// still being written, or the connection is already gone.
    pub fn send_relay(&self, relay: Relay) -> bool {
        if self.relay_in_flight.swap(true, Ordering::AcqRel) {
            debug!(session = %self.id, "Relay already in flight, dropping");
            return false;
        }

        match self.relay_tx.try_send(relay) {
            Ok(()) => true,
            Err(_) => {
                self.relay_in_flight.store(false, Ordering::Release);
                debug!(session = %self.id, "Relay inbox closed, dropping");
                false
            }
        }
    }

    /// Mark the in-flight relay as written (or failed).
    pub fn relay_done(&self) {
        self.relay_in_flight.store(false, Ordering::Release);
    }

    /// Whether a relay is queued or being written.
    pub fn relay_in_flight(&self) -> bool {
        self.relay_in_flight.load(Ordering::Acquire)
    }
}
