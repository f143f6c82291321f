//! Client registry: who is online, by name and by endpoint.
//!
//! # Thread Safety
//!
//! Both indices sit behind one `RwLock`, so every operation sees and leaves
//! them consistent. Lock order: registry lock → session info lock. Sessions
//! never take the registry lock.

use super::session::Session;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Default)]
struct Indices {
    /// Registered sessions by display name.
    by_name: BTreeMap<String, Arc<Session>>,
    /// Live sessions by observed remote endpoint.
    by_endpoint: HashMap<SocketAddr, Arc<Session>>,
}

/// Shared index of connected sessions.
///
/// Invariant: a session stored under name `N` has `session.name() == N`.
#[derive(Debug, Default)]
pub struct Registry {
    indices: RwLock<Indices>,
}

fn same(a: &Arc<Session>, b: &Session) -> bool {
    a.id() == b.id()
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `name` for `session`, releasing the session's previous name.
    ///
    /// Returns `false` without changing anything when another session holds
    /// `name`. Claiming the name the session already holds succeeds.
    /// Callers must not pass an empty name.
    pub fn register(&self, name: &str, session: &Arc<Session>) -> bool {
        debug_assert!(!name.is_empty(), "registered names are never empty");
        let mut indices = self.indices.write();

        if let Some(holder) = indices.by_name.get(name)
            && !same(holder, session)
        {
            return false;
        }

        let old = session.name();
        if !old.is_empty()
            && old != name
            && indices.by_name.get(&old).is_some_and(|s| same(s, session))
        {
            indices.by_name.remove(&old);
            debug!(session = %session.id(), old = %old, new = %name, "Client renamed");
        }

        indices
            .by_name
            .insert(name.to_owned(), Arc::clone(session));
        session.set_name(name);
        true
    }

    /// Session registered under `name`.
    pub fn lookup(&self, name: &str) -> Option<Arc<Session>> {
        self.indices.read().by_name.get(name).cloned()
    }

    /// Session connected from `addr`, registered or not.
    pub fn lookup_endpoint(&self, addr: &SocketAddr) -> Option<Arc<Session>> {
        self.indices.read().by_endpoint.get(addr).cloned()
    }

    /// Add `session` to the endpoint index.
    pub fn track(&self, session: &Arc<Session>) {
        self.indices
            .write()
            .by_endpoint
            .insert(session.remote(), Arc::clone(session));
    }

    /// Drop `session` from both indices. Idempotent; entries owned by other
    /// sessions are left alone.
    pub fn remove(&self, session: &Session) {
        let mut indices = self.indices.write();

        let name = session.name();
        if !name.is_empty() && indices.by_name.get(&name).is_some_and(|s| same(s, session)) {
            indices.by_name.remove(&name);
        }

        let remote = session.remote();
        if indices
            .by_endpoint
            .get(&remote)
            .is_some_and(|s| same(s, session))
        {
            indices.by_endpoint.remove(&remote);
        }

        session.set_name("");
    }

    /// Snapshot of registered names, in registry order.
    pub fn names(&self) -> Vec<String> {
        self.indices.read().by_name.keys().cloned().collect()
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.indices.read().by_name.len()
    }

    /// Whether no name is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of live connections in the endpoint index.
    pub fn connection_count(&self) -> usize {
        self.indices.read().by_endpoint.len()
    }
}
