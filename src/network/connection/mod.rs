//! Connection - Handles an individual client connection.
//!
//! Each Connection runs in its own Tokio task:
//!
//! ```text
//!    ┌──────────────────────────────────────────────────┐
//!    │               Connection Task                    │
//!    │                                                  │
//!    │  Framed<S, RequestCodec>                         │
//!    │       │ request line            ▲ reply / relay  │
//!    │       ▼                         │                │
//!    │   tokio::select! ───▶ [Dispatcher] ──┘           │
//!    │       ▲                                          │
//!    │       └── relay inbox (other sessions' handlers) │
//!    └──────────────────────────────────────────────────┘
//! ```
//!
//! A reply is fully written before the next request is read. Relays are
//! written from the same task, so they never interleave with a reply line.
//!
//! The transport `S` is a `TcpStream` in the server; any duplex byte stream
//! works.

mod error_handling;

pub use error_handling::{CloseReason, classify_close};

use crate::config::LimitsConfig;
use crate::error::ConnectionError;
use crate::handlers::{Context, Dispatcher};
use crate::state::{RelayReceiver, Registry, Session, SessionId};
use futures_util::{SinkExt, StreamExt};
use rendezvous_proto::{Reply, RequestCodec};
use std::net::SocketAddr;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio::time::Instant;
use tokio_util::codec::Framed;
use tracing::{debug, info, instrument};

/// A client connection handler.
pub struct Connection<S = TcpStream> {
    session: Arc<Session>,
    relay_rx: RelayReceiver,
    framed: Framed<S, RequestCodec>,
    registry: Weak<Registry>,
    dispatcher: Arc<Dispatcher>,
    max_line: usize,
    idle_timeout: Option<Duration>,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// Create a connection handler for an accepted stream.
    pub fn new(
        id: SessionId,
        stream: S,
        addr: SocketAddr,
        registry: &Arc<Registry>,
        dispatcher: Arc<Dispatcher>,
        limits: &LimitsConfig,
    ) -> Self {
        let (session, relay_rx) = Session::new(id, addr);
        Self {
            session,
            relay_rx,
            framed: Framed::new(stream, RequestCodec::with_max_len(limits.max_line)),
            registry: Arc::downgrade(registry),
            dispatcher,
            max_line: limits.max_line,
            idle_timeout: limits.idle_timeout(),
        }
    }

    /// Run the connection until the peer leaves or an error ends it.
    ///
    /// The session is removed from the registry exactly once, whatever the
    /// outcome.
    #[instrument(skip(self), fields(session = %self.session.id(), addr = %self.session.remote()), name = "connection")]
    pub async fn run(mut self) -> Result<(), ConnectionError> {
        let result = self.serve().await;
        self.teardown();
        result
    }

    async fn serve(&mut self) -> Result<(), ConnectionError> {
        // The endpoint is known before the name; index it before the first read.
        self.registry()?.track(&self.session);

        let mut deadline = self.idle_timeout.map(|d| Instant::now() + d);

        loop {
            tokio::select! {
                frame = self.framed.next() => match frame {
                    Some(Ok(line)) => {
                        debug!(raw = %line, "Received request");
                        let reply = self.handle_request(&line)?;
                        self.framed.send(reply).await?;
                        deadline = self.idle_timeout.map(|d| Instant::now() + d);
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => {
                        debug!("Peer closed connection");
                        return Ok(());
                    }
                },
                Some(relay) = self.relay_rx.recv() => {
                    debug!(relay = %relay, "Sending relay");
                    let result = self.framed.send(relay).await;
                    self.session.relay_done();
                    result?;
                }
                () = tokio::time::sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    return Err(ConnectionError::IdleTimeout(self.idle_timeout.unwrap_or_default()));
                }
            }
        }
    }

    fn handle_request(&self, line: &str) -> Result<Reply, ConnectionError> {
        let registry = self.registry()?;
        let ctx = Context::new(&self.session, &registry, self.max_line);
        Ok(self.dispatcher.dispatch(&ctx, line))
    }

    fn registry(&self) -> Result<Arc<Registry>, ConnectionError> {
        self.registry.upgrade().ok_or(ConnectionError::RegistryGone)
    }

    fn teardown(&mut self) {
        let name = self.session.name();
        if let Some(registry) = self.registry.upgrade() {
            registry.remove(&self.session);
        }
        self.relay_rx.close();
        if name.is_empty() {
            info!("Client disconnected");
        } else {
            info!(name = %name, "Client disconnected");
        }
    }
}
