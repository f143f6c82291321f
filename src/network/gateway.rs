//! Gateway - TCP listener that accepts incoming connections.
//!
//! The Gateway binds the listening socket and spawns a Connection task for
//! each incoming client.

use crate::config::{Config, LimitsConfig};
use crate::handlers::Dispatcher;
use crate::network::Connection;
use crate::network::connection::{CloseReason, classify_close};
use crate::state::{Registry, SessionIdGenerator};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, error, info, instrument, warn};

/// The Gateway accepts incoming TCP connections and spawns handlers.
pub struct Gateway {
    listener: TcpListener,
    registry: Arc<Registry>,
    dispatcher: Arc<Dispatcher>,
    limits: LimitsConfig,
    ids: SessionIdGenerator,
}

impl Gateway {
    /// Bind the gateway to the configured listen address.
    pub async fn bind(config: &Config) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(config.listen.address).await?;
        let dispatcher = Dispatcher::new();
        info!(
            address = %listener.local_addr()?,
            commands = ?dispatcher.commands(),
            "Listener bound"
        );

        Ok(Self {
            listener,
            registry: Arc::new(Registry::new()),
            dispatcher: Arc::new(dispatcher),
            limits: config.limits.clone(),
            ids: SessionIdGenerator::new(),
        })
    }

    /// Address the listener is bound to.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Shared registry of connected sessions.
    pub fn registry(&self) -> Arc<Registry> {
        Arc::clone(&self.registry)
    }

    /// Run the gateway, accepting connections forever.
    #[instrument(skip(self), name = "gateway")]
    pub async fn run(self) -> anyhow::Result<()> {
        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    if let Err(e) = stream.set_nodelay(true) {
                        debug!(%addr, error = %e, "Failed to set TCP_NODELAY");
                    }

                    let id = self.ids.next();
                    info!(%id, %addr, "Client connected");

                    let connection = Connection::new(
                        id,
                        stream,
                        addr,
                        &self.registry,
                        Arc::clone(&self.dispatcher),
                        &self.limits,
                    );

                    tokio::spawn(async move {
                        if let Err(e) = connection.run().await {
                            match classify_close(&e) {
                                CloseReason::PeerGone | CloseReason::Shutdown => {
                                    debug!(%id, %addr, error = %e, "Connection closed")
                                }
                                CloseReason::Idle => {
                                    info!(%id, %addr, error = %e, "Connection timed out")
                                }
                                CloseReason::ProtocolViolation => {
                                    warn!(%id, %addr, error = %e, "Connection dropped")
                                }
                                CloseReason::IoError => {
                                    error!(%id, %addr, error = %e, "Connection error")
                                }
                            }
                        }
                    });
                }
                Err(e) => {
                    error!(error = %e, "Failed to accept connection");
                }
            }
        }
    }
}
