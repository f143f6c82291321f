//! Test server management.
//!
//! Runs a gateway inside the test runtime on an ephemeral port.

use rendezvous::config::{Config, validate};
use rendezvous::network::Gateway;
use rendezvous::state::Registry;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// A test server instance. The gateway task is aborted on drop.
pub struct TestServer {
    address: SocketAddr,
    registry: Arc<Registry>,
    task: JoinHandle<anyhow::Result<()>>,
}

impl TestServer {
    /// Spawn a server with default limits.
    pub async fn spawn() -> anyhow::Result<Self> {
        Self::spawn_with(Config::default()).await
    }

    /// Spawn a server with the given configuration, bound to 127.0.0.1 on
    /// an ephemeral port.
    pub async fn spawn_with(mut config: Config) -> anyhow::Result<Self> {
        config.listen.address = "127.0.0.1:0".parse()?;
        if let Err(errors) = validate(&config, true) {
            anyhow::bail!("invalid test config: {errors:?}");
        }

        let gateway = Gateway::bind(&config).await?;
        let address = gateway.local_addr()?;
        let registry = gateway.registry();
        let task = tokio::spawn(gateway.run());

        Ok(Self {
            address,
            registry,
            task,
        })
    }

    /// Address clients connect to.
    pub fn address(&self) -> SocketAddr {
        self.address
    }

    /// The server's live registry.
    #[allow(dead_code)]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Poll `condition` until it holds or `limit` elapses.
#[allow(dead_code)]
pub async fn wait_for<F>(limit: Duration, mut condition: F) -> bool
where
    F: FnMut() -> bool,
{
    let deadline = tokio::time::Instant::now() + limit;
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}
