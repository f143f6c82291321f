//! Test rendezvous client.
//!
//! Speaks the raw line protocol so tests can send malformed input and
//! assert on exact reply text.

use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::time::timeout;

/// A test client.
pub struct TestClient {
    reader: BufReader<OwnedReadHalf>,
    writer: BufWriter<OwnedWriteHalf>,
    local_addr: SocketAddr,
}

impl TestClient {
    /// Connect to a test server.
    pub async fn connect(address: SocketAddr) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(address).await?;
        let local_addr = stream.local_addr()?;

        let (read_half, write_half) = stream.into_split();
        Ok(Self {
            reader: BufReader::new(read_half),
            writer: BufWriter::new(write_half),
            local_addr,
        })
    }

    /// Connect and register under `name` with the given private endpoint.
    #[allow(dead_code)]
    pub async fn connect_as(
        address: SocketAddr,
        name: &str,
        private: &str,
    ) -> anyhow::Result<Self> {
        let mut client = Self::connect(address).await?;
        let (ip, port) = private
            .rsplit_once(':')
            .ok_or_else(|| anyhow::anyhow!("private endpoint needs a port: {private}"))?;
        let reply = client.request(&format!("connect {name} {ip} {port}")).await?;
        anyhow::ensure!(reply == "confirm_connection", "registration failed: {reply}");
        Ok(client)
    }

    /// Client side of the connection, as seen by the server.
    #[allow(dead_code)]
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Write bytes exactly as given.
    pub async fn send_raw(&mut self, data: &[u8]) -> anyhow::Result<()> {
        self.writer.write_all(data).await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Send one request line terminated by CRLF.
    pub async fn send(&mut self, line: &str) -> anyhow::Result<()> {
        self.send_raw(format!("{line}\r\n").as_bytes()).await
    }

    /// Receive a single line with its terminator stripped.
    pub async fn recv(&mut self) -> anyhow::Result<String> {
        self.recv_timeout(Duration::from_secs(5)).await
    }

    /// Receive a line with a timeout.
    pub async fn recv_timeout(&mut self, dur: Duration) -> anyhow::Result<String> {
        let mut line = String::new();
        let n = timeout(dur, self.reader.read_line(&mut line)).await??;
        anyhow::ensure!(n > 0, "connection closed by server");
        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }

    /// Receive a single line exactly as sent, terminator included.
    #[allow(dead_code)]
    pub async fn recv_raw(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        let n = timeout(Duration::from_secs(5), self.reader.read_line(&mut line)).await??;
        anyhow::ensure!(n > 0, "connection closed by server");
        Ok(line)
    }

    /// Send a request and wait for its reply.
    pub async fn request(&mut self, line: &str) -> anyhow::Result<String> {
        self.send(line).await?;
        self.recv().await
    }

    /// Assert that the server closes the connection without sending more.
    #[allow(dead_code)]
    pub async fn expect_closed(&mut self) -> anyhow::Result<()> {
        let mut line = String::new();
        match timeout(Duration::from_secs(5), self.reader.read_line(&mut line)).await? {
            Ok(0) => Ok(()),
            Ok(_) => anyhow::bail!("expected close, got line: {line:?}"),
            // A reset also counts as closed.
            Err(_) => Ok(()),
        }
    }

    /// Assert that nothing arrives within `dur`.
    #[allow(dead_code)]
    pub async fn expect_silence(&mut self, dur: Duration) -> anyhow::Result<()> {
        match self.recv_timeout(dur).await {
            Ok(line) => anyhow::bail!("unexpected line: {line:?}"),
            Err(_) => Ok(()),
        }
    }
}
