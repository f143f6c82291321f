//! rendezvousd - rendezvous server daemon.
//!
//! Usage: `rendezvousd <port> [config.toml]`

use anyhow::Context;
use rendezvous::config::Config;
use rendezvous::network::Gateway;
use rendezvous::telemetry;
use std::process::ExitCode;
use tracing::{error, info};

const USAGE: &str = "Usage: rendezvousd <port> [config.toml]";

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (port, config_path) = match args.as_slice() {
        [port] => (port, None),
        [port, path] => (port, Some(path)),
        _ => {
            eprintln!("{USAGE}");
            return Ok(ExitCode::from(2));
        }
    };

    let Ok(port) = port.parse::<u16>() else {
        eprintln!("invalid port: {port}\n{USAGE}");
        return Ok(ExitCode::from(2));
    };

    let config = match config_path {
        Some(path) => Config::load(path).with_context(|| format!("failed to load {path}"))?,
        None => Config::default(),
    };
    let config = config.with_port(port).validated()?;

    telemetry::init(&config.log);

    info!(
        address = %config.listen.address,
        max_line = config.limits.max_line,
        "Starting rendezvousd"
    );

    let gateway = Gateway::bind(&config).await.map_err(|e| {
        error!(address = %config.listen.address, error = %e, "Failed to bind");
        e
    })?;

    tokio::select! {
        result = gateway.run() => {
            if let Err(e) = result {
                error!(error = %e, "Gateway error");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal");
        }
    }

    info!("Server shutdown complete");
    Ok(ExitCode::SUCCESS)
}
