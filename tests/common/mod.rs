//! Integration test common infrastructure.
//!
//! Provides utilities for spawning in-process test servers, creating raw
//! line clients, and waiting on shared server state.

pub mod client;
pub mod server;

#[allow(unused_imports)]
pub use client::TestClient;
#[allow(unused_imports)]
pub use server::{TestServer, wait_for};
