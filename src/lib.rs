//! rendezvous - peer registration, discovery and introduction relay.
//!
//! Clients connect over TCP, register a name together with their private
//! endpoint, list and inspect other clients, and ask the server to tell a
//! peer that they want to open a direct dialog.

pub mod config;
pub mod error;
pub mod handlers;
pub mod network;
pub mod state;
pub mod telemetry;
