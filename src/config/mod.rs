//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Core config struct definitions (Config, LogConfig, ConfigError)
//! - [`listen`]: Network listener configuration (ListenConfig)
//! - [`limits`]: Per-connection limits (LimitsConfig)
//! - [`validation`]: Startup sanity checks

mod limits;
mod listen;
mod types;
mod validation;

pub use limits::{LimitsConfig, MIN_LINE};
pub use listen::ListenConfig;
pub use types::{Config, ConfigError, LogConfig, LogFormat};
pub use validation::{ValidationError, validate};
