//! Connection registration handlers.

mod connect;

pub use connect::ConnectHandler;
