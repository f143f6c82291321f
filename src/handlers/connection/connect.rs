//! CONNECT command handler: claim a name and declare a private endpoint.

use super::super::{Context, Handler, HandlerError, HandlerResult, expect_args, parse_port};
use rendezvous_proto::{Reply, Tokens};
use std::net::{Ipv4Addr, SocketAddrV4};
use tracing::info;

/// Handler for `connect <name> <address> <port>`.
pub struct ConnectHandler;

impl Handler for ConnectHandler {
    fn handle(&self, ctx: &Context<'_>, args: Tokens<'_>) -> HandlerResult {
        let [name, address, port] = expect_args::<3>(args)?;

        let address: Ipv4Addr = address.parse().map_err(|_| HandlerError::InvalidData)?;
        let port = parse_port(port)?;

        if !ctx.registry.register(name, ctx.session) {
            return Err(HandlerError::NameInUse(name.to_owned()));
        }

        let private = SocketAddrV4::new(address, port);
        ctx.session.set_private_endpoint(private);

        info!(
            name = %name,
            private = %private,
            remote = %ctx.session.remote(),
            "Client registered"
        );
        Ok(Reply::ConfirmConnection)
    }

    fn requires_registration(&self) -> bool {
        false
    }
}
