//! GET_INFO command handler.

use super::super::{Context, Handler, HandlerError, HandlerResult, expect_args};
use rendezvous_proto::{Query, Reply, Tokens};

/// Handler for `get_info <name>`.
///
/// Reports the target's declared private endpoint followed by the endpoint
/// the server observes, so the requester can try the LAN path and the
/// public path.
pub struct GetInfoHandler;

impl Handler for GetInfoHandler {
    fn handle(&self, ctx: &Context<'_>, args: Tokens<'_>) -> HandlerResult {
        let [name] = expect_args::<1>(args)?;

        let target = ctx
            .registry
            .lookup(name)
            .ok_or_else(|| HandlerError::UnknownClient {
                query: Query::GetInfo,
                name: name.to_owned(),
            })?;

        Ok(Reply::Info {
            private: target.private_endpoint(),
            remote: target.remote(),
        })
    }
}
