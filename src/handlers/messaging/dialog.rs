//! START_DIALOG command handler.

use super::super::{Context, Handler, HandlerError, HandlerResult, expect_args};
use rendezvous_proto::{Query, Relay, Reply, Tokens};
use tracing::{debug, info};

/// Handler for `start_dialog <name>`.
///
/// Pushes `start_dialog <requester>` to the target and answers `accepted`
/// without waiting for the target to see it.
pub struct StartDialogHandler;

impl Handler for StartDialogHandler {
    fn handle(&self, ctx: &Context<'_>, args: Tokens<'_>) -> HandlerResult {
        let [name] = expect_args::<1>(args)?;

        let target = ctx
            .registry
            .lookup(name)
            .ok_or_else(|| HandlerError::UnknownClient {
                query: Query::StartDialog,
                name: name.to_owned(),
            })?;

        let from = ctx.session.name();
        if target.send_relay(Relay::StartDialog { from: from.clone() }) {
            info!(from = %from, to = %name, "Dialog requested");
        } else {
            debug!(from = %from, to = %name, "Dialog relay dropped");
        }

        Ok(Reply::Accepted)
    }
}
