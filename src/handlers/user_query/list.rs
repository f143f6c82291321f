//! GET_LIST command handler.

use super::super::{Context, Handler, HandlerResult, expect_args};
use rendezvous_proto::{Reply, Tokens};

/// Handler for `get_list`.
///
/// Lists registered names in registry order. Names that would overflow the
/// line capacity are left out.
pub struct GetListHandler;

impl Handler for GetListHandler {
    fn handle(&self, ctx: &Context<'_>, args: Tokens<'_>) -> HandlerResult {
        let [] = expect_args::<0>(args)?;
        Ok(Reply::list_within(ctx.registry.names(), ctx.reply_budget()))
    }
}
