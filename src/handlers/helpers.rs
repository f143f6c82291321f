//! Argument helpers shared by handlers.

use crate::error::HandlerError;
use rendezvous_proto::Tokens;

/// Take exactly `N` non-empty tokens from `args`.
///
/// Missing tokens, empty tokens (from doubled spaces) and leftover tokens
/// all make the request malformed.
pub fn expect_args<'a, const N: usize>(mut args: Tokens<'a>) -> Result<[&'a str; N], HandlerError> {
    let mut out = [""; N];
    for slot in &mut out {
        let token = args.next_token();
        if token.is_empty() {
            return Err(HandlerError::InvalidData);
        }
        *slot = token;
    }

    if !args.is_empty() {
        return Err(HandlerError::InvalidData);
    }
    Ok(out)
}

/// Parse a decimal port that must consume the whole token.
///
/// Signs, whitespace and out-of-range values are rejected.
pub fn parse_port(token: &str) -> Result<u16, HandlerError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(HandlerError::InvalidData);
    }
    token.parse().map_err(|_| HandlerError::InvalidData)
}
