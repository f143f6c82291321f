//! # rendezvous-proto
//!
//! Wire protocol for the rendezvous server: a plain-text, line oriented
//! request/reply protocol used by peers to register, discover each other
//! and request introductions.
//!
//! ## Features
//!
//! - Pure framing predicate over raw byte buffers ([`frame`])
//! - Space-separated request tokenizer ([`Tokens`])
//! - Typed replies and server pushes with exact wire text ([`Reply`], [`Relay`])
//! - A Tokio codec bounding every line to a fixed capacity ([`RequestCodec`])
//!
//! ## Quick Start
//!
//! ```rust
//! use rendezvous_proto::{frame, Framing, Tokens};
//!
//! let buf = b"  get_info alice\r\n";
//! let Framing::Complete(range) = frame(buf) else { panic!("complete line") };
//! let line = std::str::from_utf8(&buf[range]).unwrap();
//!
//! let mut tokens = Tokens::new(line);
//! assert_eq!(tokens.next_token(), "get_info");
//! assert_eq!(tokens.next_token(), "alice");
//! assert!(tokens.is_empty());
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod codec;
pub mod error;
pub mod frame;
pub mod reply;
pub mod tokens;

pub use self::codec::{RequestCodec, DEFAULT_MAX_LINE, LINE_TERMINATOR};
pub use self::error::ProtocolError;
pub use self::frame::{frame, frame_from, is_space, Framing};
pub use self::reply::{Query, Relay, Reply};
pub use self::tokens::Tokens;
