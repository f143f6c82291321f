//! Server replies and server-initiated pushes.
//!
//! `Display` renders the exact wire text without the line terminator; the
//! codec appends CRLF and enforces the line capacity.

use std::fmt;
use std::net::{SocketAddr, SocketAddrV4};

/// Query commands that can name an unknown client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// `get_info`
    GetInfo,
    /// `start_dialog`
    StartDialog,
}

/// A response line sent back on the requesting connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// `confirm_connection`
    ConfirmConnection,
    /// `list <n1> <n2> ...`
    List(Vec<String>),
    /// `info <privAddr> <privPort> <remAddr> <remPort>`
    Info {
        /// Endpoint the peer declared for its local network.
        private: SocketAddrV4,
        /// Endpoint the server observed for the peer's connection.
        remote: SocketAddr,
    },
    /// `accepted`
    Accepted,
    /// `<INVALID REQUEST DATA>`
    InvalidRequestData,
    /// `<INVALID REQUEST COMMAND>`
    InvalidRequestCommand,
    /// `<NOT REGISTERED USER>`
    NotRegisteredUser,
    /// `<CLIENT WITH THAT NAME ALREADY EXISTS>`
    NameAlreadyExists,
    /// `<GET_INFO : UNKNOWN CLIENT>` or `<START_DIALOG : UNKNOWN CLIENT>`
    UnknownClient(Query),
}

impl Reply {
    /// Build a `list` reply holding as many names as fit in `budget` bytes.
    ///
    /// Names are taken in order; the first name that would push the line
    /// past `budget` ends the list.
    pub fn list_within<I>(names: I, budget: usize) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut len = "list".len();
        let mut kept = Vec::new();
        for name in names {
            if len + 1 + name.len() > budget {
                break;
            }
            len += 1 + name.len();
            kept.push(name);
        }
        Reply::List(kept)
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::ConfirmConnection => f.write_str("confirm_connection"),
            Reply::List(names) => {
                f.write_str("list")?;
                for name in names {
                    write!(f, " {name}")?;
                }
                Ok(())
            }
            Reply::Info { private, remote } => write!(
                f,
                "info {} {} {} {}",
                private.ip(),
                private.port(),
                remote.ip(),
                remote.port()
            ),
            Reply::Accepted => f.write_str("accepted"),
            Reply::InvalidRequestData => f.write_str("<INVALID REQUEST DATA>"),
            Reply::InvalidRequestCommand => f.write_str("<INVALID REQUEST COMMAND>"),
            Reply::NotRegisteredUser => f.write_str("<NOT REGISTERED USER>"),
            Reply::NameAlreadyExists => f.write_str("<CLIENT WITH THAT NAME ALREADY EXISTS>"),
            Reply::UnknownClient(Query::GetInfo) => f.write_str("<GET_INFO : UNKNOWN CLIENT>"),
            Reply::UnknownClient(Query::StartDialog) => {
                f.write_str("<START_DIALOG : UNKNOWN CLIENT>")
            }
        }
    }
}

/// A one-way message pushed to a client outside the request/reply cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relay {
    /// `start_dialog <requester>`
    StartDialog {
        /// Name of the client asking for the introduction.
        from: String,
    },
}

impl fmt::Display for Relay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relay::StartDialog { from } => write!(f, "start_dialog {from}"),
        }
    }
}
