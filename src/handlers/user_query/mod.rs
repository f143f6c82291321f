//! Discovery handlers: listing and inspecting registered clients.

mod info;
mod list;

pub use info::GetInfoHandler;
pub use list::GetListHandler;
