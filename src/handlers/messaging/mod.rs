//! Introduction handlers.

mod dialog;

pub use dialog::StartDialogHandler;
