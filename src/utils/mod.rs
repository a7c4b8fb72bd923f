pub(crate) mod message;
pub(crate) mod terminal;

// Public API - utilities used by commands
pub use message::clean_error_message;
pub use terminal::{set_terminal_title, set_terminal_title_and_flush};
