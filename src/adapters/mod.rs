//! Driven adapters implementing the port traits in [`crate::app::ports`].

pub mod gpio;
pub mod http_reporter;
pub mod time;
