//! Application core: events, port traits, and the monitor service.

pub mod events;
pub mod ports;
pub mod service;
