//! Input drivers.

pub mod hook_switch;
