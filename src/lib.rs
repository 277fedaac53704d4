//! Hookmon library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All Raspberry-Pi-specific code lives behind the port
//! traits in [`app::ports`], implemented by the adapters.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod drivers;

mod error;
mod pins;

pub mod adapters;

pub use error::ReportError;
