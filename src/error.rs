//! Error types for the reporting path.
//!
//! A single `ReportError` enum keeps the monitor loop's error handling
//! uniform: every failure mode of a send attempt funnels into it, gets
//! logged, and is then dropped — no error from this path may stop the loop.

use std::fmt;

/// A hook-event send attempt failed.
#[derive(Debug)]
pub enum ReportError {
    /// Transport-level failure (connection refused, timeout, DNS, ...).
    Http(reqwest::Error),
    /// The server answered with a non-200 status.
    Status(u16),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) if e.is_timeout() => write!(f, "request timeout"),
            Self::Http(e) if e.is_connect() => write!(f, "cannot connect to server: {e}"),
            Self::Http(e) => write!(f, "http error: {e}"),
            Self::Status(code) => write!(f, "server error: {code}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Status(_) => None,
        }
    }
}

impl From<reqwest::Error> for ReportError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}
