//! HTTP report sink adapter.
//!
//! Implements [`ReportSink`] by POSTing each confirmed transition to the
//! server's hook endpoint as JSON:
//!
//! ```json
//! {"phone": 1, "state": "off-hook"}
//! ```
//!
//! Delivery is fire-and-forget: every attempt is bounded by the
//! configured timeout, success is exactly HTTP 200, and any other
//! outcome is returned as a [`ReportError`] for the caller to log and
//! drop. No retry, no queue.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Serialize;

use crate::app::events::HookEvent;
use crate::app::ports::ReportSink;
use crate::error::ReportError;

/// Wire body of a hook event.
#[derive(Debug, Serialize)]
pub struct HookReport<'a> {
    pub phone: u8,
    pub state: &'a str,
}

impl<'a> HookReport<'a> {
    pub fn from_event(event: &HookEvent) -> HookReport<'a> {
        HookReport {
            phone: event.phone,
            state: event.level.as_hook_str(),
        }
    }
}

/// Blocking HTTP client for the hook-event endpoint.
pub struct HttpReporter {
    client: Client,
    endpoint: String,
}

impl HttpReporter {
    /// Build a client with the given per-request timeout.
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ReportSink for HttpReporter {
    fn send(&mut self, event: &HookEvent) -> Result<(), ReportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&HookReport::from_event(event))
            .send()?;

        if response.status() != StatusCode::OK {
            return Err(ReportError::Status(response.status().as_u16()));
        }
        Ok(())
    }
}
