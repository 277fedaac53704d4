//! Port traits — the boundary between the monitor core and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ MonitorService (domain)
//! ```
//!
//! Driven adapters (GPIO lines, the HTTP reporter, the system clock)
//! implement these traits. The [`MonitorService`](super::service::MonitorService)
//! and [`DebounceDetector`](crate::drivers::hook_switch::DebounceDetector)
//! consume them via generics, so the core never touches hardware or the
//! network directly.

use std::time::Duration;

use crate::error::ReportError;

use super::events::{HookEvent, Level};

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the instantaneous logic level of one physical line.
///
/// Reads are infallible: a line that cannot be claimed fails at adapter
/// construction, before monitoring starts. A malfunctioning line that is
/// stuck at one level simply never produces transitions — a silent
/// limitation, not a reported error.
pub trait InputPort {
    fn read(&mut self) -> Level;
}

// ───────────────────────────────────────────────────────────────
// Report sink port (driven adapter: domain → network)
// ───────────────────────────────────────────────────────────────

/// The core hands confirmed transitions to this port. The adapter on the
/// other side decides delivery (HTTP POST in production, a recording mock
/// in tests). Implementations must bound each attempt with a timeout;
/// callers treat any `Err` as log-and-drop.
pub trait ReportSink {
    fn send(&mut self, event: &HookEvent) -> Result<(), ReportError>;
}

// ───────────────────────────────────────────────────────────────
// Time port (driven adapter: domain ↔ clock)
// ───────────────────────────────────────────────────────────────

/// Monotonic time and bounded suspension.
///
/// Both suspension points of the core — the debounce settle window and the
/// outer poll tick — go through this port, so tests can drive the monitor
/// with a virtual clock that advances without waiting.
pub trait TimePort {
    /// Monotonic uptime.
    fn now(&self) -> Duration;

    /// Suspend the calling thread for `d`.
    fn sleep(&self, d: Duration);
}
