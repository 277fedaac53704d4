//! Debounced hook-switch transition detector.
//!
//! ## Hardware
//!
//! Each phone's hook switch grounds a pull-up GPIO line when the handset
//! is lifted: HIGH = on-hook, LOW = off-hook. Mechanical hook contacts
//! bounce for a few milliseconds on every pickup and hang-up.
//!
//! ## Detection
//!
//! A candidate transition (sample differs from the confirmed level) is
//! held for a fixed settle window and re-read. If the level held, the
//! transition is confirmed and committed; if it reverted, the candidate
//! was bounce and is discarded. A single read-wait-recheck is enough for
//! hook switches — no moving average or edge counting needed.
//!
//! `poll()` blocks its caller for up to the settle window whenever a
//! candidate is seen. That is fine here: the window (tens of ms) is far
//! below the human timescale of a hook pickup.

use std::time::Duration;

use crate::app::events::Level;
use crate::app::ports::{InputPort, TimePort};

/// Per-channel debounce state. Owns the last-confirmed level of exactly
/// one line; never shared between channels.
#[derive(Debug, Clone)]
pub struct DebounceDetector {
    confirmed: Level,
    settle: Duration,
}

impl DebounceDetector {
    /// New detector assuming the rest state (on-hook, HIGH) at startup.
    ///
    /// If the handset is already lifted when monitoring starts, no event
    /// is produced until it is next placed on-hook. Use
    /// [`with_initial`](Self::with_initial) with a priming read to seed
    /// the true level instead.
    pub fn new(settle: Duration) -> Self {
        Self::with_initial(settle, Level::High)
    }

    /// New detector seeded with a known initial level (no event emitted).
    pub fn with_initial(settle: Duration, initial: Level) -> Self {
        Self {
            confirmed: initial,
            settle,
        }
    }

    /// The last-confirmed level.
    pub fn confirmed(&self) -> Level {
        self.confirmed
    }

    /// Poll the line once, debouncing any candidate transition.
    ///
    /// Returns the newly confirmed level, or `None` if the line is stable
    /// or the candidate turned out to be bounce. Emits at most one event
    /// per physical state change: once a level is confirmed, repeated
    /// polls at that level return `None` until it reverses.
    pub fn poll(&mut self, line: &mut impl InputPort, clock: &impl TimePort) -> Option<Level> {
        let sample = line.read();
        if sample == self.confirmed {
            return None;
        }

        // Candidate transition — wait out the settle window and re-read.
        clock.sleep(self.settle);
        let reconfirm = line.read();

        if reconfirm == sample {
            self.confirmed = sample;
            Some(sample)
        } else {
            // Bounce: the level reverted inside the window.
            None
        }
    }
}
