//! Hook levels and the transition events emitted by the core.
//!
//! The monitor service produces a [`HookEvent`] once per confirmed
//! transition and hands it to the [`ReportSink`](super::ports::ReportSink)
//! port. Events are ephemeral — consumed immediately, never stored.

use std::time::Duration;

/// Logic level of a hook-switch line.
///
/// The lines are pull-up inputs grounded through the hook switch, so
/// `High` means the handset is resting in the cradle and `Low` means it
/// has been lifted. These are the only two valid values an input port
/// may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// On-hook: line pulled up, circuit open.
    High,
    /// Off-hook: line grounded through the closed hook switch.
    Low,
}

impl Level {
    /// Whether this level means the handset is lifted.
    pub fn is_off_hook(self) -> bool {
        matches!(self, Self::Low)
    }

    /// Wire/state string for this level: `"on-hook"` or `"off-hook"`.
    pub fn as_hook_str(self) -> &'static str {
        match self {
            Self::High => "on-hook",
            Self::Low => "off-hook",
        }
    }

    /// The opposite level.
    pub fn toggled(self) -> Self {
        match self {
            Self::High => Self::Low,
            Self::Low => Self::High,
        }
    }
}

/// A confirmed hook-state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookEvent {
    /// Channel id (1-based phone number).
    pub phone: u8,
    /// The newly confirmed level.
    pub level: Level,
    /// Monotonic uptime at which the transition was confirmed.
    pub at: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_hook_strings() {
        assert_eq!(Level::High.as_hook_str(), "on-hook");
        assert_eq!(Level::Low.as_hook_str(), "off-hook");
        assert!(Level::Low.is_off_hook());
        assert!(!Level::High.is_off_hook());
    }

    #[test]
    fn toggled_is_involution() {
        assert_eq!(Level::High.toggled(), Level::Low);
        assert_eq!(Level::Low.toggled().toggled(), Level::Low);
    }
}
