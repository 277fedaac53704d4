//! Monitor service — the application core.
//!
//! [`MonitorService`] owns the set of channels (one line + one detector
//! each) and drives them on a fixed tick, forwarding confirmed
//! transitions to the [`ReportSink`] port. All I/O flows through port
//! traits injected at call sites, making the whole service testable with
//! mock adapters.
//!
//! ```text
//!  InputPort ──▶ ┌──────────────────────────┐ ──▶ ReportSink
//!                │      MonitorService       │
//!   TimePort ──▶ │  DebounceDetector × N     │
//!                └──────────────────────────┘
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::{info, warn};

use crate::drivers::hook_switch::DebounceDetector;

use super::events::HookEvent;
use super::ports::{InputPort, ReportSink, TimePort};

/// One monitored phone line: identity, its input, its debounce state.
pub struct Channel<I> {
    id: u8,
    line: I,
    detector: DebounceDetector,
}

impl<I> Channel<I> {
    pub fn new(id: u8, line: I, detector: DebounceDetector) -> Self {
        Self { id, line, detector }
    }
}

/// Drives N independent channels until cancelled.
pub struct MonitorService<I> {
    channels: Vec<Channel<I>>,
    poll_interval: Duration,
}

impl<I: InputPort> MonitorService<I> {
    pub fn new(poll_interval: Duration) -> Self {
        Self {
            channels: Vec::new(),
            poll_interval,
        }
    }

    /// Register a channel. Channels are polled in registration order every
    /// tick; the order only affects report ordering when two channels
    /// change within the same tick.
    pub fn add_channel(&mut self, channel: Channel<I>) {
        self.channels.push(channel);
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Run one tick: poll every channel, forward confirmed transitions.
    ///
    /// A failed send is logged and dropped — the detector's confirmed
    /// level was already committed, so the event is never re-emitted and
    /// the failure never propagates out of the tick.
    pub fn tick(&mut self, clock: &impl TimePort, sink: &mut impl ReportSink) {
        for ch in &mut self.channels {
            let Some(level) = ch.detector.poll(&mut ch.line, clock) else {
                continue;
            };

            let event = HookEvent {
                phone: ch.id,
                level,
                at: clock.now(),
            };
            info!("phone {}: {}", event.phone, level.as_hook_str().to_uppercase());

            if let Err(e) = sink.send(&event) {
                warn!("phone {}: report dropped: {}", event.phone, e);
            }
        }
    }

    /// Run the monitor loop until `stop` is raised.
    ///
    /// Checks the stop flag every tick, so cancellation takes effect
    /// within one poll interval (plus at most one in-flight send timeout).
    pub fn run(&mut self, clock: &impl TimePort, sink: &mut impl ReportSink, stop: &AtomicBool) {
        info!("monitoring {} phone line(s)", self.channels.len());
        while !stop.load(Ordering::Relaxed) {
            self.tick(clock, sink);
            clock.sleep(self.poll_interval);
        }
        info!("stop requested, leaving monitor loop");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::events::Level;
    use crate::error::ReportError;
    use std::cell::Cell;

    struct FixedLine(Level);

    impl InputPort for FixedLine {
        fn read(&mut self) -> Level {
            self.0
        }
    }

    struct InstantClock {
        now: Cell<Duration>,
    }

    impl TimePort for InstantClock {
        fn now(&self) -> Duration {
            self.now.get()
        }

        fn sleep(&self, d: Duration) {
            self.now.set(self.now.get() + d);
        }
    }

    struct RecordingSink {
        events: Vec<HookEvent>,
    }

    impl ReportSink for RecordingSink {
        fn send(&mut self, event: &HookEvent) -> Result<(), ReportError> {
            self.events.push(*event);
            Ok(())
        }
    }

    #[test]
    fn stable_channels_report_nothing() {
        let clock = InstantClock {
            now: Cell::new(Duration::ZERO),
        };
        let mut sink = RecordingSink { events: Vec::new() };
        let mut svc = MonitorService::new(Duration::from_millis(10));
        let det = DebounceDetector::new(Duration::from_millis(50));
        svc.add_channel(Channel::new(1, FixedLine(Level::High), det.clone()));
        svc.add_channel(Channel::new(2, FixedLine(Level::High), det));

        for _ in 0..5 {
            svc.tick(&clock, &mut sink);
        }
        assert!(sink.events.is_empty());
    }

    #[test]
    fn held_low_line_reports_exactly_once() {
        let clock = InstantClock {
            now: Cell::new(Duration::ZERO),
        };
        let mut sink = RecordingSink { events: Vec::new() };
        let mut svc = MonitorService::new(Duration::from_millis(10));
        let det = DebounceDetector::new(Duration::from_millis(50));
        svc.add_channel(Channel::new(1, FixedLine(Level::Low), det));

        for _ in 0..5 {
            svc.tick(&clock, &mut sink);
        }
        assert_eq!(sink.events.len(), 1);
        assert_eq!(sink.events[0].phone, 1);
        assert_eq!(sink.events[0].level, Level::Low);
    }

    #[test]
    fn run_exits_when_stop_pre_set() {
        let clock = InstantClock {
            now: Cell::new(Duration::ZERO),
        };
        let mut sink = RecordingSink { events: Vec::new() };
        let mut svc: MonitorService<FixedLine> = MonitorService::new(Duration::from_millis(10));
        let stop = AtomicBool::new(true);
        svc.run(&clock, &mut sink, &stop);
        assert!(sink.events.is_empty());
    }
}
