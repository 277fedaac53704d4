//! Hookmon — phone hook-switch monitor daemon.
//!
//! Polls two hook-switch GPIO lines, debounces candidate transitions,
//! and reports each confirmed pickup/hang-up to the installation server
//! over HTTP. Ctrl-C stops the loop; the GPIO lines are released on the
//! way out.

#![deny(unused_must_use)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rppal::gpio::Gpio;

use hookmon::adapters::gpio::HookLine;
use hookmon::adapters::http_reporter::HttpReporter;
use hookmon::adapters::time::SystemClock;
use hookmon::app::ports::InputPort;
use hookmon::app::service::{Channel, MonitorService};
use hookmon::config::MonitorConfig;
use hookmon::drivers::hook_switch::DebounceDetector;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = MonitorConfig::parse();

    info!("hookmon v{} — phone hook monitor", env!("CARGO_PKG_VERSION"));
    info!("server: {}", config.server_url);
    info!("endpoint: {}", config.endpoint());
    info!(
        "phone 1: GPIO {} | phone 2: GPIO {}",
        config.phone1_gpio, config.phone2_gpio
    );

    // Claim the hook lines. Failure here is fatal: exit non-zero before
    // the loop ever starts. The pins themselves are released on drop.
    let gpio = Gpio::new().context("cannot access the GPIO peripheral (not a Raspberry Pi?)")?;
    let mut service = MonitorService::new(config.poll_interval());
    for (id, bcm_pin) in [(1, config.phone1_gpio), (2, config.phone2_gpio)] {
        let mut line = HookLine::claim(&gpio, bcm_pin)
            .with_context(|| format!("cannot claim GPIO {bcm_pin} for phone {id}"))?;

        let detector = if config.seed_initial_level {
            // Priming read: seed the rest state without emitting an event.
            DebounceDetector::with_initial(config.debounce(), line.read())
        } else {
            DebounceDetector::new(config.debounce())
        };
        service.add_channel(Channel::new(id, line, detector));
    }
    info!("GPIO pins configured");

    let mut reporter = HttpReporter::new(config.endpoint(), config.send_timeout())
        .context("cannot build HTTP client")?;

    let stop = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&stop);
    ctrlc::set_handler(move || handler_flag.store(true, Ordering::Relaxed))
        .context("cannot install shutdown handler")?;

    let clock = SystemClock::new();
    info!("monitoring phones — press Ctrl+C to stop");
    service.run(&clock, &mut reporter, &stop);

    info!("GPIO released, goodbye");
    Ok(())
}
