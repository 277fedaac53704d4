//! Monitor configuration.
//!
//! All tunable parameters for the hook monitor. Every field can be set on
//! the command line or through a `HOOKMON_*` environment variable; the
//! defaults match the installation wiring (see [`crate::pins`]).

use std::time::Duration;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::pins;

/// Core monitor configuration.
#[derive(Debug, Clone, Parser, Serialize, Deserialize)]
#[command(name = "hookmon", version, about = "Phone hook-switch monitor")]
pub struct MonitorConfig {
    /// Base URL of the server receiving hook events.
    #[arg(long, env = "HOOKMON_SERVER_URL", default_value = "http://192.168.1.100:3000")]
    pub server_url: String,

    /// BCM GPIO pin for the phone 1 hook switch.
    #[arg(long, env = "HOOKMON_PHONE1_GPIO", default_value_t = pins::PHONE_1_GPIO)]
    pub phone1_gpio: u8,

    /// BCM GPIO pin for the phone 2 hook switch.
    #[arg(long, env = "HOOKMON_PHONE2_GPIO", default_value_t = pins::PHONE_2_GPIO)]
    pub phone2_gpio: u8,

    /// Debounce settle window in milliseconds.
    #[arg(long, env = "HOOKMON_DEBOUNCE_MS", default_value_t = 50)]
    pub debounce_ms: u64,

    /// Outer poll tick interval in milliseconds.
    #[arg(long, env = "HOOKMON_POLL_INTERVAL_MS", default_value_t = 10)]
    pub poll_interval_ms: u64,

    /// HTTP send timeout in seconds.
    #[arg(long, env = "HOOKMON_SEND_TIMEOUT_SECS", default_value_t = 3)]
    pub send_timeout_secs: u64,

    /// Seed each channel's confirmed level from an initial read instead of
    /// assuming on-hook. No event is emitted for the seed read.
    #[arg(long, env = "HOOKMON_SEED_INITIAL_LEVEL")]
    pub seed_initial_level: bool,
}

impl MonitorConfig {
    /// Full URL of the hook-event endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/api/phone/hook", self.server_url.trim_end_matches('/'))
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn send_timeout(&self) -> Duration {
        Duration::from_secs(self.send_timeout_secs)
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            server_url: "http://192.168.1.100:3000".to_string(),
            phone1_gpio: pins::PHONE_1_GPIO,
            phone2_gpio: pins::PHONE_2_GPIO,
            debounce_ms: 50,
            poll_interval_ms: 10,
            send_timeout_secs: 3,
            seed_initial_level: false,
        }
    }
}
