//! Raspberry Pi GPIO input adapter.
//!
//! Implements [`InputPort`] on top of rppal. Each hook-switch line is
//! claimed as a pull-up input at startup; claiming is the only fallible
//! step, and a failure there is fatal before monitoring begins.
//!
//! The wrapped [`InputPin`] restores the pin's previous state when
//! dropped, so the hardware is released on every exit path — normal
//! shutdown, startup error, or panic unwind.

use rppal::gpio::{Gpio, InputPin};

use crate::app::events::Level;
use crate::app::ports::InputPort;

/// One claimed hook-switch line.
pub struct HookLine {
    pin: InputPin,
}

impl HookLine {
    /// Claim `bcm_pin` as a pull-up input.
    pub fn claim(gpio: &Gpio, bcm_pin: u8) -> Result<Self, rppal::gpio::Error> {
        let pin = gpio.get(bcm_pin)?.into_input_pullup();
        Ok(Self { pin })
    }

    /// BCM number of the claimed pin.
    pub fn bcm_pin(&self) -> u8 {
        self.pin.pin()
    }
}

impl InputPort for HookLine {
    fn read(&mut self) -> Level {
        match self.pin.read() {
            rppal::gpio::Level::High => Level::High,
            rppal::gpio::Level::Low => Level::Low,
        }
    }
}
