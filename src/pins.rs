//! Default GPIO pin assignments (BCM numbering).
//!
//! Wiring:
//!   Phone 1 hook (green) → GPIO 17 (physical pin 11)
//!   Phone 2 hook (green) → GPIO 27 (physical pin 13)
//!   Both grounds (yellow) → GND
//!
//! Each hook switch grounds its line when the handset is lifted, so the
//! pins are configured as pull-up inputs: HIGH = on-hook, LOW = off-hook.

/// Phone 1 hook switch input.
pub const PHONE_1_GPIO: u8 = 17;

/// Phone 2 hook switch input.
pub const PHONE_2_GPIO: u8 = 27;
