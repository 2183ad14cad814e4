//! Microcontroller I/O primitives consumed by the driver.
//!
//! The driver never touches registers itself; it talks to a [`Platform`]
//! that knows how to configure a pin and sample it. Implement this trait for
//! your board's HAL, or use
//! [`VirtualPlatform`](crate::backends::virtual_input::VirtualPlatform) for tests.
//!
//! # Contract
//! - `analog_read` returns the ADC sample, nominally in
//!   [`ADC_MIN`](crate::axis::ADC_MIN)`..=`[`ADC_MAX`](crate::axis::ADC_MAX).
//!   Out-of-range values from a floating pin are passed through untouched.
//! - `digital_read` returns the logic level of the pin.
//! - Neither read can fail. A disconnected pin yields whatever the hardware reports.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Board pin identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pin(pub u8);

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pin{}", self.0)
    }
}

impl From<u8> for Pin {
    fn from(n: u8) -> Self {
        Pin(n)
    }
}

/// Electrical configuration of a pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PinMode {
    Input,
    /// Input with the internal pull-up enabled; idle reads `High`.
    InputPullup,
    Output,
}

/// Digital logic level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    Low,
    High,
}

/// Pin-level hardware access.
pub trait Platform {
    /// Configure `pin`. Calling this again with the same mode has no further effect.
    fn pin_mode(&mut self, pin: Pin, mode: PinMode);

    /// Sample a digital pin.
    fn digital_read(&mut self, pin: Pin) -> Level;

    /// Sample an analog pin.
    fn analog_read(&mut self, pin: Pin) -> u16;
}

impl<P: Platform + ?Sized> Platform for &mut P {
    fn pin_mode(&mut self, pin: Pin, mode: PinMode) {
        (**self).pin_mode(pin, mode)
    }

    fn digital_read(&mut self, pin: Pin) -> Level {
        (**self).digital_read(pin)
    }

    fn analog_read(&mut self, pin: Pin) -> u16 {
        (**self).analog_read(pin)
    }
}
