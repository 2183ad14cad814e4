//! In-memory platform.
//!
//! [`VirtualPlatform`] stands in for real pins in tests, demos, and host-side
//! development. Clones share the same pin table, so one handle can be moved
//! into a driver while another keeps feeding it values.
//!
//! Unset pins read as an idle joystick: analog pins sit at [`CENTER`],
//! digital pins read `High` (pull-up, button released).

use crate::platform::{Level, Pin, PinMode, Platform};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Analog value reported for a pin that was never set.
pub const CENTER: u16 = 512;

#[derive(Default, Debug)]
struct PinTable {
    modes: HashMap<Pin, PinMode>,
    analog: HashMap<Pin, u16>,
    digital: HashMap<Pin, Level>,
    reads: HashMap<Pin, usize>,
}

#[derive(Clone, Default, Debug)]
pub struct VirtualPlatform {
    pins: Rc<RefCell<PinTable>>,
}

impl VirtualPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the analog sample returned for `pin`.
    pub fn set_analog(&self, pin: Pin, value: u16) {
        self.pins.borrow_mut().analog.insert(pin, value);
    }

    /// Set the digital level returned for `pin`.
    pub fn set_digital(&self, pin: Pin, level: Level) {
        self.pins.borrow_mut().digital.insert(pin, level);
    }

    /// Convenience for an active-low push button.
    pub fn press_button(&self, pin: Pin) {
        self.set_digital(pin, Level::Low);
    }

    /// Mode last applied to `pin`, if any.
    pub fn mode(&self, pin: Pin) -> Option<PinMode> {
        self.pins.borrow().modes.get(&pin).copied()
    }

    /// Number of reads (analog or digital) served for `pin`.
    pub fn reads(&self, pin: Pin) -> usize {
        self.pins.borrow().reads.get(&pin).copied().unwrap_or(0)
    }
}

impl Platform for VirtualPlatform {
    fn pin_mode(&mut self, pin: Pin, mode: PinMode) {
        self.pins.borrow_mut().modes.insert(pin, mode);
    }

    fn digital_read(&mut self, pin: Pin) -> Level {
        let mut pins = self.pins.borrow_mut();
        *pins.reads.entry(pin).or_insert(0) += 1;
        pins.digital.get(&pin).copied().unwrap_or(Level::High)
    }

    fn analog_read(&mut self, pin: Pin) -> u16 {
        let mut pins = self.pins.borrow_mut();
        *pins.reads.entry(pin).or_insert(0) += 1;
        pins.analog.get(&pin).copied().unwrap_or(CENTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_pins_read_idle() {
        let mut board = VirtualPlatform::new();
        assert_eq!(board.analog_read(Pin(0)), CENTER);
        assert_eq!(board.digital_read(Pin(1)), Level::High);
        assert_eq!(board.reads(Pin(0)), 1);
    }

    #[test]
    fn clones_share_pins() {
        let feeder = VirtualPlatform::new();
        let mut reader = feeder.clone();
        feeder.set_analog(Pin(3), 42);
        feeder.press_button(Pin(4));
        assert_eq!(reader.analog_read(Pin(3)), 42);
        assert_eq!(reader.digital_read(Pin(4)), Level::Low);
        reader.pin_mode(Pin(4), PinMode::InputPullup);
        assert_eq!(feeder.mode(Pin(4)), Some(PinMode::InputPullup));
    }
}
