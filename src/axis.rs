//! Pin-level two-axis joystick driver.
//!
//! [`AxisJoystick`] samples one digital button pin (SW) and two analog axis
//! pins (VRx, VRy) through a [`Platform`] and reduces them to a [`Move`].
//!
//! # Thresholds
//! An axis counts as deflected when its sample lies within 15% of either end
//! of the ADC range. With a 10-bit ADC that is `>= 870` (high) and `<= 153` (low).
//! The window is fixed at compile time.
//!
//! # Example
//! ```
//! use axisjoy::backends::virtual_input::VirtualPlatform;
//! use axisjoy::{AxisJoystick, Joystick, Move, Pin};
//!
//! let board = VirtualPlatform::new();
//! let mut stick = AxisJoystick::new(board.clone(), Pin(2), Pin(14), Pin(15));
//!
//! board.set_analog(Pin(14), 900);
//! assert_eq!(stick.multiple_read(), Move::Up);
//! assert_eq!(stick.single_read(), Move::Up);
//! assert_eq!(stick.single_read(), Move::None); // still held
//! ```

use crate::device::Joystick;
use crate::event::Move;
use crate::platform::{Level, Pin, PinMode, Platform};

/// Smallest ADC sample.
pub const ADC_MIN: u16 = 0;
/// Largest ADC sample (10-bit converter).
pub const ADC_MAX: u16 = 1023;
/// Fraction of the ADC span at each end that counts as a deflection.
pub const AXIS_ON_PERCENT: f32 = 0.15;

const ADC_SPAN: f32 = (ADC_MAX - ADC_MIN) as f32;
const AXIS_ON_RANGE: f32 = ADC_SPAN * AXIS_ON_PERCENT;

/// Samples at or above this are deflected high (`Up` / `Right`).
pub const AXIS_HIGH_RANGE: f32 = ADC_MAX as f32 - AXIS_ON_RANGE;
/// Samples at or below this are deflected low (`Down` / `Left`).
pub const AXIS_LOW_RANGE: f32 = ADC_MIN as f32 + AXIS_ON_RANGE;

/// Button level that means "pressed" (the switch pulls the line to ground).
pub const BUTTON_PRESS_SIGNAL: Level = Level::Low;

/// Deflection of a single axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Deflection {
    High,
    Low,
    Centered,
}

macro_rules! sample_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug-log")]
        log::trace!($($arg)*);
    };
}

#[inline]
fn deflection(sample: u16) -> Deflection {
    let v = f32::from(sample);
    if v >= AXIS_HIGH_RANGE {
        Deflection::High
    } else if v <= AXIS_LOW_RANGE {
        Deflection::Low
    } else {
        Deflection::Centered
    }
}

/// Joystick driver bound to three pins for its whole lifetime.
pub struct AxisJoystick<P: Platform> {
    platform: P,
    sw_pin: Pin,
    vrx_pin: Pin,
    vry_pin: Pin,
    previous_move: Move,
}

impl<P: Platform> AxisJoystick<P> {
    /// Bind the driver to its pins and configure them.
    ///
    /// * `sw_pin` - digital pin of the push button
    /// * `vrx_pin` - analog pin of the X axis
    /// * `vry_pin` - analog pin of the Y axis
    pub fn new(mut platform: P, sw_pin: Pin, vrx_pin: Pin, vry_pin: Pin) -> Self {
        platform.pin_mode(sw_pin, PinMode::InputPullup);
        platform.pin_mode(vrx_pin, PinMode::Input);
        platform.pin_mode(vry_pin, PinMode::Input);
        log::debug!("axis joystick bound: sw={sw_pin} vrx={vrx_pin} vry={vry_pin}");

        Self {
            platform,
            sw_pin,
            vrx_pin,
            vry_pin,
            previous_move: Move::None,
        }
    }

    pub fn sw_pin(&self) -> Pin {
        self.sw_pin
    }

    pub fn vrx_pin(&self) -> Pin {
        self.vrx_pin
    }

    pub fn vry_pin(&self) -> Pin {
        self.vry_pin
    }

    /// Last move reported by [`single_read`](Joystick::single_read).
    pub fn previous_move(&self) -> Move {
        self.previous_move
    }
}

impl<P: Platform> Joystick for AxisJoystick<P> {
    fn single_read(&mut self) -> Move {
        let current = self.multiple_read();
        if current == self.previous_move {
            return Move::None;
        }
        log::debug!("joystick {} -> {}", self.previous_move, current);
        self.previous_move = current;
        current
    }

    /// Precedence is button, then X, then Y. Axes are sampled only when
    /// the earlier checks fall through.
    fn multiple_read(&mut self) -> Move {
        let sw = self.read_sw();
        if sw == BUTTON_PRESS_SIGNAL {
            sample_trace!("joystick sw={sw:?} -> {}", Move::Press);
            return Move::Press;
        }
        let vrx = self.read_vrx();
        let m = match deflection(vrx) {
            Deflection::High => Move::Up,
            Deflection::Low => Move::Down,
            Deflection::Centered => {
                let vry = self.read_vry();
                let m = match deflection(vry) {
                    Deflection::High => Move::Right,
                    Deflection::Low => Move::Left,
                    Deflection::Centered => Move::None,
                };
                sample_trace!("joystick sw={sw:?} vrx={vrx} vry={vry} -> {m}");
                return m;
            }
        };
        sample_trace!("joystick sw={sw:?} vrx={vrx} -> {m}");
        m
    }

    fn is_press(&mut self) -> bool {
        self.multiple_read() == Move::Press
    }

    fn is_up(&mut self) -> bool {
        self.multiple_read() == Move::Up
    }

    fn is_down(&mut self) -> bool {
        self.multiple_read() == Move::Down
    }

    fn is_right(&mut self) -> bool {
        self.multiple_read() == Move::Right
    }

    fn is_left(&mut self) -> bool {
        self.multiple_read() == Move::Left
    }

    fn read_vrx(&mut self) -> u16 {
        self.platform.analog_read(self.vrx_pin)
    }

    fn read_vry(&mut self) -> u16 {
        self.platform.analog_read(self.vry_pin)
    }

    fn read_sw(&mut self) -> Level {
        self.platform.digital_read(self.sw_pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::virtual_input::VirtualPlatform;

    #[test]
    fn threshold_constants() {
        assert!((AXIS_HIGH_RANGE - 869.55).abs() < 1e-3);
        assert!((AXIS_LOW_RANGE - 153.45).abs() < 1e-3);
    }

    fn rig() -> (VirtualPlatform, AxisJoystick<VirtualPlatform>) {
        let board = VirtualPlatform::new();
        let stick = AxisJoystick::new(board.clone(), Pin(2), Pin(14), Pin(15));
        (board, stick)
    }

    fn sample(sw: Level, vrx: u16, vry: u16) -> Move {
        let (board, mut stick) = rig();
        board.set_digital(Pin(2), sw);
        board.set_analog(Pin(14), vrx);
        board.set_analog(Pin(15), vry);
        stick.multiple_read()
    }

    #[test]
    fn boundaries() {
        let idle = Level::High;
        assert_eq!(sample(idle, 870, 512), Move::Up);
        assert_eq!(sample(idle, 869, 512), Move::None);
        assert_eq!(sample(idle, 153, 512), Move::Down);
        assert_eq!(sample(idle, 154, 512), Move::None);
        assert_eq!(sample(idle, 512, 870), Move::Right);
        assert_eq!(sample(idle, 512, 869), Move::None);
        assert_eq!(sample(idle, 512, 153), Move::Left);
        assert_eq!(sample(idle, 512, 154), Move::None);
        assert_eq!(sample(idle, ADC_MIN, ADC_MAX), Move::Down);
    }

    #[test]
    fn precedence() {
        assert_eq!(sample(Level::Low, 1023, 0), Move::Press);
        assert_eq!(sample(Level::High, 1023, 0), Move::Up);
        assert_eq!(sample(Level::High, 0, 1023), Move::Down);
    }

    #[test]
    fn out_of_range_samples_still_classify() {
        assert_eq!(sample(Level::High, 4095, 512), Move::Up);
        assert_eq!(sample(Level::High, 512, u16::MAX), Move::Right);
    }

    #[test]
    fn single_read_shares_level_classification() {
        let (board, mut stick) = rig();
        for (vrx, vry) in [(900, 512), (100, 512), (512, 900), (512, 100)] {
            board.set_analog(Pin(14), vrx);
            board.set_analog(Pin(15), vry);
            let level = stick.multiple_read();
            assert_eq!(stick.single_read(), level);
        }
    }

    #[cfg(feature = "debug-log")]
    #[test]
    fn trace_reports_raw_samples() {
        use std::sync::Mutex;

        struct Capture(Mutex<Vec<String>>);

        impl log::Log for Capture {
            fn enabled(&self, _: &log::Metadata) -> bool {
                true
            }
            fn log(&self, record: &log::Record) {
                self.0.lock().unwrap().push(record.args().to_string());
            }
            fn flush(&self) {}
        }

        static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));
        log::set_logger(&CAPTURE).unwrap();
        log::set_max_level(log::LevelFilter::Trace);

        assert_eq!(sample(Level::High, 512, 901), Move::Right);
        assert_eq!(sample(Level::Low, 512, 512), Move::Press);

        let lines = CAPTURE.0.lock().unwrap();
        assert!(lines.iter().any(|l| l == "joystick sw=High vrx=512 vry=901 -> right"));
        assert!(lines.iter().any(|l| l == "joystick sw=Low -> press"));
    }
}
