//! Orientation decorator.
//!
//! [`XYReplacerJoystick`] wraps any [`Joystick`] ("origin") and exchanges the
//! meaning of its X and Y axes, for sticks mounted rotated by 90°. It never
//! touches pins itself; everything is computed from the origin's answers.
//!
//! The origin may be owned (`XYReplacerJoystick<AxisJoystick<_>>`) or
//! borrowed (`XYReplacerJoystick<&mut dyn Joystick>`), in which case the
//! caller keeps ownership and the origin outlives the wrapper.
//!
//! ```
//! use axisjoy::backends::virtual_input::VirtualPlatform;
//! use axisjoy::{AxisJoystick, Joystick, Move, Pin, XYReplacerJoystick};
//!
//! let board = VirtualPlatform::new();
//! let mut origin = AxisJoystick::new(board.clone(), Pin(2), Pin(14), Pin(15));
//! board.set_analog(Pin(14), 900);
//!
//! assert_eq!(origin.multiple_read(), Move::Up);
//! let mut rotated = XYReplacerJoystick::new(&mut origin);
//! assert_eq!(rotated.multiple_read(), Move::Right);
//! ```

use crate::device::Joystick;
use crate::error::JoystickError;
use crate::event::Move;
use crate::platform::Level;

/// Decorator that swaps X-axis and Y-axis semantics of its origin.
pub struct XYReplacerJoystick<J: Joystick> {
    origin: J,
}

impl<J: Joystick> XYReplacerJoystick<J> {
    pub fn new(origin: J) -> Self {
        Self { origin }
    }

    /// Build from an origin that may be absent.
    ///
    /// Fails with [`JoystickError::MissingOrigin`] when `origin` is `None`.
    pub fn try_new(origin: Option<J>) -> Result<Self, JoystickError> {
        origin.map(Self::new).ok_or(JoystickError::MissingOrigin)
    }

    pub fn origin(&self) -> &J {
        &self.origin
    }
}

impl<J: Joystick> Joystick for XYReplacerJoystick<J> {
    fn single_read(&mut self) -> Move {
        self.origin.single_read().swap_axes()
    }

    fn multiple_read(&mut self) -> Move {
        self.origin.multiple_read().swap_axes()
    }

    fn is_press(&mut self) -> bool {
        self.origin.is_press()
    }

    fn is_up(&mut self) -> bool {
        self.origin.is_right()
    }

    fn is_down(&mut self) -> bool {
        self.origin.is_left()
    }

    fn is_right(&mut self) -> bool {
        self.origin.is_up()
    }

    fn is_left(&mut self) -> bool {
        self.origin.is_down()
    }

    fn read_vrx(&mut self) -> u16 {
        self.origin.read_vrx()
    }

    fn read_vry(&mut self) -> u16 {
        self.origin.read_vry()
    }

    fn read_sw(&mut self) -> Level {
        self.origin.read_sw()
    }

    #[allow(deprecated)]
    fn x_axis(&mut self) -> u16 {
        self.origin.y_axis()
    }

    #[allow(deprecated)]
    fn y_axis(&mut self) -> u16 {
        self.origin.x_axis()
    }
}
