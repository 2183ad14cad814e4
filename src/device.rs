//! The joystick capability set.
//!
//! [`Joystick`] is implemented by the pin-level driver
//! ([`AxisJoystick`](crate::axis::AxisJoystick)) and by decorators such as
//! [`XYReplacerJoystick`](crate::replacer::XYReplacerJoystick). Call sites
//! should depend on the trait so the two are interchangeable.
//!
//! Every method takes `&mut self`: each call may sample the hardware again.
//! Predicates are not cached, so `is_up()` followed by `is_down()` can observe
//! two different hardware states if the stick moves in between.

use crate::event::Move;
use crate::platform::Level;

pub trait Joystick {
    /// Edge-triggered read: reports a move once, then [`Move::None`] while it is held.
    fn single_read(&mut self) -> Move;

    /// Level-triggered read: reports the current move on every call.
    fn multiple_read(&mut self) -> Move;

    fn is_press(&mut self) -> bool;
    fn is_up(&mut self) -> bool;
    fn is_down(&mut self) -> bool;
    fn is_right(&mut self) -> bool;
    fn is_left(&mut self) -> bool;

    /// Raw X-axis ADC sample.
    fn read_vrx(&mut self) -> u16;

    /// Raw Y-axis ADC sample.
    fn read_vry(&mut self) -> u16;

    /// Raw button level. `Low` means pressed.
    fn read_sw(&mut self) -> Level;

    #[deprecated(note = "use `read_vrx`")]
    fn x_axis(&mut self) -> u16 {
        self.read_vrx()
    }

    #[deprecated(note = "use `read_vry`")]
    fn y_axis(&mut self) -> u16 {
        self.read_vry()
    }
}

macro_rules! forward_joystick {
    ($($ty:ty),*) => {$(
        #[allow(deprecated)]
        impl<J: Joystick + ?Sized> Joystick for $ty {
            fn single_read(&mut self) -> Move { (**self).single_read() }
            fn multiple_read(&mut self) -> Move { (**self).multiple_read() }
            fn is_press(&mut self) -> bool { (**self).is_press() }
            fn is_up(&mut self) -> bool { (**self).is_up() }
            fn is_down(&mut self) -> bool { (**self).is_down() }
            fn is_right(&mut self) -> bool { (**self).is_right() }
            fn is_left(&mut self) -> bool { (**self).is_left() }
            fn read_vrx(&mut self) -> u16 { (**self).read_vrx() }
            fn read_vry(&mut self) -> u16 { (**self).read_vry() }
            fn read_sw(&mut self) -> Level { (**self).read_sw() }
            // Decorators may override the aliases, so forward them too.
            fn x_axis(&mut self) -> u16 { (**self).x_axis() }
            fn y_axis(&mut self) -> u16 { (**self).y_axis() }
        }
    )*};
}

forward_joystick!(&mut J, Box<J>);
