//! Two-axis analog joystick driver.
//!
//! Reads a thumb joystick module (two potentiometers plus a push button)
//! through a [`Platform`] and reduces each sample to a [`Move`].
//!
//! - [`AxisJoystick`] talks to the pins.
//! - [`XYReplacerJoystick`] swaps X/Y meaning for rotated mounts.
//! - [`JoystickConfig`] loads pin bindings and orientation from TOML.
//!
//! Both drivers implement [`Joystick`] and are interchangeable at the call site.

pub mod axis;
pub mod backends;
pub mod binding;
pub mod device;
pub mod error;
pub mod event;
pub mod platform;
pub mod replacer;

pub use axis::AxisJoystick;
pub use binding::*;
pub use device::*;
pub use error::*;
pub use event::*;
pub use platform::*;
pub use replacer::*;
