//! Classified joystick events.
//!
//! A single read of the joystick produces exactly one [`Move`]. Raw analog and
//! digital samples are reduced to this enum by [`AxisJoystick`](crate::axis::AxisJoystick).
//!
//! ## Axis conventions
//! - **X axis:** deflection high is [`Move::Up`], deflection low is [`Move::Down`].
//! - **Y axis:** deflection high is [`Move::Right`], deflection low is [`Move::Left`].
//! - **Button:** [`Move::Press`], reported ahead of any axis deflection.
//!
//! Diagonals are not modelled: when both axes are deflected the X axis wins.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one classification pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Move {
    /// The button is held down.
    Press,
    /// X axis deflected high.
    Up,
    /// X axis deflected low.
    Down,
    /// Y axis deflected high.
    Right,
    /// Y axis deflected low.
    Left,
    /// Nothing pressed, or (for edge-triggered reads) nothing changed.
    #[default]
    None,
}

impl Move {
    /// Every variant, in declaration order.
    pub const ALL: [Move; 6] = [
        Move::Press,
        Move::Up,
        Move::Down,
        Move::Right,
        Move::Left,
        Move::None,
    ];

    /// Exchange X-axis and Y-axis meaning: `Up <-> Right`, `Down <-> Left`.
    ///
    /// `Press` and `None` are fixed points, so applying this twice is the identity.
    #[inline]
    pub const fn swap_axes(self) -> Move {
        match self {
            Move::Up => Move::Right,
            Move::Right => Move::Up,
            Move::Down => Move::Left,
            Move::Left => Move::Down,
            other => other,
        }
    }

    /// Lowercase name, matching the serde representation.
    pub const fn name(self) -> &'static str {
        match self {
            Move::Press => "press",
            Move::Up => "up",
            Move::Down => "down",
            Move::Right => "right",
            Move::Left => "left",
            Move::None => "none",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_axes_is_an_involution() {
        for m in Move::ALL {
            assert_eq!(m.swap_axes().swap_axes(), m);
        }
    }

    #[test]
    fn swap_axes_maps_x_to_y() {
        assert_eq!(Move::Up.swap_axes(), Move::Right);
        assert_eq!(Move::Down.swap_axes(), Move::Left);
        assert_eq!(Move::Right.swap_axes(), Move::Up);
        assert_eq!(Move::Left.swap_axes(), Move::Down);
        assert_eq!(Move::Press.swap_axes(), Move::Press);
        assert_eq!(Move::None.swap_axes(), Move::None);
    }

    #[test]
    fn default_is_none() {
        assert_eq!(Move::default(), Move::None);
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Move::Right.to_string(), "right");
        assert_eq!(format!("{}", Move::None), "none");
    }
}
