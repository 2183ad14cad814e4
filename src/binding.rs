//! Pin bindings and mounting orientation, loadable from TOML.
//!
//! ```toml
//! orientation = "swap_xy"   # optional, default "normal"
//!
//! [pins]
//! sw = 2
//! vrx = 14
//! vry = 15
//! ```
//!
//! Thresholds are not part of the config; they are fixed in [`crate::axis`].

use crate::axis::AxisJoystick;
use crate::device::Joystick;
use crate::error::{JoystickError, Result};
use crate::platform::{Pin, Platform};
use crate::replacer::XYReplacerJoystick;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The three pins a joystick module is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinBinding {
    /// Digital pin of the push button.
    pub sw: Pin,
    /// Analog pin of the X axis.
    pub vrx: Pin,
    /// Analog pin of the Y axis.
    pub vry: Pin,
}

impl PinBinding {
    pub fn new(sw: impl Into<Pin>, vrx: impl Into<Pin>, vry: impl Into<Pin>) -> Self {
        Self {
            sw: sw.into(),
            vrx: vrx.into(),
            vry: vry.into(),
        }
    }

    /// Rejects a binding that reuses a pin for two roles.
    pub fn validate(&self) -> Result<()> {
        if self.sw == self.vrx || self.sw == self.vry {
            return Err(JoystickError::DuplicatePin(self.sw));
        }
        if self.vrx == self.vry {
            return Err(JoystickError::DuplicatePin(self.vrx));
        }
        Ok(())
    }
}

/// How the module is mounted relative to the UI's notion of up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Normal,
    /// Rotated 90°: X and Y meanings are exchanged.
    SwapXy,
}

/// Serializable description of one joystick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoystickConfig {
    #[serde(default)]
    pub orientation: Orientation,
    pub pins: PinBinding,
}

impl JoystickConfig {
    pub fn new(pins: PinBinding, orientation: Orientation) -> Self {
        Self { orientation, pins }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.pins.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded joystick config from {}", path.display());
        Ok(config)
    }

    /// Construct the driver, wrapped according to `orientation`.
    pub fn build<'a, P: Platform + 'a>(&self, platform: P) -> Box<dyn Joystick + 'a> {
        let PinBinding { sw, vrx, vry } = self.pins;
        let stick = AxisJoystick::new(platform, sw, vrx, vry);
        match self.orientation {
            Orientation::Normal => Box::new(stick),
            Orientation::SwapXy => Box::new(XYReplacerJoystick::new(stick)),
        }
    }
}
