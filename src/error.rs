use crate::platform::Pin;
use thiserror::Error;

/// Errors raised while assembling a joystick. Reads never fail.
#[derive(Debug, Error)]
pub enum JoystickError {
    #[error("decorator requires an origin joystick, got none")]
    MissingOrigin,

    #[error("{0} is bound to more than one joystick role")]
    DuplicatePin(Pin),

    #[error("invalid joystick config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, JoystickError>;
