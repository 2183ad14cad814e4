//! Platform backends for `axisjoy`.
//!
//! Implementations of [`Platform`](crate::platform::Platform). Real boards
//! implement the trait against their own HAL; this crate ships only the
//! in-memory [`virtual_input::VirtualPlatform`].

pub mod virtual_input;
